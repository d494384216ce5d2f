#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn pointer_at_centre_only_scales() {
    let b = Bounds::new(0.0, 0.0, 1000.0, 400.0);
    assert_eq!(pointer_transform(b, Point::new(500.0, 200.0)), "scale(1.03) translate(0px, 0px)");
}

#[test]
fn pointer_at_corner_shifts_three_pixels() {
    let b = Bounds::new(0.0, 0.0, 1000.0, 400.0);
    assert_eq!(pointer_transform(b, Point::new(1000.0, 0.0)), "scale(1.03) translate(3px, -3px)");
}

#[test]
fn scroll_at_top_is_still() {
    let s = ScrollEffect::at(0.0);
    assert_eq!(s.shift, 0.0);
    assert!(!s.blur);
    assert_eq!(s.transform(), "translateY(0px) scale(1)");
}

#[test]
fn scroll_shift_is_proportional_below_cap() {
    let s = ScrollEffect::at(100.0);
    assert!((s.shift - 8.0).abs() < 1e-9);
}

#[test]
fn scroll_shift_saturates() {
    assert_eq!(ScrollEffect::at(400.0).shift, 30.0);
    assert_eq!(ScrollEffect::at(10_000.0).shift, 30.0);
}

#[test]
fn blur_starts_strictly_after_threshold() {
    assert!(!ScrollEffect::at(60.0).blur);
    assert!(ScrollEffect::at(61.0).blur);
}
