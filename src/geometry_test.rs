#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn fraction_at_corners() {
    let b = Bounds::new(100.0, 50.0, 200.0, 100.0);
    assert_eq!(b.fraction(Point::new(100.0, 50.0)), Point::new(0.0, 0.0));
    assert_eq!(b.fraction(Point::new(300.0, 150.0)), Point::new(1.0, 1.0));
}

#[test]
fn fraction_at_centre() {
    let b = Bounds::new(0.0, 0.0, 40.0, 20.0);
    assert_eq!(b.fraction(Point::new(20.0, 10.0)), Point::new(0.5, 0.5));
}

#[test]
fn fraction_outside_box_exceeds_unit_range() {
    let b = Bounds::new(0.0, 0.0, 10.0, 10.0);
    let f = b.fraction(Point::new(-5.0, 20.0));
    assert_eq!(f.x, -0.5);
    assert_eq!(f.y, 2.0);
}

#[test]
fn zero_sized_box_maps_to_centre() {
    let b = Bounds::new(10.0, 10.0, 0.0, 0.0);
    assert_eq!(b.fraction(Point::new(99.0, -3.0)), Point::new(0.5, 0.5));
}
