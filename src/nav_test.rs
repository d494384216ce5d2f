use super::*;

#[test]
fn starts_closed() {
    assert!(!Nav::default().is_open());
}

#[test]
fn toggle_opens_then_closes() {
    let mut nav = Nav::default();
    assert!(nav.toggle());
    assert!(!nav.toggle());
    assert!(!nav.is_open());
}

#[test]
fn link_click_on_narrow_layout_toggles() {
    assert!(link_click_toggles("A", 600.0, 900.0));
}

#[test]
fn link_click_on_wide_layout_is_ignored() {
    assert!(!link_click_toggles("A", 900.0, 900.0));
    assert!(!link_click_toggles("A", 1400.0, 900.0));
}

#[test]
fn non_link_click_is_ignored() {
    assert!(!link_click_toggles("LI", 400.0, 900.0));
    assert!(!link_click_toggles("SPAN", 400.0, 900.0));
}
