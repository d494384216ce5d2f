//! Hamburger navigation state.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Class present on both the nav and the hamburger button while the menu is open.
pub const OPEN_CLASS: &str = "open";

/// Open/closed state of the collapsible navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nav {
    open: bool,
}

impl Nav {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip open/closed. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }
}

/// Whether a click on an element with `tag_name` inside the nav should toggle
/// the menu, given the window is `window_width` pixels wide.
///
/// Only link clicks on a collapsed (narrow) layout count.
#[must_use]
pub fn link_click_toggles(tag_name: &str, window_width: f64, collapse_below: f64) -> bool {
    tag_name.eq_ignore_ascii_case("a") && window_width < collapse_below
}
