//! Focus outlines for keyboard users.
//!
//! Pressing Tab turns outlines on; any mouse press turns them off again.

#[cfg(test)]
#[path = "outline_test.rs"]
mod outline_test;

/// Body class that enables focus outlines in the stylesheet.
pub const OUTLINE_CLASS: &str = "show-outline";

/// Input that may change outline visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlineInput<'a> {
    KeyDown(&'a str),
    MouseDown,
}

/// New outline visibility after `input`, or `None` if it does not change it.
#[must_use]
pub fn outline_after(input: OutlineInput<'_>) -> Option<bool> {
    match input {
        OutlineInput::KeyDown("Tab") => Some(true),
        OutlineInput::KeyDown(_) => None,
        OutlineInput::MouseDown => Some(false),
    }
}
