//! Flip cards.

#[cfg(test)]
#[path = "flip_test.rs"]
mod flip_test;

/// Class present on a flip card while it shows its back face.
pub const ACTIVE_CLASS: &str = "active";

/// Face shown by a flip card. Starts on the front (inactive).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlipCard {
    active: bool,
}

impl FlipCard {
    #[must_use]
    pub fn is_active(self) -> bool {
        self.active
    }

    /// Flip the card. Returns whether it is now active.
    pub fn flip(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }
}
