//! Card hover tilt.
//!
//! Rotation is proportional to the pointer's offset from the card centre:
//! up to ±6° around Y (left-right) and ±5° around X (up-down).

#[cfg(test)]
#[path = "tilt_test.rs"]
mod tilt_test;

use crate::consts::{TILT_X_RANGE_DEG, TILT_Y_RANGE_DEG};
use crate::geometry::{Bounds, Point};

/// Class present on a card while it is tilted.
pub const TILT_CLASS: &str = "tilt";

/// Rotation of a card, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// Tilt for a pointer at `pointer` over a card occupying `bounds`.
    #[must_use]
    pub fn from_pointer(bounds: Bounds, pointer: Point) -> Self {
        let f = bounds.fraction(pointer);
        Self {
            rotate_x: (0.5 - f.y) * TILT_X_RANGE_DEG,
            rotate_y: (f.x - 0.5) * TILT_Y_RANGE_DEG,
        }
    }

    /// CSS `transform` value.
    #[must_use]
    pub fn transform(&self) -> String {
        format!(
            "rotateX({}deg) rotateY({}deg) translateZ(6px)",
            self.rotate_x, self.rotate_y
        )
    }

    /// CSS `box-shadow` value; the shadow falls away from the raised edge.
    #[must_use]
    pub fn box_shadow(&self) -> String {
        format!(
            "{}px {}px 30px rgba(0,0,0,0.18)",
            -self.rotate_y,
            self.rotate_x.abs()
        )
    }
}
