//! Banner parallax and scroll blur.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

use crate::consts::{
    BANNER_BLUR_AFTER_PX, BANNER_POINTER_SHIFT_PX, BANNER_SCROLL_FACTOR, BANNER_SCROLL_MAX_PX,
};
use crate::geometry::{Bounds, Point};

/// Class added to the banner image at mount.
pub const PARALLAX_CLASS: &str = "parallax";

/// Class present on the banner while the page is scrolled past the threshold.
pub const BLUR_CLASS: &str = "blur";

/// Transform applied when the pointer leaves the banner.
pub const REST_TRANSFORM: &str = "scale(1) translate(0,0)";

/// Image transform while the pointer is over the banner.
#[must_use]
pub fn pointer_transform(bounds: Bounds, pointer: Point) -> String {
    let f = bounds.fraction(pointer);
    let tx = (f.x - 0.5) * BANNER_POINTER_SHIFT_PX;
    let ty = (f.y - 0.5) * BANNER_POINTER_SHIFT_PX;
    format!("scale(1.03) translate({tx}px, {ty}px)")
}

/// Banner state derived from the page scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEffect {
    /// Downward image shift in pixels, saturating at the configured maximum.
    pub shift: f64,
    /// Whether the banner should blur.
    pub blur: bool,
}

impl ScrollEffect {
    #[must_use]
    pub fn at(scroll_y: f64) -> Self {
        Self {
            shift: (BANNER_SCROLL_FACTOR * scroll_y).min(BANNER_SCROLL_MAX_PX),
            blur: scroll_y > BANNER_BLUR_AFTER_PX,
        }
    }

    /// Image transform for this scroll position.
    #[must_use]
    pub fn transform(&self) -> String {
        format!("translateY({}px) scale(1)", self.shift)
    }
}
