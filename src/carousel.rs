//! Carousel paging model.
//!
//! Tracks which item is first in view for a fixed number of items. The index
//! is clamped to `[0, len - visible]`: paging past either end holds at the
//! boundary rather than wrapping. Layout (item width, gap) is supplied at
//! render time so the model never touches the DOM.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use crate::consts::{CAROUSEL_MEDIUM_PX, CAROUSEL_NARROW_PX};

/// Width thresholds that decide how many items are visible at once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    /// Below this width one item is visible.
    pub narrow: f64,
    /// Below this width two items are visible; at or above it, three.
    pub medium: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self { narrow: CAROUSEL_NARROW_PX, medium: CAROUSEL_MEDIUM_PX }
    }
}

impl Breakpoints {
    /// Number of items visible in a container `width` pixels wide.
    #[must_use]
    pub fn visible_count(&self, width: f64) -> usize {
        if width < self.narrow {
            1
        } else if width < self.medium {
            2
        } else {
            3
        }
    }
}

/// Paging direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Prev,
    Next,
}

impl Step {
    fn delta(self) -> isize {
        match self {
            Self::Prev => -1,
            Self::Next => 1,
        }
    }
}

/// Paging state for `len` items.
#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    visible: usize,
    index: usize,
    breakpoints: Breakpoints,
}

impl Carousel {
    /// A carousel over `len` items, laid out for a container `width` pixels wide.
    #[must_use]
    pub fn new(len: usize, width: f64, breakpoints: Breakpoints) -> Self {
        Self { len, visible: breakpoints.visible_count(width), index: 0, breakpoints }
    }

    /// Index of the first visible item.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// How many items are visible at the current width.
    #[must_use]
    pub fn visible(&self) -> usize {
        self.visible
    }

    /// Total number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Largest valid index: `max(0, len - visible)`.
    #[must_use]
    pub fn max_index(&self) -> usize {
        self.len.saturating_sub(self.visible)
    }

    /// Move one item in `step` direction, holding at either end.
    ///
    /// Returns `true` if the index changed.
    pub fn advance(&mut self, step: Step) -> bool {
        let before = self.index;
        let target = self.index.saturating_add_signed(step.delta());
        self.index = target.min(self.max_index());
        self.index != before
    }

    /// Recompute the visible count for a new container width and re-clamp.
    pub fn resize(&mut self, width: f64) {
        self.visible = self.breakpoints.visible_count(width);
        self.index = self.index.min(self.max_index());
    }

    /// Horizontal track offset in pixels: `-(item_width + gap) * index`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn offset(&self, item_width: f64, gap: f64) -> f64 {
        if self.index == 0 {
            return 0.0;
        }
        -((item_width + gap) * self.index as f64)
    }

    /// CSS transform placing the track at [`Self::offset`].
    #[must_use]
    pub fn transform(&self, item_width: f64, gap: f64) -> String {
        format!("translateX({}px)", self.offset(item_width, gap))
    }
}
