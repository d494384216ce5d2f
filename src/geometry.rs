//! Pointer position relative to an element's bounding box.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// A point in viewport (client) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An element's bounding box in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Pointer position as a fraction of the box: `(0, 0)` top-left, `(1, 1)` bottom-right.
    ///
    /// A zero-sized box maps every point to its centre.
    #[must_use]
    pub fn fraction(&self, p: Point) -> Point {
        let fx = if self.width > 0.0 { (p.x - self.left) / self.width } else { 0.5 };
        let fy = if self.height > 0.0 { (p.y - self.top) / self.height } else { 0.5 };
        Point::new(fx, fy)
    }
}
