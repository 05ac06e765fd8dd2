#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point in page space (CSS pixels relative to the page element, or
/// client pixels for raw pointer input; deltas are the same in both).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates are real numbers. A NaN or infinite coordinate
    /// cannot be stored: JSON has no encoding for it.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Component-wise `self - origin`.
    #[must_use]
    pub fn delta_from(self, origin: Point) -> Point {
        Point { x: self.x - origin.x, y: self.y - origin.y }
    }

    /// Component-wise `self + delta`.
    #[must_use]
    pub fn offset(self, delta: Point) -> Point {
        Point { x: self.x + delta.x, y: self.y + delta.y }
    }

    /// Angle of `self` around `center`, in degrees, measured like `atan2(dy, dx)`.
    ///
    /// Screen y grows downward, so positive angles run clockwise on screen,
    /// which matches the direction of a CSS `rotate()`.
    #[must_use]
    pub fn angle_around(self, center: Point) -> f64 {
        let d = self.delta_from(center);
        d.y.atan2(d.x).to_degrees()
    }
}

/// A width/height pair in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Grow by `delta` and clamp each side to its floor in `min`.
    #[must_use]
    pub fn grow_clamped(self, delta: Point, min: Size) -> Size {
        Size {
            width: (self.width + delta.x).max(min.width),
            height: (self.height + delta.y).max(min.height),
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }

    /// Both sides strictly positive.
    #[must_use]
    pub fn is_known(self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Axis-aligned rectangle, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point { x: self.x + self.width * 0.5, y: self.y + self.height * 0.5 }
    }
}
