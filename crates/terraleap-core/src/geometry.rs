use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in integer pixel coordinates (y grows downward).
///
/// Edges follow the half-open convention: `right()` and `bottom()` are one
/// past the last covered pixel, so two rectangles sharing an edge do not
/// intersect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Move the rectangle so its bottom edge sits at `y`.
    pub fn set_bottom(&mut self, y: i32) {
        self.y = y - self.h;
    }

    /// Move the rectangle so its top edge sits at `y`.
    pub fn set_top(&mut self, y: i32) {
        self.y = y;
    }

    /// Copy of this rectangle shifted by `(dx, dy)`.
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Shrink each edge independently. Sizes never go below zero.
    pub fn inset(&self, left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self {
            x: self.x + left,
            y: self.y + top,
            w: (self.w - left - right).max(0),
            h: (self.h - top - bottom).max(0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Strict overlap test. Empty rectangles never intersect anything.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}
