//! Axis-aligned rectangles for card bounds and screen rects

use serde::{Deserialize, Serialize};
use super::{Size, Vec2};

/// Axis-aligned rectangle, `(x, y)` is the top-left corner
///
/// Containment is half-open: the left and top edges are inside, the right
/// and bottom edges are not.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle of `size` centered on `center`
    pub fn from_center_size(center: Vec2, size: Size) -> Self {
        let top_left = center - size.half();
        Self::new(top_left.x, top_left.y, size.width, size.height)
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        (self.x..self.right()).contains(&p.x) && (self.y..self.bottom()).contains(&p.y)
    }

    /// Square of side `side` tucked into the top-right corner
    pub fn top_right_square(&self, side: f64) -> Rect {
        Rect::new(self.right() - side, self.y, side, side)
    }

    /// Square of side `side` tucked into the bottom-right corner
    pub fn bottom_right_square(&self, side: f64) -> Rect {
        Rect::new(self.right() - side, self.bottom() - side, side, side)
    }
}
