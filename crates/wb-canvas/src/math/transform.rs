//! Camera transform and screen/canvas projection

use serde::{Deserialize, Serialize};
use super::geometry::safe_scale;
use super::{Size, Vec2};

/// Camera state mapping canvas units to viewport pixels
///
/// The canvas origin sits at the geometric center of the viewport. `x`/`y`
/// is the pan offset in canvas units, applied before `scale`, so a canvas
/// point `p` is painted at `viewport_center + ((x, y) + p) * scale`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::at_scale(1.0)
    }
}

impl Transform {
    /// Create a transform
    #[inline]
    pub const fn new(x: f64, y: f64, scale: f64) -> Self {
        Self { x, y, scale }
    }

    /// Centered transform at the given scale
    #[inline]
    pub const fn at_scale(scale: f64) -> Self {
        Self { x: 0.0, y: 0.0, scale }
    }

    /// Pan offset as a vector
    #[inline]
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Same scale, different pan offset
    #[inline]
    pub fn with_offset(self, offset: Vec2) -> Self {
        Self { x: offset.x, y: offset.y, ..self }
    }

    /// Translate the pan offset by a canvas-unit delta
    #[inline]
    pub fn translated(self, delta: Vec2) -> Self {
        self.with_offset(self.offset() + delta)
    }

    /// Projection for a viewport of the given size
    #[inline]
    pub fn projection(&self, viewport: Size) -> Projection {
        Projection::new(*self, viewport)
    }

    /// Linear interpolation between two transforms
    #[inline]
    pub fn lerp(from: &Transform, to: &Transform, t: f64) -> Transform {
        let offset = Vec2::lerp(from.offset(), to.offset(), t);
        Transform {
            x: offset.x,
            y: offset.y,
            scale: from.scale + (to.scale - from.scale) * t,
        }
    }
}

/// Screen <-> canvas mapping for one frame
///
/// `origin` is the viewport pixel where canvas `(0, 0)` is painted, i.e. the
/// center of the transformed container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub origin: Vec2,
    pub scale: f64,
}

impl Projection {
    /// Projection for a transform rendered into a viewport
    pub fn new(transform: Transform, viewport: Size) -> Self {
        let scale = safe_scale(transform.scale);
        Self {
            origin: viewport.half() + transform.offset() * scale,
            scale,
        }
    }

    /// Fallback used when no viewport is known: scale 1, origin top-left
    pub const fn identity() -> Self {
        Self {
            origin: Vec2::ZERO,
            scale: 1.0,
        }
    }

    /// Convert viewport pixels to canvas units
    #[inline]
    pub fn to_canvas(&self, screen: Vec2) -> Vec2 {
        (screen - self.origin) / safe_scale(self.scale)
    }

    /// Convert canvas units to viewport pixels
    #[inline]
    pub fn to_screen(&self, canvas: Vec2) -> Vec2 {
        self.origin + canvas * self.scale
    }
}
