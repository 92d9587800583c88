//! Scale clamping and pan boundary math
//!
//! Pure functions shared by the viewport controller, the manipulation state
//! machine and the focus navigator.

use serde::{Deserialize, Serialize};
use super::{Size, Vec2};

/// Smallest scale ever used as a divisor.
pub const MIN_SAFE_SCALE: f64 = 1e-4;

/// Clamp `scale` into `[min, max]`.
///
/// Total over all inputs: `NaN` maps to `min`, and an inverted range
/// (`min > max`) yields `max` instead of panicking like `f64::clamp`.
#[inline]
pub fn clamp_scale(scale: f64, min: f64, max: f64) -> f64 {
    scale.max(min).min(max)
}

/// Scale value that is safe to divide by.
///
/// Non-finite scales degrade to 1.0, anything at or below zero is lifted to
/// [`MIN_SAFE_SCALE`].
#[inline]
pub fn safe_scale(scale: f64) -> f64 {
    if !scale.is_finite() {
        1.0
    } else {
        scale.max(MIN_SAFE_SCALE)
    }
}

/// Smallest scale at which the canvas extent fills the viewport
/// (`max(viewportW / canvasW, viewportH / canvasH)`).
pub fn compute_minimum_scale(
    viewport_width: f64,
    viewport_height: f64,
    canvas_width: f64,
    canvas_height: f64,
) -> f64 {
    if !(canvas_width > 0.0 && canvas_height > 0.0) {
        return MIN_SAFE_SCALE;
    }
    let scale_x = viewport_width / canvas_width;
    let scale_y = viewport_height / canvas_height;
    safe_scale(scale_x.max(scale_y))
}

/// Allowed range for the pan offset (canvas units)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PanBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl PanBounds {
    /// Clamp an offset into these bounds
    #[inline]
    pub fn clamp(&self, offset: Vec2) -> Vec2 {
        Vec2::new(
            offset.x.max(self.min_x).min(self.max_x),
            offset.y.max(self.min_y).min(self.max_y),
        )
    }
}

/// Pan bounds that keep a `canvas` extent, rendered at `scale`, from
/// drifting past the viewport edges.
///
/// The overhang `(canvas * scale - viewport) / 2` is measured in pixels and
/// divided back by `scale`, since the pan offset is in canvas units. When the
/// scaled extent is smaller than the viewport on an axis, the offset on that
/// axis is pinned to zero.
pub fn calculate_boundaries(scale: f64, viewport: Size, canvas: Size) -> PanBounds {
    let scale = safe_scale(scale);
    let scaled = canvas.scale(scale);
    let max_offset_x = ((scaled.width - viewport.width) / 2.0).max(0.0) / scale;
    let max_offset_y = ((scaled.height - viewport.height) / 2.0).max(0.0) / scale;

    PanBounds {
        min_x: -max_offset_x,
        max_x: max_offset_x,
        min_y: -max_offset_y,
        max_y: max_offset_y,
    }
}

/// Clamp a pan offset for the given scale, viewport and canvas extent
pub fn clamp_offset(offset: Vec2, scale: f64, viewport: Size, canvas: Size) -> Vec2 {
    calculate_boundaries(scale, viewport, canvas).clamp(offset)
}
