//! Core geometry types for the canvas
//!
//! Basic 2D math for positions, card footprints, the camera transform and
//! the scale/pan guards every other component relies on.

mod vec2;
mod rect;
mod size;
mod transform;
pub mod geometry;

pub use vec2::Vec2;
pub use rect::Rect;
pub use size::Size;
pub use transform::{Projection, Transform};
pub use geometry::{
    calculate_boundaries, clamp_offset, clamp_scale, compute_minimum_scale, safe_scale,
    PanBounds, MIN_SAFE_SCALE,
};
