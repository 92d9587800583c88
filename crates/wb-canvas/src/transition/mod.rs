//! Camera transition animations
//!
//! Animations are advisory: the committed transform changes immediately and
//! the transition only describes the eased path the renderer may show.

mod camera;
mod easing;

pub use camera::CameraTransition;
pub use easing::ease_out_cubic;

/// Default length of the camera animation window (ms)
pub const DEFAULT_ANIMATION_MS: f64 = 300.0;
