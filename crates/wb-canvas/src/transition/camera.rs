//! Animated camera transition

use super::ease_out_cubic;
use crate::math::Transform;

/// Eased move between two camera transforms
///
/// The target is already committed on the viewport controller; this only
/// describes what a host without CSS transitions should paint meanwhile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraTransition {
    /// Transform displayed when the transition started
    pub from: Transform,
    /// Committed target transform
    pub to: Transform,
    /// Start time (ms timestamp)
    pub start_ms: f64,
    /// Window length in ms
    pub duration_ms: f64,
}

impl CameraTransition {
    /// Create a transition starting at `start_ms`
    pub fn new(from: Transform, to: Transform, start_ms: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
        }
    }

    /// Get the progress (0.0 to 1.0)
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Check if the window has closed
    #[inline]
    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Eased transform for the given time
    pub fn current(&self, now_ms: f64) -> Transform {
        let t = ease_out_cubic(self.progress(now_ms));
        Transform::lerp(&self.from, &self.to, t)
    }

    /// Final transform
    #[inline]
    pub fn final_transform(&self) -> Transform {
        self.to
    }
}
