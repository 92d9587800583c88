//! Viewport controller: the single owner of the camera transform
//!
//! Every producer of camera changes (pan gestures, wheel, zoom buttons, card
//! focus) goes through [`ViewportController::update_transform`], which
//! re-clamps the scale and, under [`PanPolicy::Bounded`], the pan offset.
//!
//! Time is injected as `now_ms` so the animation window can be driven by any
//! clock (the browser's `Date.now()`, or a fake one in tests).

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};
use crate::config::{CanvasConfig, PanPolicy};
use crate::math::{
    clamp_offset, clamp_scale, compute_minimum_scale, safe_scale, Projection, Size, Transform, Vec2,
};
use crate::transition::CameraTransition;

/// Raw wheel event in viewport pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelInput {
    pub delta_x: f64,
    pub delta_y: f64,
    /// Pointer position
    pub x: f64,
    pub y: f64,
    /// Precision-zoom modifier (ctrl / cmd, or a trackpad pinch)
    #[serde(default)]
    pub precision: bool,
}

/// Camera state and the operations that change it
#[derive(Clone, Debug)]
pub struct ViewportController {
    transform: Transform,
    viewport: Size,
    scale_min: f64,
    scale_max: f64,
    scale_initial: f64,
    zoom_step: f64,
    wheel_zoom_factor: f64,
    animation_ms: f64,
    pan_policy: PanPolicy,
    canvas: Size,
    transition: Option<CameraTransition>,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(&CanvasConfig::default())
    }
}

impl ViewportController {
    /// Create a controller at the configured initial scale
    pub fn new(config: &CanvasConfig) -> Self {
        let mut controller = Self {
            transform: Transform::default(),
            viewport: Size::ZERO,
            scale_min: config.scale_min,
            scale_max: config.scale_max,
            scale_initial: config.scale_initial,
            zoom_step: config.zoom_step,
            wheel_zoom_factor: config.wheel_zoom_factor,
            animation_ms: config.animation_ms,
            pan_policy: config.pan_policy,
            canvas: config.canvas_size(),
            transition: None,
        };
        controller.transform = controller.constrain(Transform::at_scale(config.scale_initial));
        controller
    }

    /// Committed camera transform
    #[inline]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Current viewport size in pixels
    #[inline]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Current scale
    #[inline]
    pub fn scale(&self) -> f64 {
        self.transform.scale
    }

    /// Allowed scale range
    #[inline]
    pub fn scale_range(&self) -> (f64, f64) {
        (self.scale_min, self.scale_max)
    }

    /// Smallest scale at which the configured canvas extent fills the viewport
    pub fn fit_scale(&self) -> f64 {
        compute_minimum_scale(
            self.viewport.width,
            self.viewport.height,
            self.canvas.width,
            self.canvas.height,
        )
    }

    /// Screen <-> canvas mapping for the committed transform
    ///
    /// Without a known viewport this degrades to the identity mapping.
    pub fn projection(&self) -> Projection {
        if self.viewport.is_empty() {
            Projection::identity()
        } else {
            self.transform.projection(self.viewport)
        }
    }

    // =========================================================================
    // Transform updates
    // =========================================================================

    /// Replace the transform via an update function
    ///
    /// The result is always re-clamped. An animated update opens a fresh
    /// transition window from whatever is currently displayed; overlapping
    /// animated updates restart the window rather than queue. An unanimated
    /// update cancels any running window.
    pub fn update_transform<F>(&mut self, update: F, animate: bool, now_ms: f64)
    where
        F: FnOnce(Transform) -> Transform,
    {
        let displayed = self.displayed_transform(now_ms);
        let next = self.constrain(update(self.transform));

        self.transition = if animate {
            Some(CameraTransition::new(displayed, next, now_ms, self.animation_ms))
        } else {
            None
        };
        self.transform = next;
    }

    /// Replace the transform with a fixed value
    #[inline]
    pub fn set_transform(&mut self, next: Transform, animate: bool, now_ms: f64) {
        self.update_transform(|_| next, animate, now_ms);
    }

    /// Apply the scale clamp, the pan policy and the non-finite guard
    fn constrain(&self, next: Transform) -> Transform {
        let scale = clamp_scale(next.scale, self.scale_min, self.scale_max);
        let mut offset = next.offset();
        if !offset.is_finite() {
            warn!(x = offset.x, y = offset.y, "non-finite pan offset ignored");
            offset = self.transform.offset();
        }
        if self.pan_policy == PanPolicy::Bounded {
            offset = clamp_offset(offset, scale, self.viewport, self.canvas);
        }
        Transform::new(offset.x, offset.y, scale)
    }

    // =========================================================================
    // Animation window
    // =========================================================================

    /// Check whether the advisory animation window is open
    pub fn is_transitioning(&self, now_ms: f64) -> bool {
        self.transition
            .as_ref()
            .is_some_and(|transition| !transition.is_complete(now_ms))
    }

    /// Close a finished animation window; returns whether one is still open
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if let Some(transition) = &self.transition {
            if transition.is_complete(now_ms) {
                self.transition = None;
            }
        }
        self.transition.is_some()
    }

    /// Eased transform to paint at `now_ms`
    pub fn displayed_transform(&self, now_ms: f64) -> Transform {
        match &self.transition {
            Some(transition) => transition.current(now_ms),
            None => self.transform,
        }
    }

    // =========================================================================
    // Zoom and pan operations
    // =========================================================================

    /// Zoom to `new_scale` keeping the canvas point under `focal` stationary
    ///
    /// `focal` is in viewport pixels. With `f` its offset from the viewport
    /// center and `k = new / old`, the pan becomes `t - (f / old) * (1 - 1/k)`.
    pub fn zoom_toward_point(&mut self, new_scale: f64, focal: Vec2, animate: bool, now_ms: f64) {
        let (min, max) = (self.scale_min, self.scale_max);
        let focal = focal - self.viewport.half();
        self.update_transform(
            |prev| {
                let target = clamp_scale(new_scale, min, max);
                let old = safe_scale(prev.scale);
                let factor = target / old;
                let offset = prev.offset() - (focal / old) * (1.0 - 1.0 / factor);
                Transform::new(offset.x, offset.y, target)
            },
            animate,
            now_ms,
        );
    }

    /// Handle a wheel event: zoom when the precision modifier is held, pan otherwise
    pub fn handle_wheel(&mut self, wheel: WheelInput, now_ms: f64) {
        if wheel.precision {
            let delta = -wheel.delta_y;
            if delta == 0.0 || !delta.is_finite() {
                return;
            }
            let step = self.wheel_zoom_factor * delta.abs() / 10.0;
            let factor = if delta > 0.0 { 1.0 + step } else { 1.0 - step };
            let new_scale = self.transform.scale * factor.max(0.0);
            trace!(delta, new_scale, "wheel zoom");
            self.zoom_toward_point(new_scale, Vec2::new(wheel.x, wheel.y), false, now_ms);
        } else {
            let delta = Vec2::new(wheel.delta_x, wheel.delta_y);
            if !delta.is_finite() {
                return;
            }
            trace!(dx = delta.x, dy = delta.y, "wheel pan");
            self.update_transform(
                |prev| prev.translated(-delta / safe_scale(prev.scale)),
                false,
                now_ms,
            );
        }
    }

    /// Zoom in by one step toward the viewport center
    pub fn zoom_in(&mut self, animate: bool, now_ms: f64) {
        let target = self.transform.scale * self.zoom_step;
        self.zoom_toward_point(target, self.viewport.half(), animate, now_ms);
    }

    /// Zoom out by one step toward the viewport center
    pub fn zoom_out(&mut self, animate: bool, now_ms: f64) {
        let target = self.transform.scale / self.zoom_step;
        self.zoom_toward_point(target, self.viewport.half(), animate, now_ms);
    }

    /// Reset to the centered initial view
    pub fn center_view(&mut self, animate: bool, now_ms: f64) {
        self.set_transform(Transform::at_scale(self.scale_initial), animate, now_ms);
    }

    /// Track a viewport size change: re-center the pan, keep the scale
    pub fn resize(&mut self, viewport: Size, now_ms: f64) {
        if viewport.is_empty() {
            warn!(
                width = viewport.width,
                height = viewport.height,
                "degenerate viewport; pointer math falls back to identity"
            );
        }
        self.viewport = viewport;
        self.update_transform(|prev| prev.with_offset(Vec2::ZERO), false, now_ms);
    }
}
