//! Drag-to-pan gesture over empty canvas
//!
//! Mouse and single-touch input share one delta-based stream. Each move
//! converts the pixel delta since the previous move to canvas units and
//! applies it unanimated, so the pan tracks the pointer at any zoom.

use tracing::trace;
use crate::viewport::ViewportController;
use super::{InputResult, PointerEvent};
use crate::math::{safe_scale, Vec2};

/// Pan gesture state
#[derive(Clone, Debug, Default)]
pub struct GestureUnifier {
    last: Option<Vec2>,
}

impl GestureUnifier {
    /// Create an idle gesture
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a pan is in progress
    #[inline]
    pub fn is_panning(&self) -> bool {
        self.last.is_some()
    }

    /// Begin panning at the event's primary position
    pub fn start(&mut self, event: &PointerEvent) -> InputResult {
        match event.primary_position() {
            Some(pos) => {
                self.last = Some(pos);
                InputResult::Handled
            }
            None => InputResult::Unhandled,
        }
    }

    /// Pan by the delta since the last recorded position
    pub fn update(
        &mut self,
        event: &PointerEvent,
        viewport: &mut ViewportController,
        now_ms: f64,
    ) -> InputResult {
        let (Some(last), Some(pos)) = (self.last, event.primary_position()) else {
            return InputResult::Unhandled;
        };
        let delta = pos - last;
        self.last = Some(pos);
        trace!(dx = delta.x, dy = delta.y, "pan");
        viewport.update_transform(
            |prev| prev.translated(delta / safe_scale(prev.scale)),
            false,
            now_ms,
        );
        InputResult::Handled
    }

    /// Stop panning
    pub fn end(&mut self) -> InputResult {
        self.last.take().is_some().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CanvasConfig;
    use crate::math::{Size, Transform};

    fn viewport() -> ViewportController {
        let mut viewport = ViewportController::new(&CanvasConfig::default());
        viewport.resize(Size::new(800.0, 600.0), 0.0);
        viewport.set_transform(Transform::at_scale(2.0), false, 0.0);
        viewport
    }

    #[test]
    fn test_pan_converts_pixels_to_canvas_units() {
        let mut viewport = viewport();
        let mut gesture = GestureUnifier::new();

        assert!(gesture.start(&PointerEvent::mouse(100.0, 100.0)).is_handled());
        gesture.update(&PointerEvent::mouse(130.0, 90.0), &mut viewport, 0.0);
        gesture.update(&PointerEvent::mouse(140.0, 95.0), &mut viewport, 0.0);

        let t = viewport.transform();
        // 40px and -5px at scale 2
        assert!((t.x - 20.0).abs() < 1e-9);
        assert!((t.y + 2.5).abs() < 1e-9);
        assert!((t.scale - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_hundred_pixel_pan_at_double_zoom() {
        let mut viewport = viewport();
        let mut gesture = GestureUnifier::new();
        gesture.start(&PointerEvent::mouse(200.0, 300.0));
        gesture.update(&PointerEvent::mouse(300.0, 300.0), &mut viewport, 0.0);
        assert!((viewport.transform().x - 50.0).abs() < 1e-9);
        assert!(viewport.transform().y.abs() < 1e-9);
    }

    #[test]
    fn test_pan_keeps_canvas_point_under_pointer() {
        let mut viewport = viewport();
        let mut gesture = GestureUnifier::new();
        let start = Vec2::new(250.0, 410.0);
        let grabbed = viewport.projection().to_canvas(start);

        gesture.start(&PointerEvent::mouse(start.x, start.y));
        gesture.update(&PointerEvent::mouse(520.0, 80.0), &mut viewport, 0.0);

        let under = viewport.projection().to_canvas(Vec2::new(520.0, 80.0));
        assert!((under.x - grabbed.x).abs() < 1e-9);
        assert!((under.y - grabbed.y).abs() < 1e-9);
    }

    #[test]
    fn test_move_without_start_is_ignored() {
        let mut viewport = viewport();
        let mut gesture = GestureUnifier::new();
        let result = gesture.update(&PointerEvent::mouse(10.0, 10.0), &mut viewport, 0.0);
        assert_eq!(result, InputResult::Unhandled);
        assert_eq!(viewport.transform(), Transform::at_scale(2.0));
    }

    #[test]
    fn test_only_first_touch_drives_pan() {
        let mut viewport = viewport();
        let mut gesture = GestureUnifier::new();
        gesture.start(&PointerEvent::touch(0.0, 0.0));
        gesture.update(
            &PointerEvent::Touch {
                touches: vec![Vec2::new(10.0, 0.0), Vec2::new(500.0, 500.0)],
            },
            &mut viewport,
            0.0,
        );
        assert!((viewport.transform().x - 5.0).abs() < 1e-9);
        assert!(viewport.transform().y.abs() < 1e-9);
    }

    #[test]
    fn test_end_clears_panning() {
        let mut gesture = GestureUnifier::new();
        gesture.start(&PointerEvent::mouse(0.0, 0.0));
        assert!(gesture.is_panning());
        assert!(gesture.end().is_handled());
        assert!(!gesture.is_panning());
        assert!(!gesture.end().is_handled());
    }
}
