//! Input routing for pointer, wheel and keyboard events

use tracing::trace;
use crate::input::{InputResult, Key, PointerEvent, WheelInput};
use crate::item::ItemRegion;
use crate::math::Vec2;
use super::CanvasEngine;

impl CanvasEngine {
    /// Handle pointer down
    ///
    /// A press on a card starts a drag, or toggles the corner control under
    /// the pointer. A press on empty canvas starts a pan. Card gestures never
    /// reach the pan gesture.
    pub fn pointer_down(&mut self, event: &PointerEvent, now_ms: f64) -> InputResult {
        if !event.is_primary() {
            return InputResult::Unhandled;
        }
        let Some(pos) = event.primary_position() else {
            return InputResult::Unhandled;
        };

        let projection = self.viewport.projection();
        let canvas_pos = projection.to_canvas(pos);
        match self.items.region_at(canvas_pos, self.filter) {
            Some((id, ItemRegion::Body)) => {
                self.manipulator
                    .start_drag(&mut self.items, &id, pos, &projection, now_ms)
            }
            Some((id, ItemRegion::ResizeHandle)) => {
                self.manipulator
                    .toggle_resize(&mut self.items, &id, pos, &projection)
            }
            Some((id, ItemRegion::ExpandButton)) => self.manipulator.toggle_expand(&mut self.items, &id),
            None => self.gesture.start(event),
        }
    }

    /// Handle pointer move
    ///
    /// Feeds the global drag and resize listeners and the pan gesture.
    pub fn pointer_move(&mut self, event: &PointerEvent, now_ms: f64) -> InputResult {
        let Some(pos) = event.primary_position() else {
            return InputResult::Unhandled;
        };

        let projection = self.viewport.projection();
        let dragged = self.manipulator.drag_move(&mut self.items, pos, &projection);
        let resized = self.manipulator.resize_move(&mut self.items, pos, &projection);
        let panned = self.gesture.update(event, &mut self.viewport, now_ms);

        (dragged.is_handled() || resized.is_handled() || panned.is_handled()).into()
    }

    /// Handle pointer up: ends a drag or a pan; an armed resize stays armed
    pub fn pointer_up(&mut self) -> InputResult {
        let dragged = self.manipulator.end_drag(&mut self.items);
        let panned = self.gesture.end();
        (dragged.is_handled() || panned.is_handled()).into()
    }

    /// Handle the pointer leaving the canvas surface
    ///
    /// A held press can no longer become a long press, and a pan stops.
    pub fn pointer_leave(&mut self) -> InputResult {
        self.manipulator.cancel_long_press();
        self.gesture.end()
    }

    /// Handle a wheel event (precision zoom or pan)
    pub fn wheel(&mut self, wheel: WheelInput, now_ms: f64) -> InputResult {
        self.viewport.handle_wheel(wheel, now_ms);
        InputResult::Handled
    }

    /// Handle a key press while mounted
    pub fn key_down(&mut self, key: Key, now_ms: f64) -> InputResult {
        if !self.is_mounted() {
            return InputResult::Unhandled;
        }
        trace!(?key, "key down");
        match key {
            Key::ArrowLeft => self.focus_prev(now_ms).is_some().into(),
            Key::ArrowRight => self.focus_next(now_ms).is_some().into(),
            Key::Other => InputResult::Unhandled,
        }
    }

    // =========================================================================
    // Direct card manipulation (hosts doing their own hit testing)
    // =========================================================================

    /// Start dragging a card grabbed at viewport position `(x, y)`
    pub fn start_drag(&mut self, id: &str, x: f64, y: f64, now_ms: f64) -> InputResult {
        let projection = self.viewport.projection();
        self.manipulator
            .start_drag(&mut self.items, id, Vec2::new(x, y), &projection, now_ms)
    }

    /// End the current drag
    pub fn end_drag(&mut self) -> InputResult {
        self.manipulator.end_drag(&mut self.items)
    }

    /// Toggle resize mode on a card, armed at viewport position `(x, y)`
    pub fn toggle_resize(&mut self, id: &str, x: f64, y: f64) -> InputResult {
        let projection = self.viewport.projection();
        self.manipulator
            .toggle_resize(&mut self.items, id, Vec2::new(x, y), &projection)
    }

    /// Flip a card between its normal and expanded footprint
    pub fn toggle_expand(&mut self, id: &str) -> InputResult {
        self.manipulator.toggle_expand(&mut self.items, id)
    }

    // =========================================================================
    // Camera controls
    // =========================================================================

    /// Zoom in one step toward the viewport center
    pub fn zoom_in(&mut self, animate: bool, now_ms: f64) {
        self.viewport.zoom_in(animate, now_ms);
    }

    /// Zoom out one step toward the viewport center
    pub fn zoom_out(&mut self, animate: bool, now_ms: f64) {
        self.viewport.zoom_out(animate, now_ms);
    }

    /// Reset to the centered initial view
    pub fn center_view(&mut self, animate: bool, now_ms: f64) {
        self.viewport.center_view(animate, now_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CanvasConfig;
    use crate::input::{GlobalListener, ManipulationState};
    use crate::item::{AlbumData, ContentItem, ItemPayload};
    use crate::math::Transform;

    /// One card at the origin, viewport 1000x1000 at scale 1
    fn engine() -> CanvasEngine {
        let mut engine = CanvasEngine::new(CanvasConfig {
            scale_initial: 1.0,
            ..Default::default()
        })
        .unwrap();
        engine.init(1000.0, 1000.0, 0.0);
        engine.load_items(&[ContentItem::new(ItemPayload::Album(AlbumData {
            slug: "a".to_string(),
            title: "A".to_string(),
            ..Default::default()
        }))]);
        engine
    }

    #[test]
    fn test_press_on_card_drags_not_pans() {
        let mut engine = engine();
        // Card is 280x320 centered at the viewport center
        engine.pointer_down(&PointerEvent::mouse(500.0, 500.0), 0.0);
        assert_eq!(engine.manipulator.state_of("album-a"), ManipulationState::Dragging);
        assert!(!engine.gesture.is_panning());

        engine.pointer_move(&PointerEvent::mouse(530.0, 520.0), 10.0);
        let pos = engine.items.get("album-a").unwrap().position;
        assert!((pos.x - 30.0).abs() < 1e-9);
        assert!((pos.y - 20.0).abs() < 1e-9);
        assert_eq!(engine.viewport.transform(), Transform::at_scale(1.0));

        assert!(engine.pointer_up().is_handled());
        assert!(!engine.listeners().contains(GlobalListener::DragMove));
    }

    #[test]
    fn test_press_on_empty_canvas_pans() {
        let mut engine = engine();
        engine.pointer_down(&PointerEvent::mouse(10.0, 10.0), 0.0);
        assert!(engine.gesture.is_panning());
        engine.pointer_move(&PointerEvent::mouse(60.0, 30.0), 0.0);
        assert!((engine.viewport.transform().x - 50.0).abs() < 1e-9);
        assert!((engine.viewport.transform().y - 20.0).abs() < 1e-9);
        engine.pointer_up();
        assert!(!engine.gesture.is_panning());
    }

    #[test]
    fn test_empty_canvas_pan_is_in_canvas_units() {
        let mut engine = engine();
        engine.viewport.set_transform(Transform::at_scale(2.0), false, 0.0);
        engine.pointer_down(&PointerEvent::mouse(10.0, 10.0), 0.0);
        engine.pointer_move(&PointerEvent::mouse(110.0, 10.0), 0.0);
        assert!((engine.viewport.transform().x - 50.0).abs() < 1e-9);
        assert!(engine.viewport.transform().y.abs() < 1e-9);
        engine.pointer_up();
    }

    #[test]
    fn test_corner_controls_route() {
        let mut engine = engine();
        // Bottom-right corner of the card: (640, 660) in viewport pixels
        engine.pointer_down(&PointerEvent::mouse(635.0, 655.0), 0.0);
        assert_eq!(engine.manipulator.state_of("album-a"), ManipulationState::Resizing);
        engine.pointer_up();
        assert_eq!(engine.manipulator.state_of("album-a"), ManipulationState::Resizing);
        engine.pointer_down(&PointerEvent::mouse(635.0, 655.0), 0.0);
        assert_eq!(engine.manipulator.state_of("album-a"), ManipulationState::Idle);

        // Top-right corner: (640, 340)
        engine.pointer_down(&PointerEvent::mouse(635.0, 345.0), 0.0);
        assert!(engine.items.get("album-a").unwrap().position.expanded);
    }

    #[test]
    fn test_secondary_button_ignored() {
        let mut engine = engine();
        let event = PointerEvent::Mouse { x: 500.0, y: 500.0, button: 2 };
        assert_eq!(engine.pointer_down(&event, 0.0), InputResult::Unhandled);
    }

    #[test]
    fn test_pointer_leave_cancels_long_press() {
        let mut engine = engine();
        engine.pointer_down(&PointerEvent::mouse(500.0, 500.0), 0.0);
        engine.pointer_leave();
        assert!(engine.tick(5000.0).is_none());
    }

    #[test]
    fn test_long_press_through_tick() {
        let mut engine = engine();
        engine.pointer_down(&PointerEvent::touch(500.0, 500.0), 0.0);
        assert!(engine.tick(999.0).is_none());
        let intent = engine.tick(1000.0).unwrap();
        assert_eq!(intent.slug, "a");
    }

    #[test]
    fn test_keys_only_while_mounted() {
        let mut engine = engine();
        assert!(engine.key_down(Key::ArrowRight, 0.0).is_handled());
        assert_eq!(engine.key_down(Key::Other, 0.0), InputResult::Unhandled);
        engine.teardown();
        assert_eq!(engine.key_down(Key::ArrowRight, 0.0), InputResult::Unhandled);
    }
}
