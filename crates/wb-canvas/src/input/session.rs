//! Ephemeral drag and resize sessions

use crate::item::ItemId;
use crate::math::{Size, Vec2};

/// Card drag in progress
///
/// All positions are canvas units.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    pub item_id: ItemId,
    /// Pointer position when the drag started
    pub pointer_origin: Vec2,
    /// Card center when the drag started
    pub item_origin: Vec2,
    /// Pointer position relative to the card center
    pub offset: Vec2,
    /// When the press turns into a long press; `None` once fired or cancelled
    pub long_press_at: Option<f64>,
}

impl DragSession {
    /// Start a drag grabbing `item_center` at `pointer`
    pub fn new(item_id: ItemId, pointer: Vec2, item_center: Vec2, long_press_at: Option<f64>) -> Self {
        Self {
            item_id,
            pointer_origin: pointer,
            item_origin: item_center,
            offset: pointer - item_center,
            long_press_at,
        }
    }

    /// Card center for the current pointer position
    #[inline]
    pub fn center_for(&self, pointer: Vec2) -> Vec2 {
        pointer - self.offset
    }

    /// Check whether the long-press deadline has passed
    #[inline]
    pub fn long_press_due(&self, now_ms: f64) -> bool {
        self.long_press_at.is_some_and(|at| now_ms >= at)
    }
}

/// Armed resize
#[derive(Clone, Debug, PartialEq)]
pub struct ResizeSession {
    pub item_id: ItemId,
    /// Pointer position when the resize was armed (canvas units)
    pub pointer_origin: Vec2,
    pub initial_size: Size,
}

impl ResizeSession {
    /// Arm a resize
    pub fn new(item_id: ItemId, pointer: Vec2, initial_size: Size) -> Self {
        Self {
            item_id,
            pointer_origin: pointer,
            initial_size,
        }
    }

    /// Footprint for the current pointer position
    ///
    /// The handle sits on a corner while the card is stored by its center,
    /// so the delta counts twice. Neither side drops below `min_size`.
    pub fn size_for(&self, pointer: Vec2, min_size: f64) -> Size {
        let delta = pointer - self.pointer_origin;
        Size::new(
            (self.initial_size.width + delta.x * 2.0).max(min_size),
            (self.initial_size.height + delta.y * 2.0).max(min_size),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_offset() {
        let session = DragSession::new(
            "a".to_string(),
            Vec2::new(110.0, 95.0),
            Vec2::new(100.0, 100.0),
            Some(1000.0),
        );
        assert!((session.offset.x - 10.0).abs() < 0.001);
        assert!((session.offset.y + 5.0).abs() < 0.001);

        let center = session.center_for(Vec2::new(160.0, 145.0));
        assert!((center.x - 150.0).abs() < 0.001);
        assert!((center.y - 150.0).abs() < 0.001);
    }

    #[test]
    fn test_long_press_due() {
        let mut session = DragSession::new("a".to_string(), Vec2::ZERO, Vec2::ZERO, Some(1000.0));
        assert!(!session.long_press_due(999.0));
        assert!(session.long_press_due(1000.0));
        session.long_press_at = None;
        assert!(!session.long_press_due(5000.0));
    }

    #[test]
    fn test_resize_doubles_delta() {
        let session = ResizeSession::new("a".to_string(), Vec2::new(140.0, 160.0), Size::new(280.0, 320.0));
        let size = session.size_for(Vec2::new(150.0, 150.0), 50.0);
        assert!((size.width - 300.0).abs() < 0.001);
        assert!((size.height - 300.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_respects_minimum() {
        let session = ResizeSession::new("a".to_string(), Vec2::ZERO, Size::new(100.0, 100.0));
        let size = session.size_for(Vec2::new(-500.0, -10.0), 50.0);
        assert!((size.width - 50.0).abs() < 0.001);
        assert!((size.height - 80.0).abs() < 0.001);
    }
}
