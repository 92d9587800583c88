//! Per-item manipulation state machine
//!
//! Per card: Idle -> Dragging -> Idle (pointer up), Idle -> Resizing -> Idle
//! (toggle on the resize handle), and a press held on a card past the
//! long-press deadline emits a navigation intent.
//!
//! Pointer positions arrive in viewport pixels together with the projection
//! of the frame they were observed in; everything stored is canvas units.

use serde::Serialize;
use tracing::{debug, warn};
use crate::config::{CanvasConfig, ManipulationPolicy};
use crate::item::{ItemBoard, ItemId, NavigationIntent};
use crate::math::{Projection, Size, Vec2};
use super::{DragSession, GlobalListener, InputResult, ListenerSet, ResizeSession};

/// Observable manipulation state of one card
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ManipulationState {
    Idle,
    Dragging,
    Resizing,
    LongPressed,
}

/// Drag, resize, expand and long-press handling for cards
#[derive(Clone, Debug)]
pub struct ItemManipulator {
    policy: ManipulationPolicy,
    long_press_ms: f64,
    min_item_size: f64,
    normal_size: Size,
    expand_factor: f64,
    drag: Option<DragSession>,
    resize: Option<ResizeSession>,
    long_pressed: Option<ItemId>,
    listeners: ListenerSet,
}

impl Default for ItemManipulator {
    fn default() -> Self {
        Self::new(&CanvasConfig::default())
    }
}

impl ItemManipulator {
    /// Create an idle manipulator
    pub fn new(config: &CanvasConfig) -> Self {
        Self {
            policy: config.manipulation_policy,
            long_press_ms: config.long_press_ms,
            min_item_size: config.min_item_size,
            normal_size: config.sticky_size(),
            expand_factor: config.expand_factor,
            drag: None,
            resize: None,
            long_pressed: None,
            listeners: ListenerSet::new(),
        }
    }

    /// Active drag session
    #[inline]
    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Armed resize session
    #[inline]
    pub fn resize(&self) -> Option<&ResizeSession> {
        self.resize.as_ref()
    }

    /// Id of the card being dragged
    pub fn dragging_id(&self) -> Option<&str> {
        self.drag.as_ref().map(|session| session.item_id.as_str())
    }

    /// Id of the card with an armed resize
    pub fn resizing_id(&self) -> Option<&str> {
        self.resize.as_ref().map(|session| session.item_id.as_str())
    }

    /// Window listeners the current sessions need
    #[inline]
    pub fn listeners(&self) -> &ListenerSet {
        &self.listeners
    }

    /// State of one card
    pub fn state_of(&self, id: &str) -> ManipulationState {
        if self.long_pressed.as_deref() == Some(id) {
            ManipulationState::LongPressed
        } else if self.dragging_id() == Some(id) {
            ManipulationState::Dragging
        } else if self.resizing_id() == Some(id) {
            ManipulationState::Resizing
        } else {
            ManipulationState::Idle
        }
    }

    // =========================================================================
    // Drag
    // =========================================================================

    /// Start dragging a card grabbed at `pointer`
    ///
    /// Raises the card and arms the long-press timer.
    pub fn start_drag(
        &mut self,
        board: &mut ItemBoard,
        id: &str,
        pointer: Vec2,
        projection: &Projection,
        now_ms: f64,
    ) -> InputResult {
        let Some(center) = board.get(id).map(|item| item.position.center()) else {
            warn!(id, "drag start on unknown item");
            return InputResult::Unhandled;
        };

        let resize_elsewhere = self.resizing_id().is_some_and(|armed| armed != id);
        if self.resizing_id() == Some(id)
            || (resize_elsewhere && self.policy == ManipulationPolicy::Exclusive)
        {
            self.disarm_resize();
        }
        if self.drag.is_some() {
            self.end_drag(board);
        }

        let grab = projection.to_canvas(pointer);
        self.drag = Some(DragSession::new(
            id.to_string(),
            grab,
            center,
            Some(now_ms + self.long_press_ms),
        ));
        self.long_pressed = None;
        board.raise(id);
        self.listeners.register(GlobalListener::DragMove);
        self.listeners.register(GlobalListener::DragUp);
        debug!(id, x = grab.x, y = grab.y, "drag start");
        InputResult::Handled
    }

    /// Move the dragged card so the grab point follows the pointer
    pub fn drag_move(&mut self, board: &mut ItemBoard, pointer: Vec2, projection: &Projection) -> InputResult {
        let Some(session) = &self.drag else {
            return InputResult::Unhandled;
        };
        let center = session.center_for(projection.to_canvas(pointer));
        board.set_center(&session.item_id, center).into()
    }

    /// End the drag, cancel the long-press timer and raise the card
    pub fn end_drag(&mut self, board: &mut ItemBoard) -> InputResult {
        let Some(session) = self.drag.take() else {
            return InputResult::Unhandled;
        };
        self.listeners.unregister(GlobalListener::DragMove);
        self.listeners.unregister(GlobalListener::DragUp);
        self.long_pressed = None;
        board.raise(&session.item_id);
        debug!(id = %session.item_id, "drag end");
        InputResult::Handled
    }

    /// Pointer left the card: the press can no longer become a long press
    pub fn cancel_long_press(&mut self) {
        if let Some(session) = &mut self.drag {
            if session.long_press_at.take().is_some() {
                debug!(id = %session.item_id, "long press cancelled");
            }
        }
    }

    /// Fire the long press if its deadline has passed
    ///
    /// Fires at most once per press. The drag itself stays live.
    pub fn poll_long_press(&mut self, board: &ItemBoard, now_ms: f64) -> Option<NavigationIntent> {
        let session = self.drag.as_mut()?;
        if !session.long_press_due(now_ms) {
            return None;
        }
        session.long_press_at = None;

        let Some(item) = board.get(&session.item_id) else {
            warn!(id = %session.item_id, "long press on item that no longer exists");
            return None;
        };
        let intent = NavigationIntent::for_item(item);
        debug!(id = %item.id, slug = %intent.slug, "long press");
        self.long_pressed = Some(item.id.clone());
        Some(intent)
    }

    // =========================================================================
    // Resize
    // =========================================================================

    /// Toggle resize mode on a card
    ///
    /// A second toggle on the armed card disarms it. Arming a different card
    /// disarms the previous one first.
    pub fn toggle_resize(
        &mut self,
        board: &mut ItemBoard,
        id: &str,
        pointer: Vec2,
        projection: &Projection,
    ) -> InputResult {
        if self.resizing_id() == Some(id) {
            self.disarm_resize();
            return InputResult::Handled;
        }

        let Some(size) = board.get(id).map(|item| item.position.size()) else {
            warn!(id, "resize toggle on unknown item");
            return InputResult::Unhandled;
        };

        self.disarm_resize();
        let drag_elsewhere = self.dragging_id().is_some_and(|dragged| dragged != id);
        if self.dragging_id() == Some(id)
            || (drag_elsewhere && self.policy == ManipulationPolicy::Exclusive)
        {
            self.end_drag(board);
        }

        let origin = projection.to_canvas(pointer);
        self.resize = Some(ResizeSession::new(id.to_string(), origin, size));
        board.raise(id);
        self.listeners.register(GlobalListener::ResizeMove);
        debug!(id, width = size.width, height = size.height, "resize armed");
        InputResult::Handled
    }

    /// Resize the armed card for the current pointer position
    pub fn resize_move(&mut self, board: &mut ItemBoard, pointer: Vec2, projection: &Projection) -> InputResult {
        let Some(session) = &self.resize else {
            return InputResult::Unhandled;
        };
        let size = session.size_for(projection.to_canvas(pointer), self.min_item_size);
        board.set_size(&session.item_id, size).into()
    }

    /// Disarm any armed resize, keeping the card's current size
    pub fn disarm_resize(&mut self) -> bool {
        match self.resize.take() {
            Some(session) => {
                self.listeners.unregister(GlobalListener::ResizeMove);
                debug!(id = %session.item_id, "resize disarmed");
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Expand
    // =========================================================================

    /// Flip a card between the normal and the expanded footprint
    pub fn toggle_expand(&mut self, board: &mut ItemBoard, id: &str) -> InputResult {
        match board.toggle_expanded(id, self.normal_size, self.expand_factor) {
            Some(expanded) => {
                debug!(id, expanded, "expand toggled");
                InputResult::Handled
            }
            None => {
                warn!(id, "expand toggle on unknown item");
                InputResult::Unhandled
            }
        }
    }

    /// Drop every session and listener
    pub fn teardown(&mut self) {
        self.drag = None;
        self.resize = None;
        self.long_pressed = None;
        self.listeners.clear();
    }
}
