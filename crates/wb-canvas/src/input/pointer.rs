//! Raw pointer and keyboard input

use serde::{Deserialize, Serialize};
use crate::math::Vec2;

/// Mouse or touch event in viewport pixels
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PointerEvent {
    Mouse {
        x: f64,
        y: f64,
        /// DOM button index (0 = primary)
        #[serde(default)]
        button: u8,
    },
    Touch {
        /// Active touch points; only the first one is used
        touches: Vec<Vec2>,
    },
}

impl PointerEvent {
    /// Primary-button mouse event
    #[inline]
    pub fn mouse(x: f64, y: f64) -> Self {
        PointerEvent::Mouse { x, y, button: 0 }
    }

    /// Single-touch event
    #[inline]
    pub fn touch(x: f64, y: f64) -> Self {
        PointerEvent::Touch {
            touches: vec![Vec2::new(x, y)],
        }
    }

    /// Position of the pointer that drives gestures
    ///
    /// `None` for a touch event without touch points or a non-finite position.
    pub fn primary_position(&self) -> Option<Vec2> {
        let pos = match self {
            PointerEvent::Mouse { x, y, .. } => Vec2::new(*x, *y),
            PointerEvent::Touch { touches } => *touches.first()?,
        };
        pos.is_finite().then_some(pos)
    }

    /// Whether this event comes from the primary button or a touch
    #[inline]
    pub fn is_primary(&self) -> bool {
        match self {
            PointerEvent::Mouse { button, .. } => *button == 0,
            PointerEvent::Touch { .. } => true,
        }
    }
}

/// Keys the canvas reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            _ => Key::Other,
        }
    }
}
