//! Input handling
//!
//! Pointer, wheel and keyboard input types, the pan gesture, and the card
//! manipulation state machine.

mod result;
mod pointer;
mod listeners;
mod gesture;
mod session;
mod manipulation;

pub use result::InputResult;
pub use pointer::{Key, PointerEvent};
pub use listeners::{GlobalListener, ListenerSet};
pub use gesture::GestureUnifier;
pub use session::{DragSession, ResizeSession};
pub use manipulation::{ItemManipulator, ManipulationState};
pub use crate::viewport::WheelInput;
