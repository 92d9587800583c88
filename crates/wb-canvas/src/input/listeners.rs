//! Window-level listener bookkeeping
//!
//! The engine does not own the DOM. It records which window listeners a
//! live session needs so the host can attach and detach the real ones.

use std::collections::BTreeSet;
use serde::Serialize;

/// Window-level listener kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GlobalListener {
    /// Pointer move while a card is dragged
    DragMove,
    /// Pointer up that ends a drag
    DragUp,
    /// Pointer move while a resize is armed
    ResizeMove,
    /// Arrow-key navigation while the canvas is mounted
    KeyDown,
}

/// Set of currently registered listeners
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ListenerSet {
    active: BTreeSet<GlobalListener>,
}

impl ListenerSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; returns `false` if it was already registered
    #[inline]
    pub fn register(&mut self, listener: GlobalListener) -> bool {
        self.active.insert(listener)
    }

    /// Unregister a listener; returns `false` if it was not registered
    #[inline]
    pub fn unregister(&mut self, listener: GlobalListener) -> bool {
        self.active.remove(&listener)
    }

    /// Check whether a listener is registered
    #[inline]
    pub fn contains(&self, listener: GlobalListener) -> bool {
        self.active.contains(&listener)
    }

    /// Check if nothing is registered
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Registered listeners in a stable order
    pub fn iter(&self) -> impl Iterator<Item = GlobalListener> + '_ {
        self.active.iter().copied()
    }

    /// Merge another set into this one
    pub fn extend(&mut self, other: &ListenerSet) {
        self.active.extend(other.iter());
    }

    /// Drop every registration
    pub fn clear(&mut self) {
        self.active.clear();
    }
}
