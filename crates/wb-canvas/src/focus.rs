//! Card focus navigation
//!
//! Moves the camera to one card at the reading zoom and steps through cards
//! cyclically. Item positions share the center-anchored origin of the camera
//! transform, and the focus transform is the negated center scaled by the
//! zoom.

use tracing::debug;
use crate::item::Item;
use crate::math::Transform;
use crate::viewport::ViewportController;

/// Wrap `index` into `[0, count)` (true modulo, negative input allowed)
///
/// `None` when there is nothing to focus.
pub fn normalize_index(index: i64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let n = count as i64;
    Some((((index % n) + n) % n) as usize)
}

/// Focus transform for `item` at `zoom`: `(-x * zoom, -y * zoom, zoom)`
///
/// The pan offset is in canvas units, so the card lands exactly on the
/// viewport center only at zoom 1.
#[inline]
pub fn focus_transform(item: &Item, zoom: f64) -> Transform {
    Transform::new(-item.position.x * zoom, -item.position.y * zoom, zoom)
}

/// Cyclic focus cursor over the current (possibly filtered) ordering
#[derive(Clone, Debug, Default)]
pub struct FocusNavigator {
    index: usize,
}

impl FocusNavigator {
    /// Create a navigator at index 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently focused index
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Go back to the first card without moving the camera
    #[inline]
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Center the camera on the card at `index` (wrapped) with an animation
    ///
    /// Returns the normalized index, or `None` (and does nothing) when
    /// `items` is empty.
    pub fn focus_on_card(
        &mut self,
        items: &[&Item],
        index: i64,
        zoom: f64,
        viewport: &mut ViewportController,
        now_ms: f64,
    ) -> Option<usize> {
        let i = normalize_index(index, items.len())?;
        let item = items[i];
        viewport.set_transform(focus_transform(item, zoom), true, now_ms);
        self.index = i;
        debug!(index = i, id = %item.id, zoom, "focus card");
        Some(i)
    }

    /// Focus the next card
    pub fn next(
        &mut self,
        items: &[&Item],
        zoom: f64,
        viewport: &mut ViewportController,
        now_ms: f64,
    ) -> Option<usize> {
        let target = self.index as i64 + 1;
        self.focus_on_card(items, target, zoom, viewport, now_ms)
    }

    /// Focus the previous card
    pub fn prev(
        &mut self,
        items: &[&Item],
        zoom: f64,
        viewport: &mut ViewportController,
        now_ms: f64,
    ) -> Option<usize> {
        let target = self.index as i64 - 1;
        self.focus_on_card(items, target, zoom, viewport, now_ms)
    }
}
