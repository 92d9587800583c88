//! Card region for hit testing

use serde::Serialize;

/// Side length of the corner controls in canvas units
pub const HANDLE_SIZE: f64 = 24.0;

/// Region of a card for hit testing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemRegion {
    /// Anywhere else on the card (drag, long press)
    Body,
    /// Bottom-right corner toggle that arms resizing
    ResizeHandle,
    /// Top-right corner toggle that flips the expanded footprint
    ExpandButton,
}

impl ItemRegion {
    /// Whether this region is a click-style control rather than a drag surface
    #[inline]
    pub fn is_control(&self) -> bool {
        !matches!(self, ItemRegion::Body)
    }
}
