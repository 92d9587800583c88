//! Cards on the canvas
//!
//! Data model, kind filter, hit-test regions and the board that owns the
//! live item list.

mod model;
mod region;
mod filter;
mod board;

pub use model::{
    AlbumData, ContentItem, Item, ItemKind, ItemPayload, PlaylistData, Position, SnippetData,
};
pub use region::{ItemRegion, HANDLE_SIZE};
pub use filter::ItemFilter;
pub use board::ItemBoard;

use serde::{Deserialize, Serialize};

/// Unique, stable card identifier
pub type ItemId = String;

/// Request to open the page behind a card, emitted on long press
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationIntent {
    pub kind: ItemKind,
    pub slug: String,
}

impl NavigationIntent {
    /// Intent for the given card
    pub fn for_item(item: &Item) -> Self {
        Self {
            kind: item.kind(),
            slug: item.content.slug().to_string(),
        }
    }
}
