//! Kind filter applied to navigation and hit testing

use serde::{Deserialize, Serialize};
use super::{Item, ItemKind};

/// Which cards are currently shown
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemFilter {
    #[default]
    All,
    Album,
    #[serde(rename = "snip", alias = "snippet")]
    Snippet,
    Playlist,
}

impl ItemFilter {
    /// Next filter in the toolbar cycle `all -> album -> snip -> playlist -> all`
    pub fn next(self) -> Self {
        match self {
            ItemFilter::All => ItemFilter::Album,
            ItemFilter::Album => ItemFilter::Snippet,
            ItemFilter::Snippet => ItemFilter::Playlist,
            ItemFilter::Playlist => ItemFilter::All,
        }
    }

    /// Check whether a card kind passes the filter
    pub fn accepts(self, kind: ItemKind) -> bool {
        match self {
            ItemFilter::All => true,
            ItemFilter::Album => kind == ItemKind::Album,
            ItemFilter::Snippet => kind == ItemKind::Snippet,
            ItemFilter::Playlist => kind == ItemKind::Playlist,
        }
    }

    /// Check whether a card passes the filter
    #[inline]
    pub fn matches(self, item: &Item) -> bool {
        self.accepts(item.kind())
    }
}
