//! Card data model

use serde::{Deserialize, Serialize};
use crate::math::{Rect, Size, Vec2};
use super::ItemId;

/// Closed set of card kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Album,
    #[serde(rename = "snip", alias = "snippet")]
    Snippet,
    Playlist,
}

impl ItemKind {
    /// All kinds in filter-cycle order
    pub fn all() -> &'static [ItemKind] {
        &[ItemKind::Album, ItemKind::Snippet, ItemKind::Playlist]
    }

    /// Prefix used for generated item ids and route segments
    pub fn id(&self) -> &'static str {
        match self {
            ItemKind::Album => "album",
            ItemKind::Snippet => "snip",
            ItemKind::Playlist => "playlist",
        }
    }
}

/// Album card payload
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AlbumData {
    pub slug: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
}

/// Text snippet payload
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SnippetData {
    pub slug: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Playlist payload
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaylistData {
    pub slug: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Kind-tagged card payload
///
/// The canvas engine only reads the kind and the slug; everything else is
/// carried through for the rendering layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ItemPayload {
    Album(AlbumData),
    #[serde(rename = "snip", alias = "snippet")]
    Snippet(SnippetData),
    Playlist(PlaylistData),
}

impl ItemPayload {
    /// Kind tag of this payload
    pub fn kind(&self) -> ItemKind {
        match self {
            ItemPayload::Album(_) => ItemKind::Album,
            ItemPayload::Snippet(_) => ItemKind::Snippet,
            ItemPayload::Playlist(_) => ItemKind::Playlist,
        }
    }

    /// Route slug of the underlying content
    pub fn slug(&self) -> &str {
        match self {
            ItemPayload::Album(data) => &data.slug,
            ItemPayload::Snippet(data) => &data.slug,
            ItemPayload::Playlist(data) => &data.slug,
        }
    }

    /// Display title
    pub fn title(&self) -> &str {
        match self {
            ItemPayload::Album(data) => &data.title,
            ItemPayload::Snippet(data) => &data.title,
            ItemPayload::Playlist(data) => &data.title,
        }
    }
}

/// Placement of a card on the canvas
///
/// `x`/`y` is the card's center in canvas units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: i64,
    pub width: f64,
    pub height: f64,
    pub rotation_degrees: f64,
    pub expanded: bool,
}

impl Position {
    /// Center point
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Footprint
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Unrotated bounding rectangle in canvas units
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.center(), self.size())
    }
}

/// One card on the canvas
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub content: ItemPayload,
    pub position: Position,
}

impl Item {
    /// Create an item
    pub fn new(id: impl Into<ItemId>, content: ItemPayload, position: Position) -> Self {
        Self {
            id: id.into(),
            content,
            position,
        }
    }

    /// Kind of this card
    #[inline]
    pub fn kind(&self) -> ItemKind {
        self.content.kind()
    }
}

/// Card description handed in by the content loader, before layout
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Stable id; defaults to `"{kind}-{slug}"`
    #[serde(default)]
    pub id: Option<ItemId>,
    pub content: ItemPayload,
    /// Explicit footprint; defaults to the sticky-note size
    #[serde(default)]
    pub size: Option<Size>,
}

impl ContentItem {
    /// Content item with a generated id and default size
    pub fn new(content: ItemPayload) -> Self {
        Self {
            id: None,
            content,
            size: None,
        }
    }

    /// Override the footprint
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// Effective id
    pub fn resolved_id(&self) -> ItemId {
        match &self.id {
            Some(id) => id.clone(),
            None => format!("{}-{}", self.content.kind().id(), self.content.slug()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn album(slug: &str) -> ItemPayload {
        ItemPayload::Album(AlbumData {
            slug: slug.to_string(),
            title: "Summer".to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_payload_kind_and_slug() {
        let payload = album("summer-2024");
        assert_eq!(payload.kind(), ItemKind::Album);
        assert_eq!(payload.slug(), "summer-2024");
        assert_eq!(payload.title(), "Summer");
    }

    #[test]
    fn test_content_item_default_id() {
        assert_eq!(ContentItem::new(album("summer")).resolved_id(), "album-summer");

        let snippet = ContentItem::new(ItemPayload::Snippet(SnippetData {
            slug: "note".to_string(),
            title: "Note".to_string(),
            body: None,
        }));
        assert_eq!(snippet.resolved_id(), "snip-note");
    }

    #[test]
    fn test_content_item_json() {
        let json = r#"{
            "content": {"kind": "snip", "slug": "hello", "title": "Hello", "body": "text"},
            "size": {"width": 200, "height": 150}
        }"#;
        let item: ContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.content.kind(), ItemKind::Snippet);
        assert_eq!(item.resolved_id(), "snip-hello");
        assert_eq!(item.size, Some(Size::new(200.0, 150.0)));
    }

    #[test]
    fn test_position_rect_is_center_anchored() {
        let position = Position {
            x: 0.0,
            y: 0.0,
            width: 280.0,
            height: 320.0,
            ..Default::default()
        };
        let rect = position.rect();
        assert!((rect.x + 140.0).abs() < 1e-9);
        assert!((rect.y + 160.0).abs() < 1e-9);
    }
}
