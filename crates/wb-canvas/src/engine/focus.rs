//! Card focus navigation over the filtered ordering

use crate::item::Item;
use super::CanvasEngine;

impl CanvasEngine {
    /// Reading zoom for the current viewport width
    pub fn focus_zoom(&self) -> f64 {
        self.config.focus_zoom_for(self.viewport.viewport().width)
    }

    /// Index of the focused card within the visible ordering
    #[inline]
    pub fn focused_index(&self) -> usize {
        self.focus.index()
    }

    /// Focused card, if any card is visible
    pub fn focused_item(&self) -> Option<&Item> {
        self.visible_items().get(self.focus.index()).copied()
    }

    /// Center the camera on the visible card at `index` (wrapped)
    pub fn focus_on_card(&mut self, index: i64, now_ms: f64) -> Option<usize> {
        let zoom = self.focus_zoom();
        let items = self.items.visible(self.filter);
        self.focus
            .focus_on_card(&items, index, zoom, &mut self.viewport, now_ms)
    }

    /// Focus the next visible card
    pub fn focus_next(&mut self, now_ms: f64) -> Option<usize> {
        let zoom = self.focus_zoom();
        let items = self.items.visible(self.filter);
        self.focus.next(&items, zoom, &mut self.viewport, now_ms)
    }

    /// Focus the previous visible card
    pub fn focus_prev(&mut self, now_ms: f64) -> Option<usize> {
        let zoom = self.focus_zoom();
        let items = self.items.visible(self.filter);
        self.focus.prev(&items, zoom, &mut self.viewport, now_ms)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::CanvasConfig;
    use crate::engine::CanvasEngine;
    use crate::item::{AlbumData, ContentItem, ItemFilter, ItemPayload, PlaylistData};

    fn mounted(width: f64) -> CanvasEngine {
        let mut engine = CanvasEngine::new(CanvasConfig::default()).unwrap();
        engine.init(width, 800.0, 0.0);
        let album = |slug: &str| {
            ContentItem::new(ItemPayload::Album(AlbumData {
                slug: slug.to_string(),
                title: slug.to_string(),
                ..Default::default()
            }))
        };
        let playlist = ContentItem::new(ItemPayload::Playlist(PlaylistData {
            slug: "mix".to_string(),
            title: "Mix".to_string(),
            url: None,
        }));
        engine.load_items(&[album("one"), playlist, album("two"), album("three")]);
        engine
    }

    #[test]
    fn test_focus_uses_compact_zoom_on_narrow_viewports() {
        let mut engine = mounted(600.0);
        engine.focus_on_card(0, 0.0);
        assert!((engine.viewport.scale() - 1.2).abs() < 1e-12);

        let mut engine = mounted(1600.0);
        engine.focus_on_card(0, 0.0);
        assert!((engine.viewport.scale() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_focus_follows_filtered_order() {
        let mut engine = mounted(1600.0);
        engine.set_filter(ItemFilter::Album);
        assert_eq!(engine.focus_next(0.0), Some(1));
        assert_eq!(engine.focused_item().unwrap().id, "album-two");

        let center = engine.focused_item().unwrap().position.center();
        let t = engine.viewport.transform();
        assert_eq!(t.x, -center.x * 1.5);
        assert_eq!(t.y, -center.y * 1.5);
    }

    #[test]
    fn test_focus_with_no_visible_cards() {
        let mut engine = mounted(1600.0);
        engine.set_filter(ItemFilter::Snippet);
        let before = engine.viewport.transform();
        assert_eq!(engine.focus_next(0.0), None);
        assert_eq!(engine.focus_on_card(3, 0.0), None);
        assert!(engine.focused_item().is_none());
        assert_eq!(engine.viewport.transform(), before);
    }
}
