//! Item board: the live card list, z-order and hit testing

use tracing::warn;
use crate::layout::raise_to_front;
use crate::math::{Size, Vec2};
use super::{Item, ItemFilter, ItemId, ItemRegion, HANDLE_SIZE};

/// Live card list in load order
///
/// Load order is the navigation order; paint and hit-test order follow `z`.
#[derive(Clone, Debug, Default)]
pub struct ItemBoard {
    items: Vec<Item>,
}

impl ItemBoard {
    /// Create a board from laid-out items
    pub fn new(items: Vec<Item>) -> Self {
        for (i, item) in items.iter().enumerate() {
            if items[..i].iter().any(|other| other.id == item.id) {
                warn!(id = %item.id, "duplicate item id; lookups resolve to the first card");
            }
        }
        Self { items }
    }

    /// All items in load order
    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the board is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get an item by id
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Get a mutable item by id
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Items passing the filter, in load order
    pub fn visible(&self, filter: ItemFilter) -> Vec<&Item> {
        self.items.iter().filter(|item| filter.matches(item)).collect()
    }

    /// Move an item's center
    pub fn set_center(&mut self, id: &str, center: Vec2) -> bool {
        match self.get_mut(id) {
            Some(item) => {
                item.position.x = center.x;
                item.position.y = center.y;
                true
            }
            None => false,
        }
    }

    /// Replace an item's footprint
    pub fn set_size(&mut self, id: &str, size: Size) -> bool {
        match self.get_mut(id) {
            Some(item) => {
                item.position.width = size.width;
                item.position.height = size.height;
                true
            }
            None => false,
        }
    }

    /// Raise an item above every other card
    #[inline]
    pub fn raise(&mut self, id: &str) -> bool {
        raise_to_front(&mut self.items, id)
    }

    /// Flip the expanded flag and apply the matching footprint
    ///
    /// Returns the new flag, or `None` if the id is unknown.
    pub fn toggle_expanded(&mut self, id: &str, normal: Size, factor: f64) -> Option<bool> {
        let item = self.get_mut(id)?;
        let expanded = !item.position.expanded;
        let size = if expanded { normal.scale(factor) } else { normal };
        item.position.expanded = expanded;
        item.position.width = size.width;
        item.position.height = size.height;
        Some(expanded)
    }

    /// Items sorted by z (back to front); ties keep load order
    pub fn by_z(&self) -> Vec<&Item> {
        let mut items: Vec<&Item> = self.items.iter().collect();
        items.sort_by_key(|item| item.position.z);
        items
    }

    /// Find which region of which visible card is at a canvas position (topmost)
    pub fn region_at(&self, pos: Vec2, filter: ItemFilter) -> Option<(ItemId, ItemRegion)> {
        self.by_z()
            .into_iter()
            .rev()
            .filter(|item| filter.matches(item))
            .find_map(|item| hit_test_item(item, pos).map(|region| (item.id.clone(), region)))
    }
}

// =============================================================================
// Hit testing helper functions
// =============================================================================

/// Hit test a single card, ignoring rotation
fn hit_test_item(item: &Item, pos: Vec2) -> Option<ItemRegion> {
    let rect = item.position.rect();
    if !rect.contains(pos) {
        return None;
    }

    if rect.top_right_square(HANDLE_SIZE).contains(pos) {
        return Some(ItemRegion::ExpandButton);
    }
    if rect.bottom_right_square(HANDLE_SIZE).contains(pos) {
        return Some(ItemRegion::ResizeHandle);
    }
    Some(ItemRegion::Body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{AlbumData, ItemPayload, PlaylistData, Position};

    fn card(id: &str, x: f64, y: f64, z: i64) -> Item {
        Item::new(
            id,
            ItemPayload::Album(AlbumData {
                slug: id.to_string(),
                title: id.to_string(),
                ..Default::default()
            }),
            Position {
                x,
                y,
                z,
                width: 200.0,
                height: 200.0,
                ..Default::default()
            },
        )
    }

    fn playlist(id: &str, x: f64, y: f64, z: i64) -> Item {
        let mut item = card(id, x, y, z);
        item.content = ItemPayload::Playlist(PlaylistData {
            slug: id.to_string(),
            title: id.to_string(),
            url: None,
        });
        item
    }

    #[test]
    fn test_region_at_prefers_topmost() {
        let board = ItemBoard::new(vec![card("a", 0.0, 0.0, 0), card("b", 50.0, 50.0, 1)]);
        let (id, region) = board.region_at(Vec2::new(20.0, 20.0), ItemFilter::All).unwrap();
        assert_eq!(id, "b");
        assert_eq!(region, ItemRegion::Body);

        let (id, _) = board.region_at(Vec2::new(-80.0, -80.0), ItemFilter::All).unwrap();
        assert_eq!(id, "a");
        assert!(board.region_at(Vec2::new(500.0, 500.0), ItemFilter::All).is_none());
    }

    #[test]
    fn test_region_at_respects_filter() {
        let board = ItemBoard::new(vec![card("a", 0.0, 0.0, 0), playlist("p", 0.0, 0.0, 1)]);
        let (id, _) = board.region_at(Vec2::ZERO, ItemFilter::Album).unwrap();
        assert_eq!(id, "a");
        assert!(board.region_at(Vec2::ZERO, ItemFilter::Snippet).is_none());
    }

    #[test]
    fn test_corner_controls() {
        let board = ItemBoard::new(vec![card("a", 0.0, 0.0, 0)]);
        // Card spans [-100, 100) on both axes
        let (_, region) = board.region_at(Vec2::new(90.0, 90.0), ItemFilter::All).unwrap();
        assert_eq!(region, ItemRegion::ResizeHandle);
        let (_, region) = board.region_at(Vec2::new(90.0, -90.0), ItemFilter::All).unwrap();
        assert_eq!(region, ItemRegion::ExpandButton);
        let (_, region) = board.region_at(Vec2::new(-90.0, 90.0), ItemFilter::All).unwrap();
        assert_eq!(region, ItemRegion::Body);
    }

    #[test]
    fn test_raise_reorders_by_z() {
        let mut board = ItemBoard::new(vec![
            card("a", 0.0, 0.0, 0),
            card("b", 0.0, 0.0, 1),
            card("c", 0.0, 0.0, 2),
        ]);
        assert!(board.raise("a"));
        let order: Vec<&str> = board.by_z().iter().map(|item| item.id.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
        assert!(!board.raise("missing"));
    }

    #[test]
    fn test_toggle_expanded() {
        let mut board = ItemBoard::new(vec![card("a", 0.0, 0.0, 0)]);
        let normal = Size::new(280.0, 320.0);

        assert_eq!(board.toggle_expanded("a", normal, 1.5), Some(true));
        let position = board.get("a").unwrap().position;
        assert!((position.width - 420.0).abs() < 1e-9);
        assert!((position.height - 480.0).abs() < 1e-9);

        assert_eq!(board.toggle_expanded("a", normal, 1.5), Some(false));
        let position = board.get("a").unwrap().position;
        assert!((position.width - 280.0).abs() < 1e-9);
        assert!(!position.expanded);

        assert_eq!(board.toggle_expanded("missing", normal, 1.5), None);
    }

    #[test]
    fn test_set_center_and_size() {
        let mut board = ItemBoard::new(vec![card("a", 0.0, 0.0, 0)]);
        assert!(board.set_center("a", Vec2::new(12.0, -8.0)));
        assert!(board.set_size("a", Size::new(90.0, 60.0)));
        let position = board.get("a").unwrap().position;
        assert!((position.x - 12.0).abs() < 1e-9);
        assert!((position.height - 60.0).abs() < 1e-9);
        assert!(!board.set_center("missing", Vec2::ZERO));
    }
}
