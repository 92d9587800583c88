//! Canvas engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `input`: Pointer, wheel and keyboard routing
//! - `focus`: Card focus navigation over the filtered ordering
//! - `rendering`: Render-state snapshot with screen coordinates

mod input;
mod focus;
mod rendering;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, warn};
use crate::config::CanvasConfig;
use crate::error::ConfigError;
use crate::focus::FocusNavigator;
use crate::input::{GestureUnifier, GlobalListener, ItemManipulator, ListenerSet};
use crate::item::{ContentItem, Item, ItemBoard, ItemFilter, NavigationIntent};
use crate::layout::{layout, LayoutOptions};
use crate::math::Size;
use crate::viewport::ViewportController;

pub use rendering::{ItemView, RenderState};

/// Layout seed used when neither the config nor the host provides one
pub const DEFAULT_LAYOUT_SEED: u64 = 0x5EED_CA17_A5B0_A4D5;

/// Canvas engine coordinating all canvas components
///
/// Owns the camera (viewport controller), the live card board, the pan
/// gesture, the card manipulation state machine and the focus cursor.
/// Every method that depends on time takes `now_ms`.
pub struct CanvasEngine {
    /// Validated configuration
    pub config: CanvasConfig,
    /// Camera transform owner
    pub viewport: ViewportController,
    /// Live card list
    pub items: ItemBoard,
    /// Card drag / resize / expand / long press
    pub manipulator: ItemManipulator,
    /// Empty-canvas pan gesture
    pub gesture: GestureUnifier,
    /// Focus cursor
    pub focus: FocusNavigator,
    /// Current kind filter
    pub(crate) filter: ItemFilter,
    /// Engine-level window listeners (keyboard)
    pub(crate) listeners: ListenerSet,
    pub(crate) rng: SmallRng,
}

impl Default for CanvasEngine {
    fn default() -> Self {
        Self::build(CanvasConfig::default(), DEFAULT_LAYOUT_SEED)
    }
}

impl CanvasEngine {
    /// Create an engine after validating `config`
    pub fn new(config: CanvasConfig) -> Result<Self, ConfigError> {
        let seed = config.layout_seed.unwrap_or(DEFAULT_LAYOUT_SEED);
        Self::with_seed(config, seed)
    }

    /// Create an engine with an explicit layout seed
    ///
    /// A `LAYOUT_SEED` in the config takes precedence over `seed`.
    pub fn with_seed(config: CanvasConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.layout_seed.unwrap_or(seed);
        Ok(Self::build(config, seed))
    }

    /// Create an engine from a JSON configuration object
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::new(CanvasConfig::from_json(json)?)
    }

    fn build(config: CanvasConfig, seed: u64) -> Self {
        Self {
            viewport: ViewportController::new(&config),
            items: ItemBoard::default(),
            manipulator: ItemManipulator::new(&config),
            gesture: GestureUnifier::new(),
            focus: FocusNavigator::new(),
            filter: ItemFilter::All,
            listeners: ListenerSet::new(),
            rng: SmallRng::seed_from_u64(seed),
            config,
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Mount the canvas: size the viewport, center the view, bind arrow keys
    pub fn init(&mut self, width: f64, height: f64, now_ms: f64) {
        self.viewport.resize(Size::new(width, height), now_ms);
        self.viewport.center_view(false, now_ms);
        self.listeners.register(GlobalListener::KeyDown);
        debug!(width, height, "canvas mounted");
    }

    /// Track a viewport size change
    pub fn resize(&mut self, width: f64, height: f64, now_ms: f64) {
        self.viewport.resize(Size::new(width, height), now_ms);
    }

    /// Unmount: drop every session and listener
    pub fn teardown(&mut self) {
        self.manipulator.teardown();
        self.gesture.end();
        self.listeners.clear();
        debug!("canvas torn down");
    }

    /// Check whether the canvas is mounted
    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.listeners.contains(GlobalListener::KeyDown)
    }

    /// Every window listener the host should currently have attached
    pub fn listeners(&self) -> ListenerSet {
        let mut all = self.listeners.clone();
        all.extend(self.manipulator.listeners());
        all
    }

    /// Advance timers: close a finished animation window and fire a due
    /// long press
    pub fn tick(&mut self, now_ms: f64) -> Option<NavigationIntent> {
        self.viewport.tick(now_ms);
        self.manipulator.poll_long_press(&self.items, now_ms)
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// Replace the card set with a fresh layout of `contents`
    ///
    /// Ends any running drag or resize and resets focus to the first card.
    pub fn load_items(&mut self, contents: &[ContentItem]) -> usize {
        let options = LayoutOptions::from(&self.config);
        let items = layout(contents, &options, &mut self.rng);
        let count = items.len();

        self.manipulator.teardown();
        self.items = ItemBoard::new(items);
        self.focus.reset();
        debug!(count, "content loaded");
        count
    }

    /// Parse a JSON array of content items and load it
    pub fn load_items_json(&mut self, json: &str) -> Result<usize, ConfigError> {
        let contents: Vec<ContentItem> = serde_json::from_str(json)?;
        Ok(self.load_items(&contents))
    }

    /// Cards passing the current filter, in load order
    pub fn visible_items(&self) -> Vec<&Item> {
        self.items.visible(self.filter)
    }

    // =========================================================================
    // Filter
    // =========================================================================

    /// Current kind filter
    #[inline]
    pub fn filter(&self) -> ItemFilter {
        self.filter
    }

    /// Switch the kind filter
    ///
    /// Resets the focus cursor and ends manipulations on cards that are no
    /// longer visible.
    pub fn set_filter(&mut self, filter: ItemFilter) {
        if filter == self.filter {
            return;
        }
        self.filter = filter;
        self.focus.reset();

        let hidden = |id: Option<&str>, items: &ItemBoard| {
            id.and_then(|id| items.get(id)).is_some_and(|item| !filter.matches(item))
        };
        if hidden(self.manipulator.dragging_id(), &self.items) {
            warn!("dragged card hidden by filter; ending drag");
            self.manipulator.end_drag(&mut self.items);
        }
        if hidden(self.manipulator.resizing_id(), &self.items) {
            self.manipulator.disarm_resize();
        }
        debug!(?filter, "filter changed");
    }

    /// Advance to the next filter in the toolbar cycle
    pub fn toggle_filter(&mut self) -> ItemFilter {
        self.set_filter(self.filter.next());
        self.filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{AlbumData, ItemPayload, SnippetData};

    fn contents() -> Vec<ContentItem> {
        vec![
            ContentItem::new(ItemPayload::Album(AlbumData {
                slug: "trip".to_string(),
                title: "Trip".to_string(),
                ..Default::default()
            })),
            ContentItem::new(ItemPayload::Snippet(SnippetData {
                slug: "idea".to_string(),
                title: "Idea".to_string(),
                body: None,
            })),
        ]
    }

    #[test]
    fn test_new_validates_config() {
        let config = CanvasConfig {
            scale_min: 5.0,
            ..Default::default()
        };
        assert!(CanvasEngine::new(config).is_err());
        assert!(CanvasEngine::new(CanvasConfig::default()).is_ok());
    }

    #[test]
    fn test_init_mounts_and_centers() {
        let mut engine = CanvasEngine::default();
        engine.init(1280.0, 720.0, 0.0);
        assert!(engine.is_mounted());
        assert!(engine.listeners().contains(GlobalListener::KeyDown));
        assert!((engine.viewport.scale() - 0.6).abs() < 1e-12);

        engine.teardown();
        assert!(!engine.is_mounted());
        assert!(engine.listeners().is_empty());
    }

    #[test]
    fn test_load_items() {
        let mut engine = CanvasEngine::default();
        assert_eq!(engine.load_items(&contents()), 2);
        assert_eq!(engine.items.len(), 2);
        assert!(engine.items.get("album-trip").is_some());
        assert!(engine.items.get("snip-idea").is_some());
    }

    #[test]
    fn test_load_items_json() {
        let mut engine = CanvasEngine::default();
        let json = r#"[
            {"content": {"kind": "album", "slug": "a", "title": "A"}},
            {"id": "custom", "content": {"kind": "playlist", "slug": "p", "title": "P"}}
        ]"#;
        assert_eq!(engine.load_items_json(json).unwrap(), 2);
        assert!(engine.items.get("custom").is_some());
        assert!(matches!(engine.load_items_json("{"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_toggle_filter_cycle_resets_focus() {
        let mut engine = CanvasEngine::default();
        engine.init(1280.0, 720.0, 0.0);
        engine.load_items(&contents());
        engine.focus_next(0.0);
        assert_eq!(engine.focused_index(), 1);

        assert_eq!(engine.toggle_filter(), ItemFilter::Album);
        assert_eq!(engine.focused_index(), 0);
        assert_eq!(engine.visible_items().len(), 1);
        assert_eq!(engine.toggle_filter(), ItemFilter::Snippet);
        assert_eq!(engine.toggle_filter(), ItemFilter::Playlist);
        assert!(engine.visible_items().is_empty());
        assert_eq!(engine.toggle_filter(), ItemFilter::All);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let config = CanvasConfig {
            jitter_range: 30.0,
            rotation_range: 4.0,
            layout_seed: Some(99),
            ..Default::default()
        };
        let mut a = CanvasEngine::new(config.clone()).unwrap();
        let mut b = CanvasEngine::with_seed(config, 1234).unwrap();
        a.load_items(&contents());
        b.load_items(&contents());
        assert_eq!(a.items.items(), b.items.items());
    }
}
