//! Spatial canvas engine for the whiteboard content browser
//!
//! This crate provides the core of an infinite, pannable and zoomable
//! whiteboard of cards (albums, text snippets, playlists):
//! - Camera transform with scale clamping, zoom toward a point and pan bounds
//! - Deterministic grid layout of cards around the canvas origin
//! - Drag-to-pan over empty canvas (mouse and single touch)
//! - Per-card drag, toggle resize, expand and long-press navigation
//! - Cyclic "focus on card" navigation with arrow keys
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Size`, `Rect`, `Transform`, `Projection`)
//!   and the scale / pan-bound helpers
//! - [`layout`]: Initial card placement and raise-to-front
//! - [`viewport`]: The viewport controller that owns the camera transform
//! - [`input`]: Pointer types, pan gesture and the manipulation state machine
//! - [`focus`]: Card focus navigation
//! - [`item`]: Card model, kind filter, hit testing
//! - [`transition`]: Advisory camera animations
//!
//! ## Example
//!
//! ```rust
//! use wb_canvas::{CanvasConfig, CanvasEngine, ContentItem, ItemPayload, AlbumData, PointerEvent};
//!
//! let mut engine = CanvasEngine::new(CanvasConfig::default()).unwrap();
//! engine.init(1280.0, 720.0, 0.0);
//! engine.load_items(&[ContentItem::new(ItemPayload::Album(AlbumData {
//!     slug: "summer".to_string(),
//!     title: "Summer".to_string(),
//!     ..Default::default()
//! }))]);
//!
//! engine.pointer_down(&PointerEvent::mouse(640.0, 360.0), 0.0);
//! engine.pointer_move(&PointerEvent::mouse(700.0, 360.0), 16.0);
//! engine.pointer_up();
//!
//! let frame = engine.render_state(16.0);
//! assert_eq!(frame.items.len(), 1);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without a browser
//! 2. **Time Abstraction**: Timers and animations take `now_ms` from the caller
//! 3. **Explicit Scale**: Pointer math receives the projection instead of reading rendered output
//! 4. **No Panics on Input**: Malformed input degrades to a no-op

pub mod math;
pub mod layout;
pub mod viewport;
pub mod input;
pub mod focus;
pub mod item;
pub mod transition;

mod config;
mod engine;
mod error;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use math::{Projection, Rect, Size, Transform, Vec2};
pub use config::{CanvasConfig, ManipulationPolicy, PanPolicy, RenderQuality};
pub use error::ConfigError;
pub use item::{
    AlbumData, ContentItem, Item, ItemBoard, ItemFilter, ItemId, ItemKind, ItemPayload,
    ItemRegion, NavigationIntent, PlaylistData, Position, SnippetData,
};
pub use input::{
    GestureUnifier, GlobalListener, InputResult, ItemManipulator, Key, ListenerSet,
    ManipulationState, PointerEvent, WheelInput,
};
pub use layout::{layout, update_z_order, LayoutOptions};
pub use viewport::ViewportController;
pub use focus::FocusNavigator;
pub use transition::CameraTransition;

pub use engine::{CanvasEngine, ItemView, RenderState, DEFAULT_LAYOUT_SEED};

/// Length of the camera animation window in milliseconds
pub use transition::DEFAULT_ANIMATION_MS;
