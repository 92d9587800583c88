//! WASM exports for the canvas engine
//!
//! Wraps [`CanvasEngine`] in a JS-friendly API. Structured values cross the
//! boundary as JSON strings; timestamps come from `Date.now()`.

use wasm_bindgen::prelude::*;

use crate::config::CanvasConfig;
use crate::engine::CanvasEngine;
use crate::input::{Key, PointerEvent, WheelInput};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Date, js_name = now)]
    fn date_now() -> f64;
}

/// Layout seed drawn from `Math.random()`
fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

/// Viewport size of the hosting window, if there is one
fn window_size() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

fn to_json<T: serde::Serialize>(value: &T, fallback: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| fallback.to_string())
}

/// Canvas controller for WASM - wraps CanvasEngine with a JS-friendly API
#[wasm_bindgen]
pub struct CanvasController {
    engine: CanvasEngine,
}

#[wasm_bindgen]
impl CanvasController {
    /// Create a controller from an optional JSON configuration object
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<CanvasController, JsError> {
        let config = match config_json {
            Some(json) => CanvasConfig::from_json(&json)?,
            None => CanvasConfig::default(),
        };
        let engine = CanvasEngine::with_seed(config, random_seed())?;
        Ok(Self { engine })
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Mount with the given viewport size, or the window's inner size when
    /// either dimension is missing
    #[wasm_bindgen]
    pub fn init(&mut self, width: Option<f64>, height: Option<f64>) {
        let (width, height) = match (width, height) {
            (Some(w), Some(h)) => (w, h),
            _ => window_size().unwrap_or((0.0, 0.0)),
        };
        self.engine.init(width, height, date_now());
    }

    /// Track a viewport size change
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f64, height: f64) {
        self.engine.resize(width, height, date_now());
    }

    /// Unmount
    #[wasm_bindgen]
    pub fn teardown(&mut self) {
        self.engine.teardown();
    }

    /// Registered window listeners as a JSON array
    #[wasm_bindgen]
    pub fn listeners_json(&self) -> String {
        to_json(&self.engine.listeners(), "[]")
    }

    /// Advance timers; returns a navigation intent as JSON when a long press fires
    #[wasm_bindgen]
    pub fn tick(&mut self) -> Option<String> {
        self.engine
            .tick(date_now())
            .map(|intent| to_json(&intent, "null"))
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// Load a JSON array of content items; returns the number of cards
    #[wasm_bindgen]
    pub fn load_items(&mut self, json: &str) -> Result<usize, JsError> {
        Ok(self.engine.load_items_json(json)?)
    }

    /// Advance the kind filter; returns the new filter name
    #[wasm_bindgen]
    pub fn toggle_filter(&mut self) -> String {
        let filter = self.engine.toggle_filter();
        to_json(&filter, "\"all\"").trim_matches('"').to_string()
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Pointer down; `event_json` is a tagged mouse / touch event.
    /// Returns whether the host should stop propagation.
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, event_json: &str) -> bool {
        match serde_json::from_str::<PointerEvent>(event_json) {
            Ok(event) => self.engine.pointer_down(&event, date_now()).is_handled(),
            Err(_) => false,
        }
    }

    /// Pointer move (window-level)
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, event_json: &str) -> bool {
        match serde_json::from_str::<PointerEvent>(event_json) {
            Ok(event) => self.engine.pointer_move(&event, date_now()).is_handled(),
            Err(_) => false,
        }
    }

    /// Pointer up (window-level)
    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> bool {
        self.engine.pointer_up().is_handled()
    }

    /// Pointer left the canvas surface
    #[wasm_bindgen]
    pub fn pointer_leave(&mut self) {
        self.engine.pointer_leave();
    }

    /// Wheel event; `precision` is the ctrl / cmd modifier
    #[wasm_bindgen]
    pub fn wheel(&mut self, delta_x: f64, delta_y: f64, x: f64, y: f64, precision: bool) -> bool {
        let wheel = WheelInput {
            delta_x,
            delta_y,
            x,
            y,
            precision,
        };
        self.engine.wheel(wheel, date_now()).is_handled()
    }

    /// Key down with a DOM `KeyboardEvent.key` value
    #[wasm_bindgen]
    pub fn key_down(&mut self, key: &str) -> bool {
        self.engine.key_down(Key::from_dom(key), date_now()).is_handled()
    }

    // =========================================================================
    // Camera
    // =========================================================================

    #[wasm_bindgen]
    pub fn zoom_in(&mut self, animate: bool) {
        self.engine.zoom_in(animate, date_now());
    }

    #[wasm_bindgen]
    pub fn zoom_out(&mut self, animate: bool) {
        self.engine.zoom_out(animate, date_now());
    }

    #[wasm_bindgen]
    pub fn center_view(&mut self, animate: bool) {
        self.engine.center_view(animate, date_now());
    }

    /// Focus the visible card at `index` (wrapped); returns the normalized index
    #[wasm_bindgen]
    pub fn focus_on_card(&mut self, index: i32) -> Option<u32> {
        self.engine
            .focus_on_card(index as i64, date_now())
            .map(|i| i as u32)
    }

    #[wasm_bindgen]
    pub fn focus_next(&mut self) -> Option<u32> {
        self.engine.focus_next(date_now()).map(|i| i as u32)
    }

    #[wasm_bindgen]
    pub fn focus_prev(&mut self) -> Option<u32> {
        self.engine.focus_prev(date_now()).map(|i| i as u32)
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render-state snapshot as JSON
    #[wasm_bindgen]
    pub fn render_state_json(&self) -> String {
        to_json(&self.engine.render_state(date_now()), "{}")
    }

    /// Committed camera transform as JSON
    #[wasm_bindgen]
    pub fn transform_json(&self) -> String {
        to_json(&self.engine.viewport.transform(), "{}")
    }
}
