//! Engine configuration
//!
//! Every tunable the canvas engine reads lives here. Hosts usually pass a
//! JSON object using the upper-case keys (`SCALE_MIN`, `FOCUS_ZOOM`, ...);
//! missing keys fall back to [`CanvasConfig::default`].

use serde::{Deserialize, Serialize};
use crate::error::ConfigError;
use crate::math::Size;
use crate::transition::DEFAULT_ANIMATION_MS;

/// Pan clamping policy for the camera transform
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanPolicy {
    /// The canvas is conceptually unbounded
    #[default]
    Unbounded,
    /// Keep the `CANVAS_WIDTH x CANVAS_HEIGHT` extent from leaving the viewport
    Bounded,
}

/// How concurrent item manipulations interact
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManipulationPolicy {
    /// Starting a drag or resize ends every other manipulation
    #[default]
    Exclusive,
    /// An armed resize survives a drag started on another item
    Concurrent,
}

/// Rendering quality hint, passed through to the render output untouched
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderQuality {
    #[default]
    High,
    Medium,
    Low,
}

/// Canvas engine configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct CanvasConfig {
    /// Lowest allowed zoom
    pub scale_min: f64,
    /// Highest allowed zoom
    pub scale_max: f64,
    /// Zoom used on load and by "center view"
    pub scale_initial: f64,
    /// Reading zoom used when focusing a card
    pub focus_zoom: f64,
    /// Focus zoom for narrow viewports (`None` disables the override)
    pub compact_focus_zoom: Option<f64>,
    /// Viewports at most this wide count as narrow
    pub compact_viewport_width: f64,
    /// Default card width (canvas units)
    pub sticky_width: f64,
    /// Default card height (canvas units)
    pub sticky_height: f64,
    /// Lower bound for either dimension while resizing
    pub min_item_size: f64,
    /// Footprint multiplier of an expanded card
    pub expand_factor: f64,
    /// Center-to-center distance between layout cells
    pub grid_spacing: f64,
    /// Width of the symmetric jitter range applied to layout positions
    pub jitter_range: f64,
    /// Width of the symmetric rotation range in degrees
    pub rotation_range: f64,
    /// Hold time before a press on a card counts as a long press
    pub long_press_ms: f64,
    /// Length of the advisory transition window
    pub animation_ms: f64,
    /// Multiplier applied by zoom in / zoom out
    pub zoom_step: f64,
    /// Wheel zoom sensitivity
    pub wheel_zoom_factor: f64,
    /// Canvas extent used for pan bounds and minimum-scale math
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub pan_policy: PanPolicy,
    pub manipulation_policy: ManipulationPolicy,
    pub render_quality: RenderQuality,
    /// Fixed layout RNG seed; `None` defers to the host-provided seed
    pub layout_seed: Option<u64>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            scale_min: 0.2,
            scale_max: 4.0,
            scale_initial: 0.6,
            focus_zoom: 1.5,
            compact_focus_zoom: Some(1.2),
            compact_viewport_width: 768.0,
            sticky_width: 280.0,
            sticky_height: 320.0,
            min_item_size: 50.0,
            expand_factor: 1.5,
            grid_spacing: 450.0,
            jitter_range: 0.0,
            rotation_range: 0.0,
            long_press_ms: 1000.0,
            animation_ms: DEFAULT_ANIMATION_MS,
            zoom_step: 1.2,
            wheel_zoom_factor: 0.005,
            canvas_width: 3000.0,
            canvas_height: 2000.0,
            pan_policy: PanPolicy::Unbounded,
            manipulation_policy: ManipulationPolicy::Exclusive,
            render_quality: RenderQuality::High,
            layout_seed: None,
        }
    }
}

impl CanvasConfig {
    /// Parse and validate a JSON configuration object
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: CanvasConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Default card footprint
    #[inline]
    pub fn sticky_size(&self) -> Size {
        Size::new(self.sticky_width, self.sticky_height)
    }

    /// Canvas extent used for bounds math
    #[inline]
    pub fn canvas_size(&self) -> Size {
        Size::new(self.canvas_width, self.canvas_height)
    }

    /// Focus zoom for a viewport of the given width
    pub fn focus_zoom_for(&self, viewport_width: f64) -> f64 {
        match self.compact_focus_zoom {
            Some(zoom) if viewport_width > 0.0 && viewport_width <= self.compact_viewport_width => zoom,
            _ => self.focus_zoom,
        }
    }

    /// Check every invariant the engine relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = (self.scale_min, self.scale_max);
        if !(min > 0.0 && min.is_finite() && max.is_finite() && min <= max) {
            return Err(ConfigError::InvalidScaleRange { min, max });
        }

        let mut scales = vec![
            ("SCALE_INITIAL", self.scale_initial),
            ("FOCUS_ZOOM", self.focus_zoom),
        ];
        if let Some(zoom) = self.compact_focus_zoom {
            scales.push(("COMPACT_FOCUS_ZOOM", zoom));
        }
        for (field, value) in scales {
            if !(min..=max).contains(&value) {
                return Err(ConfigError::ScaleOutOfRange { field, value, min, max });
            }
        }

        for (field, value) in [
            ("STICKY_WIDTH", self.sticky_width),
            ("STICKY_HEIGHT", self.sticky_height),
            ("MIN_ITEM_SIZE", self.min_item_size),
            ("EXPAND_FACTOR", self.expand_factor),
            ("GRID_SPACING", self.grid_spacing),
            ("LONG_PRESS_MS", self.long_press_ms),
            ("ANIMATION_MS", self.animation_ms),
            ("WHEEL_ZOOM_FACTOR", self.wheel_zoom_factor),
            ("CANVAS_WIDTH", self.canvas_width),
            ("CANVAS_HEIGHT", self.canvas_height),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        for (field, value) in [
            ("JITTER_RANGE", self.jitter_range),
            ("ROTATION_RANGE", self.rotation_range),
            ("COMPACT_VIEWPORT_WIDTH", self.compact_viewport_width),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if !(self.zoom_step > 1.0 && self.zoom_step.is_finite()) {
            return Err(ConfigError::InvalidZoomStep(self.zoom_step));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(CanvasConfig::default().validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = CanvasConfig::from_json(r#"{"SCALE_MIN": 0.1, "SCALE_MAX": 2}"#).unwrap();
        assert!((config.scale_min - 0.1).abs() < 1e-12);
        assert!((config.scale_max - 2.0).abs() < 1e-12);
        assert!((config.grid_spacing - 450.0).abs() < 1e-12);
        assert_eq!(config.pan_policy, PanPolicy::Unbounded);
    }

    #[test]
    fn test_from_json_enums() {
        let config = CanvasConfig::from_json(
            r#"{"PAN_POLICY": "bounded", "MANIPULATION_POLICY": "concurrent", "RENDER_QUALITY": "low"}"#,
        )
        .unwrap();
        assert_eq!(config.pan_policy, PanPolicy::Bounded);
        assert_eq!(config.manipulation_policy, ManipulationPolicy::Concurrent);
        assert_eq!(config.render_quality, RenderQuality::Low);
    }

    #[test]
    fn test_invalid_scale_range_rejected() {
        let config = CanvasConfig {
            scale_min: 0.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidScaleRange { .. })));

        let config = CanvasConfig {
            scale_min: 3.0,
            scale_max: 2.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidScaleRange { .. })));
    }

    #[test]
    fn test_initial_scale_outside_range_rejected() {
        let err = CanvasConfig::from_json(r#"{"SCALE_INITIAL": 9.0}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ScaleOutOfRange { field: "SCALE_INITIAL", .. }
        ));
    }

    #[test]
    fn test_non_positive_dimension_rejected() {
        let err = CanvasConfig::from_json(r#"{"GRID_SPACING": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::NonPositive { field: "GRID_SPACING", .. }));
    }

    #[test]
    fn test_negative_jitter_rejected() {
        let err = CanvasConfig::from_json(r#"{"JITTER_RANGE": -4}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Negative { field: "JITTER_RANGE", .. }));
    }

    #[test]
    fn test_zoom_step_must_grow() {
        let err = CanvasConfig::from_json(r#"{"ZOOM_STEP": 1.0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidZoomStep(_)));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            CanvasConfig::from_json("not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_focus_zoom_for_viewport_width() {
        let config = CanvasConfig::default();
        assert!((config.focus_zoom_for(1920.0) - 1.5).abs() < 1e-12);
        assert!((config.focus_zoom_for(600.0) - 1.2).abs() < 1e-12);

        let config = CanvasConfig {
            compact_focus_zoom: None,
            ..Default::default()
        };
        assert!((config.focus_zoom_for(600.0) - 1.5).abs() < 1e-12);
    }
}
