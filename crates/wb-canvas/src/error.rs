//! Error types for configuration and content ingestion
//!
//! Interactive paths (pointer, wheel, keyboard) never fail; they degrade to
//! no-ops. Only values handed in from outside the engine are validated.

use thiserror::Error;

/// Errors raised while accepting configuration or content from the host
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Scale range is empty or not positive
    #[error("invalid scale range: min {min} must be positive and not exceed max {max}")]
    InvalidScaleRange { min: f64, max: f64 },

    /// A scale-like value falls outside `[min, max]`
    #[error("{field} = {value} is outside the scale range [{min}, {max}]")]
    ScaleOutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A dimension or duration must be strictly positive
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    /// A range or offset must not be negative
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    /// Zoom step must grow the scale
    #[error("zoom step must be greater than 1, got {0}")]
    InvalidZoomStep(f64),

    /// Malformed JSON input
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}
