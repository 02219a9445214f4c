//! Per-file report emitted by batch validation.

use serde::{Deserialize, Serialize};

use super::{MarkerMetrics, ValidationResult};

/// Validation report for a single marker file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerReport {
    /// Path to the validated image.
    pub path: String,
    /// Timestamp of validation (ISO 8601).
    pub timestamp: String,
    /// Image dimensions.
    pub dimensions: ImageDimensions,
    /// Quality score, issues and recommendations.
    #[serde(flatten)]
    pub result: ValidationResult,
    /// Raw statistics, when requested.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub metrics: Option<MarkerMetrics>,
}

/// Image dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ImageDimensions {
    /// Creates dimensions from width and height.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}
