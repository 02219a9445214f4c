//! Marker validator.

use tracing::debug;

use super::ValidatorConfig;
use crate::decode::{decode_marker, DecodeError};
use crate::domain::{IssueKind, MarkerImage, MarkerMetrics, Recommendation, ValidationResult};

/// Average contrast that maps to a full 100 quality points.
const CONTRAST_SCALE: f64 = 30.0;
/// Quality points per unit of edge density.
const EDGE_DENSITY_WEIGHT: f64 = 1000.0;
/// Highest reportable quality.
const MAX_QUALITY: f64 = 100.0;

/// Validation result together with the statistics it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerAnalysis {
    /// Quality score, issues and recommendations.
    pub result: ValidationResult,
    /// Raw statistics.
    pub metrics: MarkerMetrics,
}

/// Scores candidate marker images.
///
/// Validation is pure: the same image always yields the same result.
#[derive(Debug, Clone, Default)]
pub struct MarkerValidator {
    config: ValidatorConfig,
}

impl MarkerValidator {
    /// Creates a validator with the given thresholds.
    #[must_use]
    pub const fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Returns the validator thresholds.
    #[must_use]
    pub const fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates a decoded marker image.
    #[must_use]
    pub fn validate(&self, image: &MarkerImage) -> ValidationResult {
        self.analyze(image).result
    }

    /// Validates a decoded marker image and keeps the intermediate statistics.
    #[must_use]
    pub fn analyze(&self, image: &MarkerImage) -> MarkerAnalysis {
        let metrics = match image.image.as_rgb8() {
            Some(rgb) => MarkerMetrics::from_rgb(rgb, self.config.edge_threshold),
            None => MarkerMetrics::from_rgb(&image.to_rgb8(), self.config.edge_threshold),
        };
        let result = self.evaluate(&metrics);

        debug!(
            path = %image.path,
            quality = result.quality,
            avg_contrast = metrics.avg_contrast,
            edge_density = metrics.edge_density,
            issues = result.issues.len(),
            "validated marker"
        );

        MarkerAnalysis { result, metrics }
    }

    /// Decodes raw image bytes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the bytes are not a decodable image.
    pub fn validate_bytes(
        &self,
        label: impl Into<String>,
        bytes: &[u8],
    ) -> Result<ValidationResult, DecodeError> {
        let image = decode_marker(label, bytes)?;
        Ok(self.validate(&image))
    }

    /// Derives the quality score, issues and recommendations from statistics.
    #[must_use]
    pub fn evaluate(&self, metrics: &MarkerMetrics) -> ValidationResult {
        let config = &self.config;

        let raw = (metrics.avg_contrast / CONTRAST_SCALE) * 100.0
            + metrics.edge_density * EDGE_DENSITY_WEIGHT;
        let quality = raw.max(config.quality_floor).min(MAX_QUALITY);

        let mut issues = Vec::new();
        if metrics.width < config.min_dimension || metrics.height < config.min_dimension {
            issues.push(IssueKind::LowResolution);
        }
        if metrics.aspect_ratio < config.min_aspect_ratio
            || metrics.aspect_ratio > config.max_aspect_ratio
        {
            issues.push(IssueKind::UnusualAspectRatio);
        }
        if metrics.avg_contrast < config.low_contrast_threshold {
            issues.push(IssueKind::LowContrast);
        }

        let mut recommendations: Vec<Recommendation> =
            issues.iter().map(|issue| issue.recommendation()).collect();
        if metrics.edge_density < config.min_edge_density {
            recommendations.push(Recommendation::AddDistinctFeatures);
        }

        ValidationResult {
            quality,
            issues,
            recommendations,
        }
    }
}
