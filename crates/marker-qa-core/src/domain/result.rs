//! Validation result types.

use serde::{Deserialize, Serialize};

use super::{IssueKind, Recommendation};

/// Outcome of validating one candidate marker image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Trackability estimate, clamped to the quality floor and 100.
    pub quality: f64,
    /// Detected issues, in check order.
    pub issues: Vec<IssueKind>,
    /// Advice for a better marker, in check order.
    pub recommendations: Vec<Recommendation>,
}

impl ValidationResult {
    /// Returns true if the given issue was reported.
    #[must_use]
    pub fn has_issue(&self, issue: IssueKind) -> bool {
        self.issues.contains(&issue)
    }

    /// Returns true if the given recommendation was made.
    #[must_use]
    pub fn recommends(&self, recommendation: Recommendation) -> bool {
        self.recommendations.contains(&recommendation)
    }

    /// Returns true if no issues were reported.
    ///
    /// Recommendations alone do not make a marker unclean.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Intermediate statistics behind a validation result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerMetrics {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Total number of pixels.
    pub pixel_count: u64,
    /// Sum of vertical brightness differences.
    pub total_contrast: f64,
    /// Pixels whose vertical difference exceeds the edge threshold.
    pub edge_count: u64,
    /// `total_contrast / pixel_count`.
    pub avg_contrast: f64,
    /// `edge_count / pixel_count`.
    pub edge_density: f64,
    /// `width / height`, or 0 for a zero-height image.
    pub aspect_ratio: f64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn result(issues: Vec<IssueKind>, recommendations: Vec<Recommendation>) -> ValidationResult {
        ValidationResult {
            quality: 60.0,
            issues,
            recommendations,
        }
    }

    #[test]
    fn test_is_clean_ignores_recommendations() {
        let r = result(vec![], vec![Recommendation::AddDistinctFeatures]);
        assert!(r.is_clean());
        assert!(r.recommends(Recommendation::AddDistinctFeatures));
    }

    #[test]
    fn test_has_issue() {
        let r = result(
            vec![IssueKind::LowContrast],
            vec![Recommendation::IncreaseContrast],
        );
        assert!(!r.is_clean());
        assert!(r.has_issue(IssueKind::LowContrast));
        assert!(!r.has_issue(IssueKind::LowResolution));
    }

    #[test]
    fn test_serialized_shape() {
        let r = result(
            vec![IssueKind::LowResolution],
            vec![Recommendation::IncreaseResolution],
        );
        let value = serde_json::to_value(&r).unwrap();
        assert_eq!(value["quality"], 60.0);
        assert_eq!(value["issues"][0], "Image resolution is too low");
        assert_eq!(
            value["recommendations"][0],
            "Use images with at least 256x256 resolution"
        );
    }
}
