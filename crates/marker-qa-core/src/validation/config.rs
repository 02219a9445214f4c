//! Validator thresholds.

/// Thresholds for marker validation.
///
/// The defaults are the values downstream trackers were tuned against.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatorConfig {
    /// Minimum width and height in pixels.
    pub min_dimension: u32,
    /// Lowest accepted width/height ratio.
    pub min_aspect_ratio: f64,
    /// Highest accepted width/height ratio.
    pub max_aspect_ratio: f64,
    /// Average contrast below this is reported as low contrast.
    pub low_contrast_threshold: f64,
    /// Vertical brightness difference above which a pixel counts as an edge.
    pub edge_threshold: f64,
    /// Edge density below this triggers the feature recommendation.
    pub min_edge_density: f64,
    /// Lowest quality score that can be reported.
    pub quality_floor: f64,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            min_dimension: 256,
            min_aspect_ratio: 0.5,
            max_aspect_ratio: 2.0,
            low_contrast_threshold: 15.0,
            edge_threshold: 30.0,
            min_edge_density: 0.1,
            quality_floor: 60.0,
        }
    }
}
