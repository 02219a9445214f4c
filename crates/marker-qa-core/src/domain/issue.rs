//! Issues and recommendations reported for a candidate marker.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A problem detected in a candidate marker image.
///
/// Serializes to the human-readable message shown to the user.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueKind {
    /// Width or height is below the minimum dimension.
    #[serde(rename = "Image resolution is too low")]
    LowResolution,
    /// Width/height ratio lies outside the accepted band.
    #[serde(rename = "Unusual aspect ratio detected")]
    UnusualAspectRatio,
    /// Average vertical contrast is below the contrast threshold.
    #[serde(rename = "Low contrast detected")]
    LowContrast,
}

impl IssueKind {
    /// Returns the message reported for this issue.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::LowResolution => "Image resolution is too low",
            Self::UnusualAspectRatio => "Unusual aspect ratio detected",
            Self::LowContrast => "Low contrast detected",
        }
    }

    /// Returns the recommendation paired with this issue.
    #[must_use]
    pub const fn recommendation(self) -> Recommendation {
        match self {
            Self::LowResolution => Recommendation::IncreaseResolution,
            Self::UnusualAspectRatio => Recommendation::BalanceAspectRatio,
            Self::LowContrast => Recommendation::IncreaseContrast,
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Advice for picking a more trackable marker image.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    /// Use a larger image.
    #[serde(rename = "Use images with at least 256x256 resolution")]
    IncreaseResolution,
    /// Use a less elongated image.
    #[serde(rename = "Use images with aspect ratios between 1:2 and 2:1")]
    BalanceAspectRatio,
    /// Use an image with stronger contrast.
    #[serde(rename = "Use images with clear, high-contrast features")]
    IncreaseContrast,
    /// Use an image with more texture. Not tied to any issue.
    #[serde(rename = "Add more distinct features or patterns for better tracking")]
    AddDistinctFeatures,
}

impl Recommendation {
    /// Returns the message reported for this recommendation.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::IncreaseResolution => "Use images with at least 256x256 resolution",
            Self::BalanceAspectRatio => "Use images with aspect ratios between 1:2 and 2:1",
            Self::IncreaseContrast => "Use images with clear, high-contrast features",
            Self::AddDistinctFeatures => {
                "Add more distinct features or patterns for better tracking"
            }
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
