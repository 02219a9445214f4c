//! Core domain types for marker validation.

mod image;
mod issue;
mod report;
mod result;

pub use image::MarkerImage;
pub use issue::{IssueKind, Recommendation};
pub use report::{ImageDimensions, MarkerReport};
pub use result::{MarkerMetrics, ValidationResult};
