//! Marker QA Core - Domain logic for AR marker image validation
//!
//! This crate contains the domain types, the marker quality heuristic, image
//! decoding, and the port traits implemented by adapters.

pub mod decode;
pub mod domain;
pub mod ports;
pub mod validation;

pub use decode::{decode_marker, DecodeError};
pub use domain::{
    ImageDimensions, IssueKind, MarkerImage, MarkerMetrics, MarkerReport, Recommendation,
    ValidationResult,
};
pub use ports::{ImageSource, ProgressEvent, ProgressSink, ResultOutput};
pub use validation::{MarkerAnalysis, MarkerValidator, ValidatorConfig};
