//! Marker quality heuristic.
//!
//! Scores how well an image is likely to track as an AR marker, from its
//! size, shape and vertical brightness contrast.

mod config;
mod metrics;
mod validator;

pub use config::ValidatorConfig;
pub use validator::{MarkerAnalysis, MarkerValidator};
