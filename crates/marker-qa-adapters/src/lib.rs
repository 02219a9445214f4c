//! Marker QA Adapters - External adapters for marker-qa.
//!
//! This crate provides the filesystem image source.

pub mod fs;

pub use fs::{FsImageSource, ReadError};
