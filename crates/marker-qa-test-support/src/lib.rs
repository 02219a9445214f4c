//! Test support utilities for marker-qa.
//!
//! Provides mocks, synthetic marker builders, and utilities for testing
//! the validation pipeline.
//!
//! # Example
//!
//! ```
//! use marker_qa_test_support::{MockImageSource, SyntheticImageBuilder};
//!
//! let striped = SyntheticImageBuilder::alternating_rows(256, 256);
//! let flat = SyntheticImageBuilder::solid(256, 256, [40, 40, 40]);
//!
//! let source = MockImageSource::new(vec![striped, flat]);
//! ```

mod builders;
mod mocks;

pub use builders::{encode, SyntheticImageBuilder};
pub use mocks::{MockImageSource, MockProgressSink, MockResultOutput};
