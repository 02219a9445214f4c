//! Progress reporting port.

use crate::domain::MarkerReport;

/// Events emitted during batch validation.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Validation started for an image.
    Started {
        /// Path to the image.
        path: String,
        /// Index in the batch (0-based).
        index: usize,
        /// Total images in batch, if known.
        total: Option<usize>,
    },
    /// Validation completed for an image.
    Completed {
        /// The finished report.
        report: MarkerReport,
    },
    /// An image was skipped because it could not be loaded.
    Skipped {
        /// Path or position of the image.
        path: String,
        /// Reason for skipping.
        reason: String,
    },
    /// All images have been processed.
    Finished {
        /// Images validated.
        processed: usize,
        /// Images skipped.
        skipped: usize,
    },
}

/// Port for receiving progress events.
pub trait ProgressSink: Send + Sync {
    /// Called when a progress event occurs.
    fn on_event(&self, event: ProgressEvent);
}
