//! Filesystem adapter for loading candidate markers.

use anyhow::{Context, Result};
use marker_qa_core::{decode_marker, ImageSource, MarkerImage};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{debug, warn};

/// Raster formats the decoder handles.
const RASTER_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp", "tiff", "tif"];

/// A listed file could not be read.
///
/// Attached as context to the I/O error, so callers can recover the path
/// with `anyhow::Error::downcast_ref`.
#[derive(Debug, Clone, Error)]
#[error("Failed to read {path}")]
pub struct ReadError {
    path: String,
}

impl ReadError {
    /// Creates a read error for the given path.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the unreadable file.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Filesystem image source adapter.
///
/// The file list is collected once, on first use.
pub struct FsImageSource {
    paths: Vec<PathBuf>,
    recursive: bool,
    files: OnceLock<Vec<PathBuf>>,
}

impl FsImageSource {
    /// Creates a new filesystem image source.
    ///
    /// # Arguments
    ///
    /// * `paths` - Files or directories to scan
    /// * `recursive` - Whether to recurse into subdirectories
    #[must_use]
    pub const fn new(paths: Vec<PathBuf>, recursive: bool) -> Self {
        Self {
            paths,
            recursive,
            files: OnceLock::new(),
        }
    }

    fn files(&self) -> &[PathBuf] {
        self.files.get_or_init(|| {
            let files = self.collect_files();
            debug!("Found {} image files", files.len());
            files
        })
    }

    /// Collects all candidate marker files from the configured paths.
    fn collect_files(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for path in &self.paths {
            if path.is_file() {
                if is_supported_image(path) {
                    files.push(path.clone());
                } else {
                    warn!("Unsupported file type: {}", path.display());
                }
            } else if path.is_dir() {
                self.collect_from_dir(path, &mut files);
            } else {
                warn!("Path does not exist: {}", path.display());
            }
        }

        files
    }

    fn collect_from_dir(&self, dir: &Path, files: &mut Vec<PathBuf>) {
        let entries = match std::fs::read_dir(dir) {
            Ok(e) => e,
            Err(e) => {
                warn!("Failed to read directory {}: {e}", dir.display());
                return;
            }
        };

        let mut paths: Vec<PathBuf> = entries.flatten().map(|entry| entry.path()).collect();
        paths.sort();

        for path in paths {
            if path.is_file() && is_supported_image(&path) {
                files.push(path);
            } else if path.is_dir() && self.recursive {
                self.collect_from_dir(&path, files);
            }
        }
    }
}

impl ImageSource for FsImageSource {
    fn images(&self) -> Box<dyn Iterator<Item = Result<MarkerImage>> + Send + '_> {
        Box::new(self.files().iter().map(|path| load_image(path)))
    }

    fn count_hint(&self) -> Option<usize> {
        Some(self.files().len())
    }
}

/// Checks if a path has a supported image extension.
fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .is_some_and(|e| RASTER_EXTENSIONS.contains(&e.as_str()))
}

/// Reads and decodes a marker image from the filesystem.
fn load_image(path: &Path) -> Result<MarkerImage> {
    let bytes =
        std::fs::read(path).with_context(|| ReadError::new(path.to_string_lossy()))?;
    let image = decode_marker(path.to_string_lossy(), &bytes)?;
    Ok(image)
}
