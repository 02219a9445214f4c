//! Configuration file support for marker-qa.
//!
//! Supports TOML configuration from:
//! - XDG config: `~/.config/marker-qa/config.toml` (lowest priority)
//! - Project-local: `.marker-qa.toml` (searched up directory tree)
//! - CLI flags (highest priority, applied separately)

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

/// Project-local config file name.
const PROJECT_CONFIG_NAME: &str = ".marker-qa.toml";

/// Top-level configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// General options.
    pub general: GeneralConfig,
    /// Marker validation thresholds.
    pub validation: ValidationConfig,
    /// Output formatting settings.
    pub output: OutputConfig,
}

/// General configuration options.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Recurse into subdirectories by default.
    pub recursive: Option<bool>,
}

/// Marker validation thresholds.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Minimum width and height in pixels.
    pub min_dimension: Option<u32>,
    /// Lowest accepted width/height ratio.
    pub min_aspect_ratio: Option<f64>,
    /// Highest accepted width/height ratio.
    pub max_aspect_ratio: Option<f64>,
    /// Average contrast below this is reported.
    pub low_contrast_threshold: Option<f64>,
    /// Brightness difference that counts as an edge (0-255).
    pub edge_threshold: Option<f64>,
    /// Edge density below this triggers the feature recommendation (0.0-1.0).
    pub min_edge_density: Option<f64>,
    /// Quality below this fails the run (0-100).
    pub min_quality: Option<f64>,
}

/// Output formatting configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: "json" or "jsonl".
    pub format: Option<String>,
    /// Pretty-print JSON output.
    pub pretty: Option<bool>,
    /// Include raw contrast metrics.
    pub metrics: Option<bool>,
    /// Show progress bar.
    pub progress: Option<bool>,
}

impl AppConfig {
    /// Load configuration from XDG and project-local files.
    ///
    /// Priority (lowest to highest):
    /// 1. XDG config: `~/.config/marker-qa/config.toml`
    /// 2. Project-local: `.marker-qa.toml` (searched up from cwd)
    ///
    /// Missing files are silently ignored. Invalid values are reported as
    /// warnings and the file settings are discarded in favour of defaults.
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(xdg_path) = xdg_config_path() {
            if xdg_path.exists() {
                info!("Loading XDG config: {}", xdg_path.display());
                if let Some(xdg_config) = load_file(&xdg_path) {
                    config = xdg_config;
                }
            } else {
                debug!("XDG config not found: {}", xdg_path.display());
            }
        }

        if let Some(project_path) = find_project_config() {
            info!("Loading project config: {}", project_path.display());
            if let Some(project_config) = load_file(&project_path) {
                config.merge(project_config);
            }
        }

        if let Err(e) = config.validate() {
            eprintln!("warning: {e}; ignoring configuration files");
            return Self::default();
        }

        config
    }

    /// Validate configuration values are within acceptable ranges.
    fn validate(&self) -> Result<(), String> {
        let v = &self.validation;

        for (name, value) in [
            ("validation.min_aspect_ratio", v.min_aspect_ratio),
            ("validation.max_aspect_ratio", v.max_aspect_ratio),
        ] {
            if let Some(r) = value {
                if !r.is_finite() || r <= 0.0 {
                    return Err(format!("{name} must be a positive finite number, got {r}"));
                }
            }
        }
        if let (Some(min), Some(max)) = (v.min_aspect_ratio, v.max_aspect_ratio) {
            if min > max {
                return Err(format!(
                    "validation.min_aspect_ratio ({min}) exceeds validation.max_aspect_ratio ({max})"
                ));
            }
        }
        if let Some(t) = v.low_contrast_threshold {
            if !(0.0..=255.0).contains(&t) {
                return Err(format!(
                    "validation.low_contrast_threshold must be 0-255, got {t}"
                ));
            }
        }
        if let Some(t) = v.edge_threshold {
            if !(0.0..=255.0).contains(&t) {
                return Err(format!("validation.edge_threshold must be 0-255, got {t}"));
            }
        }
        if let Some(d) = v.min_edge_density {
            if !(0.0..=1.0).contains(&d) {
                return Err(format!(
                    "validation.min_edge_density must be 0.0-1.0, got {d}"
                ));
            }
        }
        if let Some(q) = v.min_quality {
            if !(0.0..=100.0).contains(&q) {
                return Err(format!("validation.min_quality must be 0-100, got {q}"));
            }
        }

        if let Some(ref f) = self.output.format {
            if f != "json" && f != "jsonl" {
                return Err(format!(
                    "output.format must be 'json' or 'jsonl', got '{f}'"
                ));
            }
        }

        Ok(())
    }

    /// Merge another config into this one.
    /// Values from `other` override values in `self` when present.
    fn merge(&mut self, other: Self) {
        self.general.recursive = other.general.recursive.or(self.general.recursive);

        let (v, o) = (&mut self.validation, other.validation);
        v.min_dimension = o.min_dimension.or(v.min_dimension);
        v.min_aspect_ratio = o.min_aspect_ratio.or(v.min_aspect_ratio);
        v.max_aspect_ratio = o.max_aspect_ratio.or(v.max_aspect_ratio);
        v.low_contrast_threshold = o.low_contrast_threshold.or(v.low_contrast_threshold);
        v.edge_threshold = o.edge_threshold.or(v.edge_threshold);
        v.min_edge_density = o.min_edge_density.or(v.min_edge_density);
        v.min_quality = o.min_quality.or(v.min_quality);

        self.output.format = other.output.format.or_else(|| self.output.format.take());
        self.output.pretty = other.output.pretty.or(self.output.pretty);
        self.output.metrics = other.output.metrics.or(self.output.metrics);
        self.output.progress = other.output.progress.or(self.output.progress);
    }
}

/// Get the XDG config file path.
fn xdg_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("marker-qa").join("config.toml"))
}

/// Find project-local config by searching up from current directory.
fn find_project_config() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_in_parents(&cwd)
}

/// Search for `.marker-qa.toml` in the given directory and its parents.
fn find_config_in_parents(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(PROJECT_CONFIG_NAME))
        .find(|path| path.exists())
}

/// Load and parse a TOML config file.
fn load_file(path: &Path) -> Option<AppConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("Failed to read config file {}: {}", path.display(), e);
            return None;
        }
    };

    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!("Failed to parse config file {}: {}", path.display(), e);
            None
        }
    }
}
