//! Check command - validate candidate marker images.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use marker_qa_adapters::{FsImageSource, ReadError};
use marker_qa_core::{
    DecodeError, ImageDimensions, ImageSource, MarkerReport, MarkerValidator, ProgressEvent,
    ProgressSink, ResultOutput, ValidatorConfig,
};
use tracing::{debug, info, warn};

use super::ExitCode;
use crate::config::AppConfig;
use crate::output::{JsonOutput, OutputFormat, ProgressBar};

/// Parse and validate a quality score (0-100).
fn parse_quality(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    if (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is not in 0..=100"))
    }
}

/// Parse and validate a fraction (0.0-1.0).
fn parse_fraction(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is not in 0.0..=1.0"))
    }
}

/// Parse and validate a brightness difference (0-255).
fn parse_brightness(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    if (0.0..=255.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is not in 0..=255"))
    }
}

/// Shared arguments for marker validation.
#[derive(Args, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct CheckArgs {
    /// Marker images or directories to validate
    pub paths: Vec<PathBuf>,

    /// Recurse into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Fail markers scoring below this quality (0-100)
    #[arg(long, value_parser = parse_quality)]
    pub min_quality: Option<f64>,

    /// Minimum marker width and height in pixels
    #[arg(long, value_name = "PIXELS")]
    pub min_dimension: Option<u32>,

    /// Average contrast below which a marker is flagged (0-255)
    #[arg(long, value_parser = parse_brightness)]
    pub low_contrast: Option<f64>,

    /// Edge density below which more features are recommended (0.0-1.0)
    #[arg(long, value_parser = parse_fraction)]
    pub min_edge_density: Option<f64>,

    /// Include raw contrast metrics in output
    #[arg(long)]
    pub metrics: bool,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output (only affects --format json)
    #[arg(long)]
    pub pretty: bool,

    /// Merged config (populated by `with_config`, not from CLI).
    #[arg(skip)]
    config: Option<AppConfig>,
}

impl CheckArgs {
    /// Apply configuration file values, respecting CLI precedence.
    ///
    /// Layering priority (lowest to highest):
    /// 1. Hardcoded defaults (`ValidatorConfig::default()`)
    /// 2. Config file values (XDG, then project-local)
    /// 3. CLI arguments (already set on self)
    pub fn with_config(mut args: Self, config: &AppConfig) -> Self {
        if !args.recursive {
            args.recursive = config.general.recursive.unwrap_or(false);
        }

        args.min_quality = args.min_quality.or(config.validation.min_quality);
        args.min_dimension = args.min_dimension.or(config.validation.min_dimension);
        args.low_contrast = args
            .low_contrast
            .or(config.validation.low_contrast_threshold);
        args.min_edge_density = args.min_edge_density.or(config.validation.min_edge_density);

        if args.format.is_none() {
            args.format = config
                .output
                .format
                .as_ref()
                .and_then(|s| match s.as_str() {
                    "json" => Some(OutputFormat::Json),
                    "jsonl" => Some(OutputFormat::Jsonl),
                    _ => None,
                });
        }

        if !args.pretty {
            args.pretty = config.output.pretty.unwrap_or(false);
        }
        if !args.metrics {
            args.metrics = config.output.metrics.unwrap_or(false);
        }
        if !args.progress {
            args.progress = config.output.progress.unwrap_or(false);
        }

        args.config = Some(config.clone());

        args
    }

    /// Builds validator thresholds from CLI flags, config file, then defaults.
    fn validator_config(&self) -> ValidatorConfig {
        let defaults = ValidatorConfig::default();
        let file = self.config.as_ref().map(|c| &c.validation);

        ValidatorConfig {
            min_dimension: self.min_dimension.unwrap_or(defaults.min_dimension),
            min_aspect_ratio: file
                .and_then(|v| v.min_aspect_ratio)
                .unwrap_or(defaults.min_aspect_ratio),
            max_aspect_ratio: file
                .and_then(|v| v.max_aspect_ratio)
                .unwrap_or(defaults.max_aspect_ratio),
            low_contrast_threshold: self
                .low_contrast
                .unwrap_or(defaults.low_contrast_threshold),
            edge_threshold: file
                .and_then(|v| v.edge_threshold)
                .unwrap_or(defaults.edge_threshold),
            min_edge_density: self.min_edge_density.unwrap_or(defaults.min_edge_density),
            quality_floor: defaults.quality_floor,
        }
    }

    /// Get output format with fallback to JSONL.
    fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

/// Result of running the check command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckResult {
    /// Number of images validated.
    pub processed: usize,
    /// Number of images skipped.
    pub skipped: usize,
    /// Number of images that failed validation.
    pub failed: usize,
    /// Exit code.
    pub exit_code: ExitCode,
}

/// Run the check command.
///
/// Expects `args` to have been processed through `with_config()` first
/// to apply configuration file settings.
pub fn run(args: &CheckArgs) -> Result<CheckResult> {
    info!("Running check command on {} paths", args.paths.len());

    if args.paths.is_empty() {
        anyhow::bail!("No paths specified");
    }

    let source = FsImageSource::new(args.paths.clone(), args.recursive);
    let total = source.count_hint();

    let show_progress = !args.quiet && (args.progress || std::io::stderr().is_terminal());
    let progress_bar = ProgressBar::new(total.map(|t| t as u64), args.quiet, show_progress);

    let output = JsonOutput::stdout(args.format(), args.pretty);

    let validator = MarkerValidator::new(args.validator_config());
    debug!("Validator thresholds: {:?}", validator.config());

    process_images(&source, &validator, &output, &progress_bar, args)
}

/// Validate every image from the source and emit reports.
fn process_images(
    source: &dyn ImageSource,
    validator: &MarkerValidator,
    output: &dyn ResultOutput,
    progress: &dyn ProgressSink,
    args: &CheckArgs,
) -> Result<CheckResult> {
    let total = source.count_hint();
    let mut processed = 0usize;
    let mut skipped = 0usize;
    let mut failed = 0usize;

    for (index, image_result) in source.images().enumerate() {
        let image = match image_result {
            Ok(img) => img,
            Err(e) => {
                let path = e
                    .downcast_ref::<DecodeError>()
                    .map(|d| d.label().to_string())
                    .or_else(|| e.downcast_ref::<ReadError>().map(|r| r.path().to_string()))
                    .unwrap_or_else(|| format!("image {index}"));
                progress.on_event(ProgressEvent::Skipped {
                    path,
                    reason: format!("{e:#}"),
                });
                skipped += 1;
                continue;
            }
        };

        progress.on_event(ProgressEvent::Started {
            path: image.path.clone(),
            index,
            total,
        });

        let analysis = validator.analyze(&image);
        let below_minimum = args
            .min_quality
            .is_some_and(|min| analysis.result.quality < min);
        if below_minimum || !analysis.result.is_clean() {
            failed += 1;
        }

        let report = MarkerReport {
            path: image.path,
            timestamp: iso_timestamp(),
            dimensions: ImageDimensions::new(image.width, image.height),
            result: analysis.result,
            metrics: args.metrics.then_some(analysis.metrics),
        };

        output.write(&report)?;
        progress.on_event(ProgressEvent::Completed { report });

        processed += 1;
    }

    output.flush()?;

    progress.on_event(ProgressEvent::Finished { processed, skipped });

    let exit_code = if processed == 0 {
        warn!("No marker images were validated ({skipped} skipped)");
        ExitCode::Error
    } else if failed > 0 {
        ExitCode::IssuesFound
    } else {
        ExitCode::Success
    };

    Ok(CheckResult {
        processed,
        skipped,
        failed,
        exit_code,
    })
}

/// Generate ISO 8601 UTC timestamp (RFC 3339 format).
fn iso_timestamp() -> String {
    match time::OffsetDateTime::now_utc().format(&time::format_description::well_known::Rfc3339) {
        Ok(ts) => ts,
        Err(e) => {
            debug!("Timestamp format failed: {e}");
            String::from("1970-01-01T00:00:00Z")
        }
    }
}
