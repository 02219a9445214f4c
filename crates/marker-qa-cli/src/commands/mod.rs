//! CLI command definitions and handlers.

pub mod check;

use clap::{Parser, Subcommand};

/// Marker QA - Validate candidate AR marker images before upload
#[derive(Parser)]
#[command(name = "marker-qa")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Shared check arguments (paths, thresholds, flags).
    #[command(flatten)]
    pub check: check::CheckArgs,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Validate marker images
    Check(check::CheckArgs),
}

/// Process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Every marker passed.
    Success = 0,
    /// At least one marker has issues or scored below the minimum quality.
    IssuesFound = 1,
    /// The run could not complete.
    Error = 2,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code as u8)
    }
}
