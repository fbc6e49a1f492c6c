//! CLI definitions, run-summary presentation, and error mapping.

use crate::compare::{Comparison, DEFAULT_OUT_DIR};
use crate::error::CompareError;
use crate::report::format_size;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

/// dirdiff - content-based directory tree comparison
#[derive(Parser)]
#[command(name = "dirdiff")]
#[command(about = "Compare two directory trees by content and report added, removed, and changed files")]
pub struct Cli {
    /// Path to the run configuration file (`original=` and `destination=` lines)
    pub config: Option<PathBuf>,

    /// Output directory for report files
    #[arg(long, default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Output format for the run summary (text or json)
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

/// Render the run summary in the requested format.
pub fn format_summary(comparison: &Comparison, format: &str) -> Result<String, CompareError> {
    match format {
        "text" => Ok(format_summary_text(comparison)),
        "json" => format_summary_json(comparison),
        other => Err(CompareError::Config(format!(
            "Invalid output format: {} (must be 'text' or 'json')",
            other
        ))),
    }
}

fn format_summary_text(comparison: &Comparison) -> String {
    format!(
        "Added: {}, Removed: {}, Changed: {} (origin {}, destination {})\nComparison results written to: {}",
        comparison.diff.added.len(),
        comparison.diff.removed.len(),
        comparison.diff.changed.len(),
        format_size(comparison.original_size),
        format_size(comparison.destination_size),
        comparison.report_path.display(),
    )
}

#[derive(Serialize)]
struct SummaryJson<'a> {
    report_path: String,
    original_size: u64,
    destination_size: u64,
    elapsed_seconds: u64,
    added: &'a [String],
    removed: &'a [String],
    changed: &'a [String],
}

fn format_summary_json(comparison: &Comparison) -> Result<String, CompareError> {
    let summary = SummaryJson {
        report_path: comparison.report_path.display().to_string(),
        original_size: comparison.original_size,
        destination_size: comparison.destination_size,
        elapsed_seconds: comparison.elapsed.as_secs(),
        added: &comparison.diff.added,
        removed: &comparison.diff.removed,
        changed: &comparison.diff.changed,
    };
    Ok(serde_json::to_string_pretty(&summary)?)
}

/// Map an error to its user-facing message.
pub fn map_error(error: &CompareError) -> String {
    match error {
        CompareError::Config(msg) => format!("Configuration error: {}", msg),
        CompareError::PathNotFound(path) => {
            format!("Error: directory does not exist: {}", path.display())
        }
        CompareError::UnknownAlgorithm(name) => format!("Unknown hash algorithm: {}", name),
        other => format!("An unexpected error occurred: {}", other),
    }
}
