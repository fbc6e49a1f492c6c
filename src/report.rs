//! Plain-text report rendering and output.

use crate::diff::DiffResult;
use crate::error::CompareError;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Binary (1024-based) units for human-readable sizes.
const SIZE_UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];

/// Render a byte count with binary prefixes, truncating the fraction.
pub fn format_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    for unit in &SIZE_UNITS[..SIZE_UNITS.len() - 1] {
        if value < 1024.0 {
            return format!("{}{}", value.trunc() as u64, unit);
        }
        value /= 1024.0;
    }
    format!("{}{}", value.trunc() as u64, SIZE_UNITS[SIZE_UNITS.len() - 1])
}

/// Render an elapsed duration as hours, minutes, and seconds, eliding
/// leading zero components.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{} hours, {} minutes, {} seconds", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{} minutes, {} seconds", minutes, seconds)
    } else {
        format!("{} seconds", seconds)
    }
}

/// Inputs for one rendered comparison report.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    pub timestamp: DateTime<Local>,
    pub elapsed: Duration,
    pub original_size: u64,
    pub destination_size: u64,
    pub diff: &'a DiffResult,
}

impl Report<'_> {
    /// Render the full report text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Run at {}\n",
            self.timestamp.format("%Y-%m-%d %H:%M:%S")
        ));
        out.push_str(&format!(
            "Time to complete - {}\n\n",
            format_duration(self.elapsed)
        ));
        out.push_str("Size\n");
        out.push_str("--------\n");
        out.push_str(&format!(
            "Origin Folder: {}\n",
            format_size(self.original_size)
        ));
        out.push_str(&format!(
            "Destination Folder: {}\n\n",
            format_size(self.destination_size)
        ));
        out.push_str("Comparison Results\n");
        out.push_str("--------------------\n");
        out.push_str(&format!("Added Files: {:?}\n", self.diff.added));
        out.push_str(&format!("Removed Files: {:?}\n", self.diff.removed));
        out.push_str(&format!("Changed Files: {:?}\n", self.diff.changed));
        out
    }
}

/// Report path for an original root: `<out_dir>/<basename>.out`.
pub fn report_path(out_dir: &Path, original_root: &Path) -> PathBuf {
    let basename = original_root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "comparison".to_string());
    out_dir.join(format!("{}.out", basename))
}

/// Write the report, creating the output directory if absent.
pub fn write_report(path: &Path, report: &Report<'_>) -> Result<(), CompareError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(CompareError::Report)?;
    }
    fs::write(path, report.render()).map_err(CompareError::Report)
}
