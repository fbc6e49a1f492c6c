//! One-shot comparison runs: scan both roots, diff, write the report.

use crate::config::CompareConfig;
use crate::diff::{self, DiffResult};
use crate::error::{CompareError, ScanError};
use crate::progress::Spinner;
use crate::report::{self, Report};
use crate::snapshot::{total_size, Algorithm, Snapshot, SnapshotBuilder, WalkerConfig};
use chrono::Local;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{info, instrument};

/// Default directory for report files.
pub const DEFAULT_OUT_DIR: &str = "out";

/// Everything produced by a completed comparison run.
#[derive(Debug)]
pub struct Comparison {
    pub diff: DiffResult,
    pub original_size: u64,
    pub destination_size: u64,
    pub elapsed: Duration,
    pub report_path: PathBuf,
}

/// Run a comparison, writing the report under [`DEFAULT_OUT_DIR`].
pub fn run(config: &CompareConfig) -> Result<Comparison, CompareError> {
    run_with_out_dir(config, Path::new(DEFAULT_OUT_DIR))
}

/// Run a comparison, writing the report under `out_dir`.
///
/// Both roots are validated up front; the two per-root scans (size total
/// plus snapshot build) then run concurrently, and the diff runs once both
/// snapshots are complete. Nothing is written unless the whole run
/// succeeds.
#[instrument(skip_all, fields(
    original = %config.original.display(),
    destination = %config.destination.display(),
))]
pub fn run_with_out_dir(
    config: &CompareConfig,
    out_dir: &Path,
) -> Result<Comparison, CompareError> {
    if !config.original.is_dir() {
        return Err(CompareError::PathNotFound(config.original.clone()));
    }
    if !config.destination.is_dir() {
        return Err(CompareError::PathNotFound(config.destination.clone()));
    }

    let timestamp = Local::now();
    let start = Instant::now();
    let spinner = Spinner::start("Processing");

    let walker_config = WalkerConfig {
        skip_unreadable: config.skip_unreadable,
        ..WalkerConfig::default()
    };

    // The scans share no mutable state; one thread per root.
    let (original_scan, destination_scan) = thread::scope(|scope| {
        let original = scope.spawn(|| scan_root(&config.original, config.algorithm, walker_config));
        let destination =
            scope.spawn(|| scan_root(&config.destination, config.algorithm, walker_config));
        (original.join(), destination.join())
    });
    let (original_size, original_snapshot) =
        original_scan.unwrap_or_else(|panic| std::panic::resume_unwind(panic))?;
    let (destination_size, destination_snapshot) =
        destination_scan.unwrap_or_else(|panic| std::panic::resume_unwind(panic))?;

    let result = diff::diff(&original_snapshot, &destination_snapshot);
    spinner.finish("Processing complete!");
    let elapsed = start.elapsed();

    let report_path = report::report_path(out_dir, &config.original);
    let report = Report {
        timestamp,
        elapsed,
        original_size,
        destination_size,
        diff: &result,
    };
    report::write_report(&report_path, &report)?;

    info!(
        added = result.added.len(),
        removed = result.removed.len(),
        changed = result.changed.len(),
        duration_ms = elapsed.as_millis() as u64,
        report = %report_path.display(),
        "Comparison completed"
    );

    Ok(Comparison {
        diff: result,
        original_size,
        destination_size,
        elapsed,
        report_path,
    })
}

fn scan_root(
    root: &Path,
    algorithm: Algorithm,
    walker_config: WalkerConfig,
) -> Result<(u64, Snapshot), ScanError> {
    let size = total_size(root);
    let snapshot = SnapshotBuilder::new(root)
        .with_algorithm(algorithm)
        .with_walker_config(walker_config)
        .build()?;
    Ok((size, snapshot))
}
