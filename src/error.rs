//! Error types for the directory comparison tool.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while scanning a single root (walking, hashing).
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to walk directory: {0}")]
    Walk(String),

    #[error("Failed to hash {path:?}: {source}")]
    Hash {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Scan I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level errors for a comparison run.
#[derive(Debug, Error)]
pub enum CompareError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Directory does not exist: {0:?}")]
    PathNotFound(PathBuf),

    #[error("Unknown hash algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Failed to write report: {0}")]
    Report(#[source] std::io::Error),

    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}
