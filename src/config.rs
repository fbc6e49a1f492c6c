//! Line-oriented `key=value` run configuration.

use crate::error::CompareError;
use crate::snapshot::Algorithm;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for one comparison run.
#[derive(Debug, Clone)]
pub struct CompareConfig {
    /// Root of the original snapshot.
    pub original: PathBuf,
    /// Root of the destination snapshot.
    pub destination: PathBuf,
    /// Digest algorithm for both snapshots.
    pub algorithm: Algorithm,
    /// Skip unreadable entries during enumeration instead of failing.
    pub skip_unreadable: bool,
}

impl CompareConfig {
    /// Load configuration from a file.
    ///
    /// Recognized keys: `original=` and `destination=` (required, optional
    /// surrounding double quotes stripped), `algorithm=` (sha256 or blake3)
    /// and `skip_unreadable=` (true or false). Blank lines and `#` comments
    /// are tolerated; unknown keys are ignored.
    pub fn load(path: &Path) -> Result<Self, CompareError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CompareError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::parse(&contents)
    }

    /// Parse configuration from file contents.
    pub fn parse(contents: &str) -> Result<Self, CompareError> {
        let mut original = None;
        let mut destination = None;
        let mut algorithm = Algorithm::default();
        let mut skip_unreadable = true;

        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim().trim_matches('"');
            match key.trim() {
                "original" => original = Some(PathBuf::from(value)),
                "destination" => destination = Some(PathBuf::from(value)),
                "algorithm" => algorithm = value.parse()?,
                "skip_unreadable" => {
                    skip_unreadable = value.parse().map_err(|_| {
                        CompareError::Config(format!("Invalid skip_unreadable value: {}", value))
                    })?;
                }
                _ => {}
            }
        }

        let original = original
            .ok_or_else(|| CompareError::Config("Missing required key: original".to_string()))?;
        let destination = destination
            .ok_or_else(|| CompareError::Config("Missing required key: destination".to_string()))?;

        Ok(Self {
            original,
            destination,
            algorithm,
            skip_unreadable,
        })
    }
}
