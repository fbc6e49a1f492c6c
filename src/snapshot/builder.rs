//! Snapshot builder driving the walker and hasher for one root.

use crate::error::ScanError;
use crate::snapshot::hasher::{self, Algorithm};
use crate::snapshot::walker::{Walker, WalkerConfig};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, instrument, warn};

/// Relative-path to content-digest mapping for one root at one point in
/// time. Immutable once built; lives only for the duration of one
/// comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    entries: HashMap<String, String>,
}

impl Snapshot {
    /// Build a snapshot directly from `(relative_path, digest)` pairs.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Digest recorded for a relative path, if present.
    pub fn digest(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Relative paths in the snapshot, in arbitrary order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(relative_path, digest)` pairs, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(path, digest)| (path.as_str(), digest.as_str()))
    }

    fn insert(&mut self, path: String, digest: String) {
        self.entries.insert(path, digest);
    }
}

impl FromIterator<(String, String)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

/// Builds a [`Snapshot`] by walking a root and hashing every eligible file.
pub struct SnapshotBuilder {
    root: PathBuf,
    algorithm: Algorithm,
    walker_config: WalkerConfig,
}

impl SnapshotBuilder {
    /// Create a builder for the given root with default settings.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            algorithm: Algorithm::default(),
            walker_config: WalkerConfig::default(),
        }
    }

    /// Set the digest algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set walker config (ignore policy, unreadable-entry handling).
    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = config;
        self
    }

    /// Walk the root and hash every eligible file into a snapshot.
    ///
    /// A file that disappears or becomes unreadable between enumeration and
    /// hashing aborts the whole build: a silently incomplete snapshot would
    /// misreport unchanged files as removed.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn build(&self) -> Result<Snapshot, ScanError> {
        let start = Instant::now();
        let walker = Walker::with_config(self.root.clone(), self.walker_config);

        let mut snapshot = Snapshot::default();
        let mut files = walker.files();
        for entry in files.by_ref() {
            let entry = entry?;
            let digest = hasher::hash_file(&entry.absolute, self.algorithm)?;
            snapshot.insert(entry.relative, digest);
        }
        if files.skipped() > 0 {
            warn!(
                skipped = files.skipped(),
                "Unreadable entries were skipped during enumeration"
            );
        }

        debug!(
            file_count = snapshot.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Snapshot build completed"
        );
        Ok(snapshot)
    }
}
