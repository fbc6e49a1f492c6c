//! Deterministic filesystem walker yielding regular files under a root.

use crate::error::ScanError;
use crate::ignore::IgnorePolicy;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// A regular file discovered under a scan root.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Path relative to the root, `/`-separated on every platform so keys
    /// compare across roots and operating systems.
    pub relative: String,
    /// Absolute (root-joined) path for opening the file.
    pub absolute: PathBuf,
}

/// Walker configuration.
#[derive(Debug, Clone, Copy)]
pub struct WalkerConfig {
    /// Policy deciding which file names are excluded from the walk.
    pub ignore: IgnorePolicy,
    /// Skip entries the walk cannot read instead of failing the scan.
    /// Skipped entries are counted and logged at WARN.
    pub skip_unreadable: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            ignore: IgnorePolicy::default(),
            skip_unreadable: true,
        }
    }
}

/// Recursive walker over one root directory.
///
/// Within each directory entries are visited in lexicographic file-name
/// order; order across directories follows the depth-first traversal.
/// Symlinks are not followed and non-regular files are never yielded.
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a walker with the default configuration.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration.
    pub fn with_config(root: impl Into<PathBuf>, config: WalkerConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Lazily enumerate eligible regular files under the root.
    pub fn files(&self) -> Files {
        Files {
            root: self.root.clone(),
            config: self.config,
            inner: WalkDir::new(&self.root).sort_by_file_name().into_iter(),
            skipped: 0,
        }
    }
}

/// Lazy, finite, non-restartable iterator produced by [`Walker::files`].
pub struct Files {
    root: PathBuf,
    config: WalkerConfig,
    inner: walkdir::IntoIter,
    skipped: u64,
}

impl Files {
    /// Entries skipped so far because enumeration could not read them.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }
}

impl Iterator for Files {
    type Item = Result<FileEntry, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    if self.config.skip_unreadable {
                        self.skipped += 1;
                        warn!("Skipping unreadable entry: {}", e);
                        continue;
                    }
                    return Some(Err(ScanError::Walk(e.to_string())));
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            if self.config.ignore.should_ignore(&name) {
                continue;
            }

            let relative = match relative_key(&self.root, entry.path()) {
                Ok(key) => key,
                Err(e) => return Some(Err(e)),
            };
            return Some(Ok(FileEntry {
                relative,
                absolute: entry.into_path(),
            }));
        }
    }
}

/// Root-relative key with `/` separators.
fn relative_key(root: &Path, path: &Path) -> Result<String, ScanError> {
    let relative = path.strip_prefix(root).map_err(|_| {
        ScanError::InvalidPath(format!(
            "{} is not under {}",
            path.display(),
            root.display()
        ))
    })?;

    let mut key = String::new();
    for component in relative.components() {
        if !key.is_empty() {
            key.push('/');
        }
        key.push_str(&component.as_os_str().to_string_lossy());
    }
    Ok(key)
}
