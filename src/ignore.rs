//! Ignore policy for comparison scans.
//!
//! The two sets below are design constants shared with the original backup
//! tooling; re-implementations must match them exactly or snapshots become
//! incomparable across tools. Names are case-sensitive exact matches,
//! suffixes match the end of the file name.

/// File names excluded from snapshots (OS metadata and VCS artifacts).
pub const IGNORED_NAMES: &[&str] = &[
    ".DS_Store",
    "Thumbs.db",
    "desktop.ini",
    ".git",
    ".gitignore",
    ".gitattributes",
];

/// File-name suffixes excluded from snapshots (temp, backup, and swap files).
pub const IGNORED_SUFFIXES: &[&str] = &[".tmp", ".bak", ".swp", ".swo", ".old", ".orig"];

/// Immutable name/suffix exclusion sets applied by the walker.
///
/// Constructed from static slices so tests can substitute alternate
/// policies; `Default` yields the documented constants.
#[derive(Debug, Clone, Copy)]
pub struct IgnorePolicy {
    names: &'static [&'static str],
    suffixes: &'static [&'static str],
}

impl Default for IgnorePolicy {
    fn default() -> Self {
        Self::new(IGNORED_NAMES, IGNORED_SUFFIXES)
    }
}

impl IgnorePolicy {
    /// Create a policy from explicit name and suffix sets.
    pub fn new(names: &'static [&'static str], suffixes: &'static [&'static str]) -> Self {
        Self { names, suffixes }
    }

    /// A policy that ignores nothing.
    pub fn empty() -> Self {
        Self::new(&[], &[])
    }

    /// True iff `file_name` exactly equals an ignored name or ends with an
    /// ignored suffix.
    pub fn should_ignore(&self, file_name: &str) -> bool {
        self.names.contains(&file_name)
            || self.suffixes.iter().any(|suffix| file_name.ends_with(suffix))
    }
}
