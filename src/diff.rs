//! Set-algebra comparison of two snapshots.

use crate::snapshot::Snapshot;
use serde::Serialize;

/// Added/removed/changed partition between two snapshots.
///
/// The three lists are disjoint and lexicographically sorted; unchanged
/// paths (same key, same digest) are implicit and never reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffResult {
    /// Paths present only in the destination snapshot.
    pub added: Vec<String>,
    /// Paths present only in the original snapshot.
    pub removed: Vec<String>,
    /// Paths present in both whose digests differ.
    pub changed: Vec<String>,
}

impl DiffResult {
    /// True when the two snapshots were identical.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}

/// Compare `original` against `destination`.
///
/// Pure function, no I/O. Runs in O(|original| + |destination|) using map
/// membership tests. Sorted output makes reports byte-for-byte reproducible
/// given the same two snapshots.
pub fn diff(original: &Snapshot, destination: &Snapshot) -> DiffResult {
    let mut added = Vec::new();
    let mut removed = Vec::new();
    let mut changed = Vec::new();

    for path in destination.paths() {
        if !original.contains(path) {
            added.push(path.to_string());
        }
    }
    for (path, digest) in original.iter() {
        match destination.digest(path) {
            None => removed.push(path.to_string()),
            Some(other) if other != digest => changed.push(path.to_string()),
            Some(_) => {}
        }
    }

    added.sort_unstable();
    removed.sort_unstable();
    changed.sort_unstable();

    DiffResult {
        added,
        removed,
        changed,
    }
}
