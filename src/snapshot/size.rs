//! Best-effort recursive size totals.

use std::path::Path;
use walkdir::WalkDir;

/// Total bytes of every regular file under `root`.
///
/// Reports raw footprint, not comparison scope: the ignore policy is
/// deliberately not applied. Entries that vanish or cannot be statted
/// contribute 0 instead of aborting; size totals are informational, unlike
/// snapshot builds.
pub fn total_size(root: &Path) -> u64 {
    let mut total = 0u64;
    for entry in WalkDir::new(root) {
        let Ok(entry) = entry else { continue };
        if !entry.file_type().is_file() {
            continue;
        }
        if let Ok(metadata) = entry.metadata() {
            total += metadata.len();
        }
    }
    total
}
