//! Snapshot construction: walking, hashing, and sizing one root.

pub mod builder;
pub mod hasher;
pub mod size;
pub mod walker;

pub use builder::{Snapshot, SnapshotBuilder};
pub use hasher::{hash_file, Algorithm};
pub use size::total_size;
pub use walker::{FileEntry, Files, Walker, WalkerConfig};
