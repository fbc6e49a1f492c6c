//! Dirdiff: content-based directory tree comparison
//!
//! Builds per-root snapshots mapping relative paths to content digests,
//! computes the added/removed/changed partition between two roots, and
//! writes a plain-text report. Intended for backup verification and sync
//! audits: differences are decided by content, not timestamps or sizes.

pub mod cli;
pub mod compare;
pub mod config;
pub mod diff;
pub mod error;
pub mod ignore;
pub mod logging;
pub mod progress;
pub mod report;
pub mod snapshot;
