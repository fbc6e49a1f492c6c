//! End-to-end diff scenarios over real directory trees.

use dirdiff::diff::diff;
use dirdiff::snapshot::SnapshotBuilder;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn build(root: &Path) -> dirdiff::snapshot::Snapshot {
    SnapshotBuilder::new(root).build().unwrap()
}

#[test]
fn test_changed_and_added_files_detected() {
    let temp_dir = TempDir::new().unwrap();
    let original = temp_dir.path().join("original");
    let destination = temp_dir.path().join("destination");
    fs::create_dir(&original).unwrap();
    fs::create_dir(&destination).unwrap();

    fs::write(original.join("a.txt"), "hello").unwrap();
    fs::write(original.join("b.txt"), "world").unwrap();
    fs::write(destination.join("a.txt"), "hello").unwrap();
    fs::write(destination.join("b.txt"), "WORLD").unwrap();
    fs::write(destination.join("c.txt"), "new").unwrap();

    let result = diff(&build(&original), &build(&destination));
    assert_eq!(result.added, vec!["c.txt"]);
    assert!(result.removed.is_empty());
    assert_eq!(result.changed, vec!["b.txt"]);
}

#[test]
fn test_ignored_extension_never_reported_removed() {
    let temp_dir = TempDir::new().unwrap();
    let original = temp_dir.path().join("original");
    let destination = temp_dir.path().join("destination");
    fs::create_dir(&original).unwrap();
    fs::create_dir(&destination).unwrap();

    fs::write(original.join("x.tmp"), "scratch").unwrap();
    fs::write(original.join("y.txt"), "keep").unwrap();
    fs::write(destination.join("y.txt"), "keep").unwrap();

    let result = diff(&build(&original), &build(&destination));
    assert!(result.added.is_empty());
    assert!(result.removed.is_empty());
    assert!(result.changed.is_empty());
}

#[test]
fn test_both_roots_empty() {
    let temp_dir = TempDir::new().unwrap();
    let original = temp_dir.path().join("original");
    let destination = temp_dir.path().join("destination");
    fs::create_dir(&original).unwrap();
    fs::create_dir(&destination).unwrap();

    let result = diff(&build(&original), &build(&destination));
    assert!(result.is_empty());
}

#[test]
fn test_identical_empty_files_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    let original = temp_dir.path().join("original");
    let destination = temp_dir.path().join("destination");
    fs::create_dir(&original).unwrap();
    fs::create_dir(&destination).unwrap();

    fs::write(original.join("empty.dat"), "").unwrap();
    fs::write(destination.join("empty.dat"), "").unwrap();

    let result = diff(&build(&original), &build(&destination));
    assert!(result.is_empty());
}

#[test]
fn test_nested_paths_compare_across_roots() {
    let temp_dir = TempDir::new().unwrap();
    let original = temp_dir.path().join("original");
    let destination = temp_dir.path().join("destination");
    fs::create_dir_all(original.join("docs").join("notes")).unwrap();
    fs::create_dir_all(destination.join("docs").join("notes")).unwrap();

    fs::write(original.join("docs").join("notes").join("n1.md"), "v1").unwrap();
    fs::write(destination.join("docs").join("notes").join("n1.md"), "v2").unwrap();

    let result = diff(&build(&original), &build(&destination));
    assert_eq!(result.changed, vec!["docs/notes/n1.md"]);
}
