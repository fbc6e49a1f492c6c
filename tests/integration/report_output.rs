//! Report file contents produced by a full run.

use anyhow::Result;
use dirdiff::compare;
use dirdiff::config::CompareConfig;
use dirdiff::snapshot::Algorithm;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_report_file_layout() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let original = temp_dir.path().join("archive");
    let destination = temp_dir.path().join("restore");
    fs::create_dir(&original)?;
    fs::create_dir(&destination)?;

    fs::write(original.join("kept.txt"), "same")?;
    fs::write(original.join("dropped.txt"), "old")?;
    fs::write(destination.join("kept.txt"), "same")?;
    fs::write(destination.join("extra.txt"), "new")?;

    let config = CompareConfig {
        original: original.clone(),
        destination: destination.clone(),
        algorithm: Algorithm::default(),
        skip_unreadable: true,
    };
    let out_dir = temp_dir.path().join("out");
    let comparison = compare::run_with_out_dir(&config, &out_dir)?;

    let text = fs::read_to_string(&comparison.report_path)?;
    assert!(text.starts_with("Run at "));
    assert!(text.contains("Time to complete - "));
    assert!(text.contains("Size\n--------\n"));
    assert!(text.contains("Origin Folder: 7B\n"));
    assert!(text.contains("Destination Folder: 7B\n"));
    assert!(text.contains("Comparison Results\n--------------------\n"));
    assert!(text.contains("Added Files: [\"extra.txt\"]\n"));
    assert!(text.contains("Removed Files: [\"dropped.txt\"]\n"));
    assert!(text.contains("Changed Files: []\n"));
    Ok(())
}

#[test]
fn test_report_reproducible_for_same_snapshots() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let original = temp_dir.path().join("a");
    let destination = temp_dir.path().join("b");
    fs::create_dir(&original)?;
    fs::create_dir(&destination)?;

    fs::write(original.join("1.txt"), "one")?;
    fs::write(destination.join("2.txt"), "two")?;

    let config = CompareConfig {
        original: original.clone(),
        destination: destination.clone(),
        algorithm: Algorithm::default(),
        skip_unreadable: true,
    };

    let first = compare::run_with_out_dir(&config, &temp_dir.path().join("out1"))?;
    let second = compare::run_with_out_dir(&config, &temp_dir.path().join("out2"))?;

    // Timestamp and duration lines vary between runs; the diff section
    // must be byte-identical.
    let diff_section = |path: &std::path::Path| -> Result<String> {
        let text = fs::read_to_string(path)?;
        Ok(text
            .split_once("Comparison Results")
            .map(|(_, tail)| tail.to_string())
            .unwrap_or_default())
    };
    assert_eq!(
        diff_section(&first.report_path)?,
        diff_section(&second.report_path)?
    );
    Ok(())
}

#[test]
fn test_out_directory_created_if_absent() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let original = temp_dir.path().join("o");
    let destination = temp_dir.path().join("d");
    fs::create_dir(&original)?;
    fs::create_dir(&destination)?;

    let config = CompareConfig {
        original,
        destination,
        algorithm: Algorithm::default(),
        skip_unreadable: true,
    };
    let out_dir = temp_dir.path().join("deeply").join("nested").join("out");
    let comparison = compare::run_with_out_dir(&config, &out_dir)?;

    assert!(out_dir.is_dir());
    assert!(comparison.report_path.is_file());
    Ok(())
}
