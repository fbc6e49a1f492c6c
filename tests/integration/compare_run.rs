//! Full comparison runs driven through the config file surface.

use anyhow::Result;
use dirdiff::compare;
use dirdiff::config::CompareConfig;
use dirdiff::error::CompareError;
use dirdiff::snapshot::Algorithm;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_run_from_config_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let original = temp_dir.path().join("photos");
    let destination = temp_dir.path().join("photos-backup");
    fs::create_dir(&original)?;
    fs::create_dir(&destination)?;

    fs::write(original.join("a.txt"), "hello")?;
    fs::write(original.join("b.txt"), "world")?;
    fs::write(destination.join("a.txt"), "hello")?;
    fs::write(destination.join("b.txt"), "WORLD")?;
    fs::write(destination.join("c.txt"), "new")?;

    let config_file = temp_dir.path().join("run.conf");
    fs::write(
        &config_file,
        format!(
            "original={}\ndestination={}\n",
            original.display(),
            destination.display()
        ),
    )?;

    let config = CompareConfig::load(&config_file)?;
    let out_dir = temp_dir.path().join("out");
    let comparison = compare::run_with_out_dir(&config, &out_dir)?;

    assert_eq!(comparison.diff.added, vec!["c.txt"]);
    assert!(comparison.diff.removed.is_empty());
    assert_eq!(comparison.diff.changed, vec!["b.txt"]);
    assert_eq!(comparison.report_path, out_dir.join("photos.out"));
    Ok(())
}

#[test]
fn test_run_with_quoted_paths_and_algorithm() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let original = temp_dir.path().join("src");
    let destination = temp_dir.path().join("dst");
    fs::create_dir(&original)?;
    fs::create_dir(&destination)?;
    fs::write(original.join("f.txt"), "data")?;
    fs::write(destination.join("f.txt"), "data")?;

    let config_file = temp_dir.path().join("run.conf");
    fs::write(
        &config_file,
        format!(
            "original=\"{}\"\ndestination=\"{}\"\nalgorithm=blake3\n",
            original.display(),
            destination.display()
        ),
    )?;

    let config = CompareConfig::load(&config_file)?;
    assert_eq!(config.algorithm, Algorithm::Blake3);

    let comparison = compare::run_with_out_dir(&config, &temp_dir.path().join("out"))?;
    assert!(comparison.diff.is_empty());
    Ok(())
}

#[test]
fn test_run_missing_root_reports_path_not_found() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let destination = temp_dir.path().join("dst");
    fs::create_dir(&destination)?;

    let config_file = temp_dir.path().join("run.conf");
    fs::write(
        &config_file,
        format!(
            "original={}\ndestination={}\n",
            temp_dir.path().join("nope").display(),
            destination.display()
        ),
    )?;

    let config = CompareConfig::load(&config_file)?;
    let out_dir = temp_dir.path().join("out");
    let err = compare::run_with_out_dir(&config, &out_dir).unwrap_err();

    assert!(matches!(err, CompareError::PathNotFound(_)));
    // No report is written for a failed run.
    assert!(!out_dir.exists());
    Ok(())
}

#[test]
fn test_run_identical_roots_after_copy() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let original = temp_dir.path().join("data");
    let destination = temp_dir.path().join("mirror");
    fs::create_dir_all(original.join("nested"))?;
    fs::create_dir_all(destination.join("nested"))?;

    for root in [&original, &destination] {
        fs::write(root.join("top.bin"), [7u8; 9000])?;
        fs::write(root.join("nested").join("deep.bin"), [1u8; 100])?;
    }

    let config = CompareConfig {
        original: original.clone(),
        destination: destination.clone(),
        algorithm: Algorithm::default(),
        skip_unreadable: true,
    };
    let comparison = compare::run_with_out_dir(&config, &temp_dir.path().join("out"))?;

    assert!(comparison.diff.is_empty());
    assert_eq!(comparison.original_size, 9100);
    assert_eq!(comparison.destination_size, 9100);
    Ok(())
}
