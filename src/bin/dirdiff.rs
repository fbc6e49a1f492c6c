//! dirdiff CLI binary.
//!
//! Reads a run configuration, compares the two directory trees it names,
//! and writes a plain-text report.

use clap::Parser;
use dirdiff::cli::{self, Cli};
use dirdiff::compare;
use dirdiff::config::CompareConfig;
use dirdiff::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    // A missing config argument is a usage request, not a failure.
    let Some(config_path) = cli.config.as_deref() else {
        println!("Usage: dirdiff <config-file>");
        return;
    };

    info!("dirdiff starting");

    let config = match CompareConfig::load(config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load config: {}", e);
            eprintln!("{}", cli::map_error(&e));
            process::exit(1);
        }
    };

    println!(
        "Comparing folders:\nOriginal: {}\nDestination: {}",
        config.original.display(),
        config.destination.display()
    );

    match compare::run_with_out_dir(&config, &cli.out_dir) {
        Ok(comparison) => {
            info!("Comparison completed successfully");
            match cli::format_summary(&comparison, &cli.format) {
                Ok(summary) => println!("{}", summary),
                Err(e) => {
                    eprintln!("{}", cli::map_error(&e));
                    process::exit(1);
                }
            }
        }
        Err(e) => {
            error!("Comparison failed: {}", e);
            eprintln!("{}", cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI arguments.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = LoggingConfig::default();

    // Without --verbose, logging is off entirely.
    if !cli.verbose {
        config.level = "off".to_string();
        return config;
    }

    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    config
}
