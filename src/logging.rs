//! Structured logging setup on top of the `tracing` crate.

use crate::error::CompareError;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off.
    pub level: String,
    /// Output format: json, text.
    pub format: String,
    /// Enable colored output (text format only).
    pub color: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
            color: true,
        }
    }
}

/// Initialize the logging system.
///
/// The `DIRDIFF_LOG` environment variable takes priority over the
/// configured level and accepts full `EnvFilter` directives.
pub fn init_logging(config: &LoggingConfig) -> Result<(), CompareError> {
    let filter = match EnvFilter::try_from_env("DIRDIFF_LOG") {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(&config.level),
    };

    let base_subscriber = Registry::default().with(filter);

    match config.format.as_str() {
        "json" => {
            base_subscriber
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_writer(std::io::stdout),
                )
                .init();
        }
        "text" => {
            base_subscriber
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_ansi(config.color)
                        .with_writer(std::io::stdout),
                )
                .init();
        }
        other => {
            return Err(CompareError::Config(format!(
                "Invalid log format: {} (must be 'json' or 'text')",
                other
            )));
        }
    }

    Ok(())
}
