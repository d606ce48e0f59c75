//! Logging setup for the CLI
//!
//! Installs a `tracing-subscriber` registry with a human-readable layer on
//! stderr and, optionally, a second plain-text layer appending to a log file.
//! `RUST_LOG` takes precedence over the configured level.
//!
//! Library code never calls into this module; it reports through a
//! [`TranscodeObserver`](crate::core::TranscodeObserver) instead.

use crate::types::TranscodeError;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Level filter used when RUST_LOG is not set
    pub level: String,
    /// Optional log file, appended to
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// Build the level filter for a configuration
pub fn create_env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Initialize the global logging system
///
/// # Errors
///
/// Fails if the log file cannot be opened or a global subscriber is
/// already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), TranscodeError> {
    let file_layer = match &config.file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(create_env_filter(config))
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .try_init()
        .map_err(|e| TranscodeError::logging(e.to_string()))?;

    tracing::debug!(config = ?config, "Logging system initialized");
    Ok(())
}
