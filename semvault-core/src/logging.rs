//! Logging configuration with rotation support
//!
//! # Example
//!
//! ```rust,no_run
//! use semvault_core::logging::init_logging;
//!
//! init_logging("logs", "semvault.log", "info").unwrap();
//! ```

use crate::error::Result;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging with daily file rotation
///
/// - `directory`: Directory to store logs
/// - `filename_prefix`: Prefix for log files (e.g. "semvault.log")
/// - `level`: Default log level (e.g. "info", "debug")
pub fn init_logging(directory: &str, filename_prefix: &str, level: &str) -> Result<()> {
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(filename_prefix)
        .build(directory)
        .map_err(|e| {
            crate::error::Error::Internal(format!("Failed to create log appender: {}", e))
        })?;

    // Stdout: human readable
    let stdout_layer = fmt::layer().with_target(false).compact();

    // File: full text without ANSI escapes
    let file_layer = fmt::layer().with_writer(file_appender).with_ansi(false);

    // Allow RUST_LOG env var to override, otherwise use default
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| crate::error::Error::Internal(format!("Failed to init tracing: {}", e)))?;

    Ok(())
}
