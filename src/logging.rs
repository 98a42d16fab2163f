//! File logging.
//!
//! The TUI owns stdout, so events are written to a daily rolling file under
//! `logs/` instead.

use anyhow::{anyhow, Result};
use tracing_appender::rolling::Rotation;
use tracing_subscriber::EnvFilter;

use crate::config::{LoggingConfig, Paths};

/// Prefix of the rolling log file names.
pub const LOG_PREFIX: &str = "techfocus";

/// Filter directive for this crate at `level`.
#[must_use]
pub fn directive(level: &str) -> String {
    format!("{}={level}", env!("CARGO_PKG_NAME").replace('-', "_"))
}

/// Install the global subscriber. `RUST_LOG` takes precedence over the config.
///
/// # Errors
///
/// Returns an error if the log directory cannot be used or a subscriber is
/// already installed.
pub fn enable_logging(paths: &Paths, config: &LoggingConfig) -> Result<()> {
    let appender = tracing_appender::rolling::Builder::new()
        .rotation(Rotation::DAILY)
        .max_log_files(5)
        .filename_prefix(LOG_PREFIX)
        .filename_suffix("log")
        .build(&paths.logs)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive(&config.level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}
