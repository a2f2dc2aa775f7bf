//! Structured log output for the command-line tool

use crate::io::configuration::DEFAULT_LOG_FILTER;
use crate::io::error::{PuzzleError, Result};
use tracing_subscriber::EnvFilter;

/// Build the log filter from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`]
pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install a stderr formatter for `tracing` events
///
/// Quiet runs only report warnings and errors.
///
/// # Errors
///
/// Returns [`PuzzleError::InvalidParameter`] if a global subscriber is
/// already installed
pub fn init_logging(quiet: bool) -> Result<()> {
    let filter = if quiet {
        EnvFilter::new("warn")
    } else {
        log_filter()
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| PuzzleError::InvalidParameter {
            parameter: "logging",
            value: String::new(),
            reason: err.to_string(),
        })
}
