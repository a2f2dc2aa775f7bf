//! Input/output operations and error handling
//!
//! This module contains:
//! - Command-line parsing and the run driver
//! - CSV export of solution and problem views
//! - Error types, constants, logging and progress display

/// Command-line interface and run orchestration
pub mod cli;
/// Generation constants and defaults
pub mod configuration;
/// Error types and path context
pub mod error;
/// Solution/problem views and CSV writing
pub mod export;
/// Structured logging setup
pub mod logging;
/// Phase progress display
pub mod progress;
