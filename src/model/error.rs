//! Error types for paralist.
//!
//! Errors follow the Railway-Oriented Programming pattern: each layer has its own
//! `thiserror` enum and converts into [`AppError`] through `From`, so `main`
//! can use `?` end to end.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - top-level error returned from `main`
//!   - [`ConfigError`] - config file discovery, reading, parsing, validation
//!   - [`LoggingError`] - tracing subscriber setup
//!   - [`TuiError`] - terminal I/O
//!
//! Invalid entry text is not an error at this level. Submissions that fail
//! validation are rejected silently by the list manager (see
//! [`crate::model::EntryRejection`]).

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::view::TuiError;
use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes.
///
/// Every variant is fatal: the process restores the terminal (if it was
/// set up) and exits with the error printed to stderr.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Log file or subscriber could not be set up.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Tui(#[from] TuiError),
}
