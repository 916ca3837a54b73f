//! Application error taxonomy.
//!
//! The form core itself defines no errors by design: malformed control
//! values are dropped and bad coordinates decode to `None`. Failures only
//! exist at the edges of the process, and those compose here via
//! `thiserror` and `From` so `?` works throughout the shell.

use thiserror::Error;

/// Top-level application error returned from the entry point.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file could not be read or parsed.
    ///
    /// A missing config file is not an error (defaults apply); this fires
    /// only when a file exists but is unreadable or contains invalid TOML.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing subscriber setup failed.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal setup, rendering, or teardown failed.
    ///
    /// Without a working terminal the form cannot run, so these are fatal
    /// and propagate after raw mode has been restored.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
