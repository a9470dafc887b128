//! Application error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// Terminal or file system failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file could not be parsed or serialized.
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// No home directory to resolve the default configuration path against.
    #[error("Could not determine the home directory")]
    NoHomeDirectory,

    /// The log subscriber could not be installed.
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Failures reported by a charting backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    /// The container has no drawable area.
    #[error("chart container has zero area")]
    ZeroArea,

    #[error("chart construction failed: {0}")]
    Construction(String),

    #[error("chart resize failed: {0}")]
    Resize(String),

    /// The chart was already removed.
    #[error("chart has been disposed")]
    Disposed,
}
