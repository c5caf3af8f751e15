//! Error types.

use thiserror::Error;

/// Operator-facing failures: configuration, payload loading, CLI input.
///
/// The viewer core itself never fails; these are raised by the layers that
/// read files and parse configuration around it.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Payload error: {0}")]
    PayloadError(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

/// Outcome of a selection request that did not change state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The path does not name an existing file node.
    #[error("Path not found: {0}")]
    NotFound(String),
}
