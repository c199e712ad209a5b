//! Error types for the pathwalk resolver.
//!
//! Resolution itself never errors: absence is the sole failure signal and is
//! carried as `Option` through the resolver and the `NodeSource` boundary.
//! These types cover the phases around it: literal loading and host commands.

use thiserror::Error;

/// Tree materialization and literal loading errors
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("Invalid literal: {0}")]
    InvalidLiteral(String),

    #[error("Literal I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Host-facing errors for CLI commands and boundary consumers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}: No such file or directory")]
    NotFound(String),

    #[error("{0}: Is a directory")]
    IsADirectory(String),

    #[error("Tree error: {0}")]
    TreeError(#[from] TreeError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
