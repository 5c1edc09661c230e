//! Error types for famboard.

use thiserror::Error;

/// Errors that can occur in famboard operations.
#[derive(Error, Debug)]
pub enum FamboardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid time '{0}'. Expected HH:MM")]
    InvalidTime(String),

    #[error("{0}")]
    Validation(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Family member not found: {0}")]
    MemberNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for FamboardError {
    fn from(e: serde_json::Error) -> Self {
        FamboardError::Serialization(e.to_string())
    }
}

/// Result type alias for famboard operations.
pub type FamboardResult<T> = Result<T, FamboardError>;
