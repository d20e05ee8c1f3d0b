use thiserror::Error;

use crate::domain::Component;

/// Unified error type for dotver operations
#[derive(Error, Debug)]
pub enum DotverError {
    #[error("Incorrect version: '{input}' - expected MAJOR.MINOR.PATCH")]
    IncorrectVersion { input: String },

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Out of range: {component} of {version} cannot be adjusted by {delta}")]
    OutOfRange {
        component: Component,
        version: String,
        delta: i64,
    },

    #[error("Unknown version component: '{0}' - expected major, minor or patch")]
    UnknownComponent(String),

    #[error("Expression error: {0}")]
    Expression(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in dotver
pub type Result<T> = std::result::Result<T, DotverError>;

impl DotverError {
    /// Create an incorrect-version error for the offending input
    pub fn incorrect_version(input: impl Into<String>) -> Self {
        DotverError::IncorrectVersion {
            input: input.into(),
        }
    }

    /// Create an invalid-operation error with context
    pub fn invalid_operation(msg: impl Into<String>) -> Self {
        DotverError::InvalidOperation(msg.into())
    }

    /// Create an expression error with context
    pub fn expression(msg: impl Into<String>) -> Self {
        DotverError::Expression(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        DotverError::Tag(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        DotverError::Config(msg.into())
    }
}
