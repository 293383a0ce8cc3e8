//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A string is not a well-formed `$VARIABLE` reference.
    #[error("provided value not an $ENV_VAR: {0}")]
    InvalidReference(String),

    /// The config document is not a JSON object.
    #[error("invalid config format: {0}")]
    InvalidConfigFormat(String),

    /// A config field holds a value of the wrong type.
    #[error("invalid field type: {0}")]
    InvalidFieldType(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
