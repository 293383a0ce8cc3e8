//! Application error types

use localenv_domain::DomainError;
use thiserror::Error;

use crate::ports::{CommandError, ConfigError};

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The input is not a well-formed `$VARIABLE` reference.
    #[error("provided value not an $ENV_VAR: {0}")]
    InvalidReference(String),

    /// The shell produced no value for a single-name expansion.
    #[error("no value found for env var: {0}")]
    NotFound(String),

    /// The host asked to expand an empty token.
    #[error("no $ENV_VAR provided")]
    MissingReference,

    /// The config file is not parseable as a JSON object.
    #[error("invalid config format: {0}")]
    InvalidConfigFormat(String),

    /// The config file holds a field of the wrong type.
    #[error("invalid field type: {0}")]
    InvalidFieldType(String),

    /// The expansion command could not be run.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// A storage operation failed.
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<DomainError> for ApplicationError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::InvalidReference(name) => Self::InvalidReference(name),
            DomainError::InvalidConfigFormat(msg) => Self::InvalidConfigFormat(msg),
            DomainError::InvalidFieldType(msg) => Self::InvalidFieldType(msg),
        }
    }
}

impl From<ConfigError> for ApplicationError {
    fn from(error: ConfigError) -> Self {
        match error {
            ConfigError::InvalidFormat(msg) => Self::InvalidConfigFormat(msg),
            ConfigError::InvalidFieldType(msg) => Self::InvalidFieldType(msg),
            ConfigError::Io(e) => Self::Storage(e.to_string()),
            ConfigError::Serialization(msg) => Self::Storage(msg),
        }
    }
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
