//! Config repository port
//!
//! Defines the interface for persisting the tracked variable names.

use std::path::Path;

use localenv_domain::{ConfigDocument, DomainError};

/// Errors that can occur while reading or writing the config document.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file is not valid JSON, or not a JSON object.
    #[error("Invalid config format: {0}")]
    InvalidFormat(String),

    /// A field in the document has the wrong type.
    #[error("Invalid field type: {0}")]
    InvalidFieldType(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<DomainError> for ConfigError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::InvalidFieldType(msg) => Self::InvalidFieldType(msg),
            DomainError::InvalidConfigFormat(msg) | DomainError::InvalidReference(msg) => {
                Self::InvalidFormat(msg)
            }
        }
    }
}

/// Repository trait for the config document.
pub trait ConfigRepository {
    /// Loads the document at `path`.
    ///
    /// A missing file yields an empty document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidFormat` for malformed JSON and
    /// `ConfigError::InvalidFieldType` for a mistyped `env_var_names`.
    fn load(&self, path: &Path) -> Result<ConfigDocument, ConfigError>;

    /// Saves the document to `path`, fully replacing the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn save(&self, path: &Path, document: &ConfigDocument) -> Result<(), ConfigError>;
}

impl<T: ConfigRepository + ?Sized> ConfigRepository for &T {
    fn load(&self, path: &Path) -> Result<ConfigDocument, ConfigError> {
        (**self).load(path)
    }

    fn save(&self, path: &Path, document: &ConfigDocument) -> Result<(), ConfigError> {
        (**self).save(path, document)
    }
}
