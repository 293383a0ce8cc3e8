//! File-based config repository implementation.
//!
//! The config document is a single JSON file, read and written whole.

use std::path::Path;

use localenv_application::ports::{ConfigError, ConfigRepository, FileSystem, FileSystemError};
use localenv_domain::ConfigDocument;

use crate::serialization::{SerializationError, from_json_bytes, to_json_stable_bytes};

/// Converts FileSystemError to std::io::Error for ConfigError.
fn to_io_error(e: FileSystemError) -> std::io::Error {
    match e {
        FileSystemError::Io(io_err) => io_err,
        FileSystemError::NotFound(path) => {
            std::io::Error::new(std::io::ErrorKind::NotFound, path.display().to_string())
        }
        FileSystemError::PermissionDenied(path) => std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            path.display().to_string(),
        ),
    }
}

/// File-based config repository.
#[derive(Debug, Clone)]
pub struct FileConfigRepository<F> {
    fs: F,
}

impl<F: FileSystem> FileConfigRepository<F> {
    /// Creates a new file-based config repository.
    pub const fn new(fs: F) -> Self {
        Self { fs }
    }
}

impl<F: FileSystem> ConfigRepository for FileConfigRepository<F> {
    fn load(&self, path: &Path) -> Result<ConfigDocument, ConfigError> {
        let content = match self.fs.read_file(path) {
            Ok(content) => content,
            Err(FileSystemError::NotFound(_)) => {
                tracing::debug!(path = %path.display(), "config file missing, using empty document");
                return Ok(ConfigDocument::default());
            }
            Err(e) => return Err(ConfigError::Io(to_io_error(e))),
        };

        let value: serde_json::Value = from_json_bytes(&content).map_err(|e| {
            ConfigError::InvalidFormat(format!("config file must contain a JSON object: {e}"))
        })?;

        Ok(ConfigDocument::from_value(&value)?)
    }

    fn save(&self, path: &Path, document: &ConfigDocument) -> Result<(), ConfigError> {
        let content = to_json_stable_bytes(document).map_err(|e| match e {
            SerializationError::Io(io) => ConfigError::Io(io),
            other => ConfigError::Serialization(other.to_string()),
        })?;

        self.fs
            .write_file(path, &content)
            .map_err(|e| ConfigError::Io(to_io_error(e)))
    }
}
