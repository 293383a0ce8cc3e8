//! Load variables use case
//!
//! Reads the tracked names, resolves them in one batch and writes back the
//! sorted set of names that resolved whenever it differs from the file.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::ApplicationResult;
use crate::expansion::Expander;
use crate::ports::{CommandRunner, ConfigRepository};

use super::SaveVariables;

/// Loads and reconciles the tracked variables.
pub struct LoadVariables<'a, C, R> {
    repository: &'a C,
    expander: &'a Expander<R>,
}

impl<'a, C: ConfigRepository, R: CommandRunner> LoadVariables<'a, C, R> {
    /// Creates a new `LoadVariables` use case.
    pub const fn new(repository: &'a C, expander: &'a Expander<R>) -> Self {
        Self {
            repository,
            expander,
        }
    }

    /// Executes the use case.
    ///
    /// # Arguments
    /// * `path` - Path to the config file
    ///
    /// # Returns
    /// The resolved `name -> value` mapping.
    ///
    /// # Errors
    /// Returns `InvalidConfigFormat` or `InvalidFieldType` if the file cannot
    /// be interpreted, `Command` if the shell could not be started, and
    /// `Storage` if the reconciled list cannot be written.
    pub fn execute(&self, path: &Path) -> ApplicationResult<BTreeMap<String, String>> {
        let document = self.repository.load(path)?;

        if document.is_empty() {
            return Ok(BTreeMap::new());
        }

        let values = self.expander.expand_list(&document.env_var_names)?;

        // BTreeMap keys iterate sorted.
        let resolved_names: Vec<&str> = values.keys().map(String::as_str).collect();
        if resolved_names != document.env_var_names {
            tracing::info!(
                path = %path.display(),
                stored = document.env_var_names.len(),
                resolved = resolved_names.len(),
                "tracked variable names changed, rewriting config"
            );
            SaveVariables::new(self.repository).execute(path, &resolved_names)?;
        }

        Ok(values)
    }
}
