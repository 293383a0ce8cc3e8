//! Save variables use case

use std::path::Path;

use localenv_domain::ConfigDocument;

use crate::error::ApplicationResult;
use crate::ports::ConfigRepository;

/// Persists the list of tracked variable names.
///
/// The file is fully replaced: any top-level key other than
/// `env_var_names` is lost.
pub struct SaveVariables<C> {
    repository: C,
}

impl<C: ConfigRepository> SaveVariables<C> {
    /// Creates a new `SaveVariables` use case.
    pub const fn new(repository: C) -> Self {
        Self { repository }
    }

    /// Executes the use case.
    ///
    /// # Arguments
    /// * `path` - Path to the config file
    /// * `names` - Variable names to store, in the order given
    ///
    /// # Errors
    /// Returns an error if the config file cannot be written.
    pub fn execute<S: AsRef<str>>(&self, path: &Path, names: &[S]) -> ApplicationResult<()> {
        let document = ConfigDocument::new(names.iter().map(|n| n.as_ref().to_string()).collect());
        self.repository.save(path, &document)?;
        tracing::debug!(path = %path.display(), count = names.len(), "saved tracked variable names");
        Ok(())
    }
}
