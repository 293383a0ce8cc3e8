//! Host-facing variable session
//!
//! A host (text-expansion plugin, CLI) owns one session for its lifetime.
//! The session keeps an in-memory `name -> value` cache that is filled from
//! the config file on start, refreshed whenever the host machine reconnects,
//! and extended on demand by single-name lookups.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{ApplicationError, ApplicationResult};
use crate::expansion::Expander;
use crate::ports::{CommandRunner, ConfigRepository};
use crate::use_cases::{LoadVariables, SaveVariables};

/// Connection state reported by the host's lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineState {
    /// The machine is stopped.
    Stopped,
    /// The machine is starting up.
    Initializing,
    /// The machine is connected and running.
    Running,
    /// The machine lost its connection.
    Disconnected,
}

impl MachineState {
    /// Parses the state name used by the host.
    #[must_use]
    pub fn from_host(state: &str) -> Option<Self> {
        match state {
            "stopped" => Some(Self::Stopped),
            "initializing" => Some(Self::Initializing),
            "connected" | "running" => Some(Self::Running),
            "disconnected" => Some(Self::Disconnected),
            _ => None,
        }
    }

    /// Returns the host-facing name of this state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stopped => "stopped",
            Self::Initializing => "initializing",
            Self::Running => "connected",
            Self::Disconnected => "disconnected",
        }
    }
}

impl fmt::Display for MachineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cache of resolved variables bound to one config file.
pub struct VariableSession<R, C> {
    expander: Expander<R>,
    repository: C,
    config_path: PathBuf,
    values: BTreeMap<String, String>,
}

impl<R: CommandRunner, C: ConfigRepository> VariableSession<R, C> {
    /// Creates a session with an empty cache. Call [`Self::start`] to load
    /// the config.
    pub fn new(expander: Expander<R>, repository: C, config_path: impl Into<PathBuf>) -> Self {
        Self {
            expander,
            repository,
            config_path: config_path.into(),
            values: BTreeMap::new(),
        }
    }

    /// Loads the config file into the cache.
    ///
    /// # Errors
    ///
    /// Returns any error from loading the config.
    pub fn start(&mut self) -> ApplicationResult<()> {
        let count = self.refresh()?;
        tracing::info!(path = %self.config_path.display(), count, "variable session started");
        Ok(())
    }

    /// Replaces the cache with a fresh load of the config file.
    ///
    /// On failure the previous cache is kept.
    ///
    /// # Errors
    ///
    /// Returns any error from loading the config.
    pub fn refresh(&mut self) -> ApplicationResult<usize> {
        self.values = LoadVariables::new(&self.repository, &self.expander).execute(&self.config_path)?;
        Ok(self.values.len())
    }

    /// Reacts to the host's machine-state event.
    ///
    /// Only [`MachineState::Running`] triggers a refresh, so that variables
    /// edited in shell startup files are picked up on reconnect. Returns
    /// whether a refresh happened.
    ///
    /// # Errors
    ///
    /// Returns any error from reloading the config.
    pub fn on_machine_state_changed(&mut self, state: MachineState) -> ApplicationResult<bool> {
        if state != MachineState::Running {
            tracing::trace!(%state, "ignoring machine state change");
            return Ok(false);
        }

        let count = self.refresh()?;
        tracing::info!(count, "reloaded variables after reconnect");
        Ok(true)
    }

    /// Resolves a token for the host's text-expansion hook.
    ///
    /// Cached values are returned directly. Otherwise the token is expanded
    /// through the shell, cached, and the sorted cache keys are persisted.
    ///
    /// # Errors
    ///
    /// Returns `MissingReference` for an empty token, and any error from
    /// single-name expansion or from saving the config.
    pub fn lookup(&mut self, token: &str) -> ApplicationResult<String> {
        if token.is_empty() {
            return Err(ApplicationError::MissingReference);
        }

        if let Some(value) = self.values.get(token) {
            return Ok(value.clone());
        }

        let value = self.expander.expand(token)?;
        self.values.insert(token.to_string(), value.clone());
        tracing::debug!(name = token, "tracking new variable");
        self.persist()?;

        Ok(value)
    }

    /// Stops tracking a variable. Returns whether it was tracked.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be saved.
    pub fn forget(&mut self, name: &str) -> ApplicationResult<bool> {
        if self.values.remove(name).is_none() {
            return Ok(false);
        }

        self.persist()?;
        Ok(true)
    }

    /// Returns the cached `name -> value` mapping.
    #[must_use]
    pub const fn cached(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    /// Returns the config file this session is bound to.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Returns the expander used for lookups.
    #[must_use]
    pub const fn expander(&self) -> &Expander<R> {
        &self.expander
    }

    fn persist(&self) -> ApplicationResult<()> {
        let names: Vec<&str> = self.values.keys().map(String::as_str).collect();
        SaveVariables::new(&self.repository).execute(&self.config_path, &names)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::test_support::{MemoryConfigRepository, MockRunner};
    use localenv_domain::ShellCommand;
    use pretty_assertions::assert_eq;

    fn session(
        runner: MockRunner,
        repo: MemoryConfigRepository,
    ) -> VariableSession<MockRunner, MemoryConfigRepository> {
        VariableSession::new(
            Expander::new(ShellCommand::posix("bash"), runner),
            repo,
            "/config/local_env_var.json",
        )
    }

    #[test]
    fn test_start_fills_cache() {
        let mut session = session(
            MockRunner::with_outputs(["baz##quux"]),
            MemoryConfigRepository::with_names(&["$BAR", "$FOO"]),
        );

        session.start().unwrap();

        assert_eq!(session.cached().len(), 2);
        assert_eq!(session.lookup("$BAR").unwrap(), "baz");
        // Served from cache: only the start-up batch ran.
        assert_eq!(session.expander().runner().call_count(), 1);
    }

    #[test]
    fn test_lookup_expands_and_persists_new_name() {
        let mut session = session(
            MockRunner::with_outputs(["baz", "/home/me"]),
            MemoryConfigRepository::with_names(&["$BAR"]),
        );
        session.start().unwrap();

        let value = session.lookup("$HOME").unwrap();

        assert_eq!(value, "/home/me");
        assert_eq!(session.cached().get("$HOME").map(String::as_str), Some("/home/me"));
        assert_eq!(
            session.repository.last_saved().unwrap().env_var_names,
            vec!["$BAR", "$HOME"]
        );
    }

    #[test]
    fn test_lookup_empty_token_is_missing_reference() {
        let mut session = session(MockRunner::new(), MemoryConfigRepository::new());
        let err = session.lookup("").unwrap_err();
        assert!(matches!(err, ApplicationError::MissingReference));
    }

    #[test]
    fn test_lookup_failure_leaves_cache_and_file_untouched() {
        let mut session = session(MockRunner::with_outputs([""]), MemoryConfigRepository::new());

        let err = session.lookup("$NOPE").unwrap_err();

        assert!(matches!(err, ApplicationError::NotFound(_)));
        assert!(session.cached().is_empty());
        assert_eq!(session.repository.save_count(), 0);
    }

    #[test]
    fn test_lookup_invalid_token() {
        let mut session = session(MockRunner::new(), MemoryConfigRepository::new());
        let err = session.lookup("HOME").unwrap_err();
        assert!(matches!(err, ApplicationError::InvalidReference(_)));
    }

    #[test]
    fn test_running_state_refreshes_cache() {
        let runner = MockRunner::with_outputs(["old"]);
        let mut session = session(runner, MemoryConfigRepository::with_names(&["$FOO"]));
        session.start().unwrap();
        assert_eq!(session.lookup("$FOO").unwrap(), "old");

        session.expander().runner().push_output("new");
        let refreshed = session.on_machine_state_changed(MachineState::Running).unwrap();

        assert!(refreshed);
        assert_eq!(session.lookup("$FOO").unwrap(), "new");
    }

    #[test]
    fn test_other_states_are_ignored() {
        let mut session = session(MockRunner::new(), MemoryConfigRepository::with_names(&["$FOO"]));

        for state in [
            MachineState::Stopped,
            MachineState::Initializing,
            MachineState::Disconnected,
        ] {
            assert!(!session.on_machine_state_changed(state).unwrap());
        }
        assert_eq!(session.expander().runner().call_count(), 0);
    }

    #[test]
    fn test_failed_refresh_keeps_previous_cache() {
        let mut session = session(
            MockRunner::with_outputs(["v"]),
            MemoryConfigRepository::with_names(&["$FOO"]),
        );
        session.start().unwrap();

        session.repository = MemoryConfigRepository::with_invalid_format("broken");
        let err = session.refresh().unwrap_err();

        assert!(matches!(err, ApplicationError::InvalidConfigFormat(_)));
        assert_eq!(session.cached().get("$FOO").map(String::as_str), Some("v"));
    }

    #[test]
    fn test_forget_removes_and_persists() {
        let mut session = session(
            MockRunner::with_outputs(["a##b"]),
            MemoryConfigRepository::with_names(&["$A", "$B"]),
        );
        session.start().unwrap();

        assert!(session.forget("$A").unwrap());
        assert!(!session.forget("$A").unwrap());
        assert_eq!(session.repository.last_saved().unwrap().env_var_names, vec!["$B"]);
        assert_eq!(session.repository.save_count(), 1);
    }

    #[test]
    fn test_machine_state_names() {
        assert_eq!(MachineState::from_host("connected"), Some(MachineState::Running));
        assert_eq!(MachineState::from_host("stopped"), Some(MachineState::Stopped));
        assert_eq!(MachineState::from_host("bogus"), None);
        assert_eq!(MachineState::Running.to_string(), "connected");
    }
}
