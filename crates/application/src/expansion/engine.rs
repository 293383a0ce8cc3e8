//! Single and batch expansion of variable references

use std::collections::BTreeMap;

use localenv_domain::{
    CommandSpec, Expansion, ShellCommand, decode_batch, encode_batch, is_variable_reference,
};

use crate::error::{ApplicationError, ApplicationResult};
use crate::ports::CommandRunner;

/// Expands variable references through a platform shell.
///
/// Holds no state between calls beyond the shell decision and the runner.
#[derive(Debug, Clone)]
pub struct Expander<R> {
    shell: ShellCommand,
    runner: R,
}

impl<R: CommandRunner> Expander<R> {
    /// Creates an expander for the given shell and runner.
    pub const fn new(shell: ShellCommand, runner: R) -> Self {
        Self { shell, runner }
    }

    /// Returns the shell decision this expander uses.
    #[must_use]
    pub const fn shell(&self) -> &ShellCommand {
        &self.shell
    }

    /// Returns the underlying command runner.
    #[must_use]
    pub const fn runner(&self) -> &R {
        &self.runner
    }

    /// Returns the command that would be executed for `target`.
    #[must_use]
    pub fn command_for(&self, target: &str) -> CommandSpec {
        self.shell.command_for(target)
    }

    /// Expands a single variable reference.
    ///
    /// # Errors
    ///
    /// Returns `InvalidReference` if `name` is not a variable reference,
    /// `NotFound` if the shell produced no value, or `Command` if the shell
    /// could not be started.
    pub fn expand(&self, name: &str) -> ApplicationResult<String> {
        if !is_variable_reference(name) {
            return Err(ApplicationError::InvalidReference(name.to_string()));
        }

        match Expansion::from_output(self.run(name)?) {
            Expansion::Resolved(value) => Ok(value),
            Expansion::Unresolved => Err(ApplicationError::NotFound(name.to_string())),
        }
    }

    /// Expands many references with a single shell invocation, keeping the
    /// per-name outcome.
    ///
    /// Names that are not variable references are dropped. If none remain,
    /// no process is spawned.
    ///
    /// # Errors
    ///
    /// Returns `Command` if the shell could not be started.
    pub fn expand_each<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> ApplicationResult<Vec<(String, Expansion)>> {
        let valid: Vec<&str> = names
            .iter()
            .map(AsRef::as_ref)
            .filter(|name| is_variable_reference(name))
            .collect();

        if valid.is_empty() {
            return Ok(Vec::new());
        }

        let output = self.run(&encode_batch(valid.as_slice()))?;
        Ok(decode_batch(valid.as_slice(), &output))
    }

    /// Expands many references with a single shell invocation.
    ///
    /// Invalid and unresolved names are omitted from the result.
    ///
    /// # Errors
    ///
    /// Returns `Command` if the shell could not be started.
    pub fn expand_list<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> ApplicationResult<BTreeMap<String, String>> {
        let expansions = self.expand_each(names)?;

        let values: BTreeMap<String, String> = expansions
            .into_iter()
            .filter_map(|(name, expansion)| expansion.into_value().map(|value| (name, value)))
            .collect();

        tracing::debug!(
            requested = names.len(),
            resolved = values.len(),
            "expanded variable batch"
        );

        Ok(values)
    }

    fn run(&self, target: &str) -> ApplicationResult<String> {
        let command = self.shell.command_for(target);
        tracing::debug!(command = %command, "running expansion command");
        let output = self.runner.run(&command)?;
        Ok(output.trim().to_string())
    }
}
