//! Command runner port
//!
//! Runs a [`CommandSpec`] in a child process and hands back its output.

use localenv_domain::CommandSpec;

/// Errors that prevent a command from producing output at all.
///
/// A command that runs but exits non-zero is not an error.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The program could not be started.
    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        /// Program that failed to start.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Waiting on the child or reading its output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Executes expansion commands.
///
/// Implementations spawn exactly one child process per call, block until it
/// finishes, and return its standard output with surrounding whitespace
/// trimmed. The exit status is ignored.
pub trait CommandRunner {
    /// Runs the command and returns its trimmed standard output.
    ///
    /// # Errors
    ///
    /// Returns an error only if the process could not be run.
    fn run(&self, command: &CommandSpec) -> Result<String, CommandError>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, command: &CommandSpec) -> Result<String, CommandError> {
        (**self).run(command)
    }
}
