//! Child-process command runner

use std::process::{Command, Stdio};

use localenv_application::ports::{CommandError, CommandRunner};
use localenv_domain::CommandSpec;

/// Runs commands as real child processes using `std::process`.
///
/// Standard input is closed and standard error is discarded, so an
/// interactive shell's startup noise never reaches the caller. There is no
/// timeout: a shell whose startup files block will block the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    /// Creates a new system command runner.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, command: &CommandSpec) -> Result<String, CommandError> {
        let output = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|source| CommandError::Spawn {
                program: command.program.clone(),
                source,
            })?;

        if !output.status.success() {
            tracing::debug!(
                program = %command.program,
                status = %output.status,
                "expansion command exited unsuccessfully"
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
