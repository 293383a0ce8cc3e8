//! Detection of the platform shell for the running process

use localenv_domain::{Platform, ShellCommand};

/// Environment variable naming the user's preferred shell.
pub const SHELL_ENV_VAR: &str = "SHELL";

/// Decides the expansion command for this process.
///
/// Reads the compile-time platform and the `SHELL` environment variable.
/// Compute this once and reuse it; the platform cannot change at runtime.
#[must_use]
pub fn detect_shell_command() -> ShellCommand {
    let shell_env = std::env::var(SHELL_ENV_VAR).ok();
    let command = ShellCommand::resolve(Platform::current(), shell_env.as_deref());
    tracing::debug!(
        platform = ?Platform::current(),
        shell = command.program(),
        "resolved expansion shell"
    );
    command
}
