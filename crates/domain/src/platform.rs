//! Platform-appropriate shell commands for expanding variables
//!
//! The platform decision is made once and captured in a [`ShellCommand`],
//! which then builds a [`CommandSpec`] for every target string.

use std::fmt;

/// Shell used when the user's preferred shell is unknown.
pub const DEFAULT_SHELL: &str = "bash";

/// Program used to expand variables on Windows.
pub const POWERSHELL: &str = "powershell";

/// Operating system family the process runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Microsoft Windows.
    Windows,
    /// Anything with a POSIX shell (Linux, macOS, BSDs).
    Unix,
}

impl Platform {
    /// Returns the platform this binary was compiled for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(windows) { Self::Windows } else { Self::Unix }
    }
}

/// An executable command as a program plus discrete arguments.
///
/// Arguments are passed to the child process as-is, without going through an
/// intermediate shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Program to execute.
    pub program: String,

    /// Arguments passed to the program.
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Creates a new command spec.
    #[must_use]
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl fmt::Display for CommandSpec {
    /// Renders the command as a single shell line, single-quoting arguments
    /// that contain whitespace.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.chars().any(char::is_whitespace) {
                write!(f, " '{arg}'")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Builds commands that make a shell echo back an expanded target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Windows: evaluate the target with `ExpandString` in PowerShell.
    PowerShell,

    /// POSIX: run the user's shell interactively and `echo` the target.
    ///
    /// Interactive mode is required: variables defined in interactive-only
    /// startup files (`.bashrc`, `.zshrc`) are invisible otherwise.
    Posix {
        /// Shell binary name, without any path prefix.
        shell: String,
    },
}

impl ShellCommand {
    /// Decides the command style for a platform.
    ///
    /// `shell_env` is the value of the user's `SHELL` variable. Its path
    /// prefix is stripped; an unset or empty value falls back to
    /// [`DEFAULT_SHELL`]. It is ignored on Windows.
    #[must_use]
    pub fn resolve(platform: Platform, shell_env: Option<&str>) -> Self {
        match platform {
            Platform::Windows => Self::PowerShell,
            Platform::Unix => Self::posix(shell_env.unwrap_or(DEFAULT_SHELL)),
        }
    }

    /// Creates a POSIX command for the given shell name or path.
    #[must_use]
    pub fn posix(shell: &str) -> Self {
        let name = shell.rsplit('/').next().unwrap_or_default();
        let name = if name.is_empty() { DEFAULT_SHELL } else { name };
        Self::Posix {
            shell: name.to_string(),
        }
    }

    /// Returns the program this command runs.
    #[must_use]
    pub fn program(&self) -> &str {
        match self {
            Self::PowerShell => POWERSHELL,
            Self::Posix { shell } => shell,
        }
    }

    /// Builds the command that expands `target`.
    #[must_use]
    pub fn command_for(&self, target: &str) -> CommandSpec {
        match self {
            Self::PowerShell => CommandSpec::new(
                POWERSHELL,
                vec![
                    "-NoProfile".to_string(),
                    "-Command".to_string(),
                    format!("echo $ExecutionContext.InvokeCommand.ExpandString(\"{target}\")"),
                ],
            ),
            Self::Posix { shell } => {
                CommandSpec::new(shell, vec!["-ic".to_string(), format!("echo {target}")])
            }
        }
    }
}
