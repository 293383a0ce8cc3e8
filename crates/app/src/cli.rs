//! Command-line interface

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use localenv_application::ports::{CommandRunner, ConfigRepository};
use localenv_application::{MachineState, VariableSession};
use localenv_infrastructure::CONFIG_PATH_ENV_VAR;

/// Resolve `$VARIABLES` from your interactive shell.
#[derive(Debug, Parser)]
#[command(name = "localenv", version, about)]
pub struct Cli {
    /// Path to the config file tracking variable names.
    #[arg(long, short, global = true, env = CONFIG_PATH_ENV_VAR)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the value of a variable, tracking it for later loads.
    Get {
        /// Variable reference, e.g. `$HOME`.
        name: String,
    },

    /// Resolve every tracked variable and print `NAME=value` lines.
    List,

    /// Reload tracked variables, as on a machine reconnect.
    Refresh,

    /// Stop tracking a variable.
    Forget {
        /// Variable reference to remove.
        name: String,
    },

    /// Print the shell command used to expand a target.
    Command {
        /// Variable reference or batch target.
        target: String,
    },
}

impl Command {
    /// Runs the subcommand against a session, writing results to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if the session operation or the write fails.
    pub fn run<R, C, W>(self, session: &mut VariableSession<R, C>, out: &mut W) -> Result<()>
    where
        R: CommandRunner,
        C: ConfigRepository,
        W: Write,
    {
        match self {
            Self::Get { name } => {
                session.start().context("failed to load config")?;
                let value = session
                    .lookup(&name)
                    .with_context(|| format!("failed to expand {name}"))?;
                writeln!(out, "{value}")?;
            }
            Self::List => {
                session.start().context("failed to load config")?;
                for (name, value) in session.cached() {
                    writeln!(out, "{name}={value}")?;
                }
            }
            Self::Refresh => {
                session
                    .on_machine_state_changed(MachineState::Running)
                    .context("failed to reload config")?;
                writeln!(out, "{} variables resolved", session.cached().len())?;
            }
            Self::Forget { name } => {
                session.start().context("failed to load config")?;
                if session.forget(&name)? {
                    writeln!(out, "forgot {name}")?;
                } else {
                    writeln!(out, "{name} was not tracked")?;
                }
            }
            Self::Command { target } => {
                writeln!(out, "{}", session.expander().command_for(&target))?;
            }
        }
        Ok(())
    }
}
