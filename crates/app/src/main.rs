//! localenv - Main Entry Point
//!
//! Resolves `$VARIABLES` defined in the user's interactive shell and keeps
//! the tracked list in a JSON config file.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use localenv_application::{Expander, VariableSession};
use localenv_infrastructure::{
    FileConfigRepository, StdFileSystem, SystemCommandRunner, detect_shell_command,
    resolve_config_path,
};

use cli::Cli;

fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for resolved values.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config_path = resolve_config_path(cli.config.as_deref());

    tracing::debug!(
        "Starting localenv v{} with config {}",
        env!("CARGO_PKG_VERSION"),
        config_path.display()
    );

    let expander = Expander::new(detect_shell_command(), SystemCommandRunner::new());
    let repository = FileConfigRepository::new(StdFileSystem::new());
    let mut session = VariableSession::new(expander, repository, config_path);

    let mut stdout = std::io::stdout().lock();
    cli.command
        .run(&mut session, &mut stdout)
        .context("localenv command failed")
}
