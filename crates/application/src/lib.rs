//! Localenv Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for external dependencies)
//! - The expansion engine that resolves `$VARIABLE`s through a shell
//! - Use case orchestration for the persisted config
//! - The host-facing variable session
//! - Application-level error handling

pub mod error;
pub mod expansion;
pub mod ports;
pub mod session;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{ApplicationError, ApplicationResult};
pub use expansion::Expander;
pub use ports::{CommandError, CommandRunner, ConfigError, ConfigRepository};
pub use session::{MachineState, VariableSession};
pub use use_cases::{LoadVariables, SaveVariables};
