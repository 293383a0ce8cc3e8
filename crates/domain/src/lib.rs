//! Localenv Domain - Core types
//!
//! This crate defines the domain model for resolving `$VARIABLE` references
//! against the user's interactive shell.
//! All types here are pure Rust with no I/O dependencies.

pub mod config;
pub mod error;
pub mod platform;
pub mod variable;

pub use config::{CONFIG_BASENAME, ConfigDocument, ENV_VAR_NAMES_KEY};
pub use error::{DomainError, DomainResult};
pub use platform::{CommandSpec, DEFAULT_SHELL, Platform, ShellCommand};
pub use variable::{BATCH_DIVIDER, Expansion, decode_batch, encode_batch, is_variable_reference};
