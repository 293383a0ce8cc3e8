//! Localenv Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;
pub mod paths;
pub mod persistence;
pub mod platform;
pub mod serialization;

pub use adapters::SystemCommandRunner;
pub use paths::{CONFIG_PATH_ENV_VAR, default_config_path, resolve_config_path};
pub use persistence::{FileConfigRepository, StdFileSystem};
pub use platform::{SHELL_ENV_VAR, detect_shell_command};
pub use serialization::{
    SerializationError, from_json, from_json_bytes, to_json_stable, to_json_stable_bytes,
};
