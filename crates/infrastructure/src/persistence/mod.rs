//! Persistence implementations for file-based storage.

mod config_repository;
mod file_system;

pub use config_repository::*;
pub use file_system::*;
