//! Application use cases (business logic orchestration).

pub mod config;

pub use config::{LoadVariables, SaveVariables};
