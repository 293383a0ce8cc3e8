//! Adapters for system resources.

mod system_runner;

pub use system_runner::SystemCommandRunner;
