//! Expansion engine
//!
//! Resolves `$VARIABLE` references by asking the user's shell to echo them.
//!
//! # Usage
//!
//! ```
//! use localenv_application::Expander;
//! use localenv_application::ports::{CommandError, CommandRunner};
//! use localenv_domain::{CommandSpec, ShellCommand};
//!
//! struct Echo;
//!
//! impl CommandRunner for Echo {
//!     fn run(&self, _command: &CommandSpec) -> Result<String, CommandError> {
//!         Ok("baz##quux".to_string())
//!     }
//! }
//!
//! let expander = Expander::new(ShellCommand::posix("bash"), Echo);
//! let values = expander.expand_list(&["$BAR", "$FOO"])?;
//! assert_eq!(values["$BAR"], "baz");
//! assert_eq!(values["$FOO"], "quux");
//! # Ok::<(), localenv_application::ApplicationError>(())
//! ```

mod engine;

pub use engine::Expander;
