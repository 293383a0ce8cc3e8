//! Config store use cases

mod load_variables;
mod save_variables;

pub use load_variables::LoadVariables;
pub use save_variables::SaveVariables;
