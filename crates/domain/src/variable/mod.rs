//! Variable references and their expansion results
//!
//! A variable reference is a standalone `$NAME` token. Several references are
//! packed into one shell invocation with the batch divider and split back
//! into per-name [`Expansion`]s afterwards.

mod batch;
mod reference;

pub use batch::{BATCH_DIVIDER, Expansion, decode_batch, encode_batch};
pub use reference::is_variable_reference;
