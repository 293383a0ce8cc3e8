//! Deterministic JSON serialization for the config file.
//!
//! Ensures stable rewrites by:
//! - Using 2-space indentation
//! - Adding trailing newline
//! - UTF-8 encoding without BOM

mod json;

pub use json::*;
