//! Core utilities and types for rbgen.
//!
//! This crate provides the string case helpers and file writing primitives
//! shared by the rest of the rbgen workspace.

mod file;
mod utils;

// File operations
pub use file::{File, WriteResult, write_file};
// String utilities
pub use utils::{capitalize, to_pascal_case, underscore, upcase};
