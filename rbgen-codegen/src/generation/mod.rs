//! Output management for generated files.
//!
//! - [`FileRegistry`] - Buffered file registration and writing

mod registry;

pub use registry::{FileEntry, FileRegistry, WriteStats};
