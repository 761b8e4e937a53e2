use std::path::{Path, PathBuf};

use eyre::Result;

/// Write `content` to `path`, creating any missing parent directories.
///
/// Existing directories are not an error. A file whose content already
/// matches is left untouched.
pub fn write_file(path: &Path, content: &str) -> Result<WriteResult> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    if matches!(std::fs::read_to_string(path), Ok(existing) if existing == content) {
        return Ok(WriteResult::Unchanged);
    }
    std::fs::write(path, content)?;
    Ok(WriteResult::Written)
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already held the same content
    Unchanged,
}

/// A file to be generated
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Write the file, creating parent directories as needed
    pub fn write(&self) -> Result<WriteResult> {
        write_file(&self.path, &self.content)
    }
}
