//! In-memory registry of generated files.
//!
//! Generators register every output file here first and write the whole set
//! only once rendering has succeeded, so a failed run leaves the output
//! directory untouched.
//!
//! # Example
//!
//! ```ignore
//! let mut registry = FileRegistry::new();
//! assert!(registry.register(FileEntry::new("tutorial_types.rb", types.build())).is_ok());
//! assert!(registry.register(FileEntry::new("calculator.rb", service.build())).is_ok());
//! let stats = registry.write_all(&output_dir)?;
//! ```

use std::path::{Path, PathBuf};

use eyre::Result;
use indexmap::{IndexMap, map::Entry};
use rbgen_core::{File, WriteResult};

/// A file to be generated, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Relative path from output directory.
    pub path: String,
    /// File content.
    pub content: String,
}

impl FileEntry {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the full path for this entry.
    pub fn full_path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    /// Write this file below `base`.
    pub fn write(&self, base: &Path) -> Result<WriteResult> {
        File::new(self.full_path(base), self.content.as_str()).write()
    }
}

/// Registry for collecting generated files in registration order.
#[derive(Debug, Default)]
pub struct FileRegistry {
    entries: IndexMap<String, FileEntry>,
}

impl FileRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file entry.
    ///
    /// A path is taken once per run: a second entry for it is handed back
    /// untouched and the first one stays registered.
    pub fn register(&mut self, entry: FileEntry) -> std::result::Result<(), FileEntry> {
        match self.entries.entry(entry.path.clone()) {
            Entry::Occupied(_) => Err(entry),
            Entry::Vacant(slot) => {
                slot.insert(entry);
                Ok(())
            }
        }
    }

    /// All registered entries, in registration order.
    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the registry, yielding entries in registration order.
    pub fn into_entries(self) -> Vec<FileEntry> {
        self.entries.into_values().collect()
    }

    /// Write all files to the output directory.
    pub fn write_all(&self, base: &Path) -> Result<WriteStats> {
        let mut stats = WriteStats::default();

        for entry in self.entries() {
            match entry.write(base)? {
                WriteResult::Written => {
                    stats.written += 1;
                    stats.written_paths.push(entry.path.clone());
                }
                WriteResult::Unchanged => {
                    stats.unchanged += 1;
                    stats.unchanged_paths.push(entry.path.clone());
                }
            }
        }

        Ok(stats)
    }
}

/// Statistics from a write operation.
#[derive(Debug, Default)]
pub struct WriteStats {
    /// Number of files written.
    pub written: usize,
    /// Number of files left as they were (identical content).
    pub unchanged: usize,
    /// Paths of written files.
    pub written_paths: Vec<String>,
    /// Paths of unchanged files.
    pub unchanged_paths: Vec<String>,
}

impl WriteStats {
    /// Total number of files processed.
    pub fn total(&self) -> usize {
        self.written + self.unchanged
    }
}
