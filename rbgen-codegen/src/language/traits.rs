//! Language-agnostic code generation traits.

use std::path::Path;

use eyre::Result;

/// Trait for language-specific code generators.
///
/// Implement this trait to add support for emitting bindings in a new
/// language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "ruby")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "rb")
    fn file_extension(&self) -> &'static str;

    /// Render every file without writing to disk.
    ///
    /// Fails with the same errors `generate` would report.
    fn preview(&self) -> Result<Vec<PreviewFile>>;

    /// Generate all files into the specified output directory.
    ///
    /// Nothing is written unless the whole schema renders.
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files written with new content
    pub written: Vec<String>,
    /// Files whose content was already up to date
    pub unchanged: Vec<String>,
}

impl GenerateResult {
    /// Total number of files produced.
    pub fn total(&self) -> usize {
        self.written.len() + self.unchanged.len()
    }
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
