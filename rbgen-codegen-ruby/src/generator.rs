//! Ruby code generator.

use std::path::Path;

use eyre::Result as EyreResult;
use rbgen_codegen::{
    FileRegistry,
    language::{GenerateResult, LanguageCodegen, PreviewFile},
};
use rbgen_ir::Schema;
use tracing::info;

use crate::{
    Context, Error, GeneratorOptions, Layout, Result,
    autoload::AutoloadRegistry,
    layout::{autoload, flat},
};

/// Renders a whole schema to ruby sources.
///
/// Rendering is all-or-nothing: files are collected in memory and only
/// written once every program rendered, so a failed run leaves the output
/// directory untouched.
pub struct Generator<'a> {
    schema: &'a Schema,
    options: GeneratorOptions,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "ruby"
    }

    fn file_extension(&self) -> &'static str {
        "rb"
    }

    fn preview(&self) -> EyreResult<Vec<PreviewFile>> {
        let files = self.render()?;
        Ok(files
            .into_entries()
            .into_iter()
            .map(|e| PreviewFile {
                path: e.path,
                content: e.content,
            })
            .collect())
    }

    fn generate(&self, output_dir: &Path) -> EyreResult<GenerateResult> {
        let files = self.render()?;
        let stats = files.write_all(output_dir)?;
        info!(
            written = stats.written,
            unchanged = stats.unchanged,
            out = %output_dir.display(),
            "wrote ruby sources"
        );
        Ok(GenerateResult {
            written: stats.written_paths,
            unchanged: stats.unchanged_paths,
        })
    }
}

impl<'a> Generator<'a> {
    pub fn new(schema: &'a Schema, options: GeneratorOptions) -> Self {
        Self { schema, options }
    }

    pub fn options(&self) -> GeneratorOptions {
        self.options
    }

    /// Render every program, in schema order, into a file registry.
    pub fn render(&self) -> Result<FileRegistry> {
        let ctx = Context::new(self.schema, self.options);
        let mut registry = AutoloadRegistry::new();
        let mut files = FileRegistry::new();

        for program in &self.schema.programs {
            info!(program = %program.name, layout = ?self.options.layout, "generating program");
            let entries = match self.options.layout {
                Layout::Autoload => autoload::emit_program(&ctx, &mut registry, program)?,
                Layout::Flat | Layout::Namespaced => flat::emit_program(&ctx, program)?,
            };
            for entry in entries {
                files
                    .register(entry)
                    .map_err(|rejected| Box::new(Error::DuplicateOutput { path: rejected.path }))?;
            }
        }

        info!(files = files.len(), "rendered schema");
        Ok(files)
    }
}
