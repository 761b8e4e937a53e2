use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use rbgen_codegen::FileRegistry;
use rbgen_codegen_ruby::{DEFAULT_OUT_DIR, Generator};

use super::{InputArgs, UnwrapOrExit};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output directory (defaults to `out_dir` from rbgen.toml, then gen-rb)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = self.input.load_config();
        let options = self.input.options(config.as_ref());
        let schema = self.input.load_schema()?;

        let out = self
            .out
            .clone()
            .or_else(|| config.as_ref().map(|c| c.out_dir()))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));

        let generator = Generator::new(&schema, options);
        let files = generator.render().unwrap_or_exit();

        if self.dry_run {
            Self::print_preview(&files);
            return Ok(());
        }

        let stats = files
            .write_all(&out)
            .wrap_err("Failed to write generated files")?;

        println!("Generated: {}/", out.display());
        for path in &stats.written_paths {
            println!("  + {}", path);
        }
        if stats.unchanged > 0 {
            println!("  ({} unchanged)", stats.unchanged);
        }
        Ok(())
    }

    fn print_preview(files: &FileRegistry) {
        for file in files.entries() {
            println!("── {} ──", file.path);
            println!("{}", file.content);
        }

        println!("── Summary ──");
        println!("{} files would be generated", files.len());
    }
}
