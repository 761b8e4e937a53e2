mod check;
mod generate;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{ArgAction, Args, Parser, Subcommand};
use eyre::{Context, Result};
use generate::GenerateCommand;
use rbgen_codegen_ruby::{GeneratorOptions, OptionFlags, RbgenToml};
use rbgen_ir::Schema;
use tracing::debug;

/// Extension trait for exiting on generator errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for rbgen_codegen_ruby::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "rbgen")]
#[command(version)]
#[command(about = "Generate ruby sources from a parsed IDL schema")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate ruby sources
    Generate(GenerateCommand),

    /// Render everything in memory and report collisions without writing
    Check(CheckCommand),
}

/// Inputs shared by every subcommand.
#[derive(Args)]
pub struct InputArgs {
    /// Schema JSON produced by the IDL parser
    #[arg(short, long)]
    pub schema: PathBuf,

    /// Path to rbgen.toml (read only if it exists)
    #[arg(short, long, default_value = "rbgen.toml")]
    pub config: PathBuf,

    /// Generator options, e.g. `rubygems,zeitwerk` (repeatable)
    #[arg(long = "option", value_name = "OPTIONS")]
    pub options: Vec<String>,
}

impl InputArgs {
    pub fn load_schema(&self) -> Result<Schema> {
        Schema::from_file(&self.schema)
            .wrap_err_with(|| format!("Failed to load schema {}", self.schema.display()))
    }

    /// The config file, when present.
    pub fn load_config(&self) -> Option<RbgenToml> {
        if !self.config.exists() {
            debug!(config = %self.config.display(), "no config file");
            return None;
        }
        Some(RbgenToml::from_file(&self.config).unwrap_or_exit())
    }

    /// Options from the config file combined with `--option` flags.
    pub fn options(&self, config: Option<&RbgenToml>) -> GeneratorOptions {
        let cli: OptionFlags = GeneratorOptions::parse(&self.options)
            .unwrap_or_exit()
            .into();
        let flags = match config {
            Some(config) => config.flags().merge(cli),
            None => cli,
        };
        flags.build().unwrap_or_exit()
    }
}
