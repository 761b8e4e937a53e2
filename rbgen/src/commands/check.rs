use clap::Args;
use eyre::Result;
use rbgen_codegen_ruby::Generator;

use super::{InputArgs, UnwrapOrExit};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub input: InputArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = self.input.load_config();
        let options = self.input.options(config.as_ref());
        let schema = self.input.load_schema()?;

        let files = Generator::new(&schema, options).render().unwrap_or_exit();

        println!("✓ {} is valid\n", self.input.schema.display());
        println!("  layout: {:?}", options.layout);
        println!(
            "  {} program{}, {} file{}",
            schema.programs.len(),
            if schema.programs.len() == 1 { "" } else { "s" },
            files.len(),
            if files.len() == 1 { "" } else { "s" }
        );
        Ok(())
    }
}
