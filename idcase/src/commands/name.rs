use clap::Args;
use eyre::Result;
use idcase_core::to_go_pascal_case;

#[derive(Args)]
pub struct NameCommand {
    /// Identifiers to resolve (snake_case, camelCase, kebab-case, or spaced)
    #[arg(required = true)]
    identifiers: Vec<String>,
}

impl NameCommand {
    pub fn run(&self) -> Result<()> {
        for identifier in &self.identifiers {
            println!("{}", to_go_pascal_case(identifier));
        }

        Ok(())
    }
}
