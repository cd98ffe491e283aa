mod completions;
mod initialisms;
mod name;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use initialisms::InitialismsCommand;
use name::NameCommand;

#[derive(Parser)]
#[command(name = "idcase")]
#[command(version)]
#[command(about = "Resolve identifiers to Go-style PascalCase type names")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Name(cmd) => cmd.run(),
            Commands::Initialisms(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the Go-style type name for each identifier
    Name(NameCommand),

    /// List the initialisms rendered fully upper-case
    Initialisms(InitialismsCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
