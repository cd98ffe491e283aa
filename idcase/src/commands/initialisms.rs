use clap::Args;
use eyre::Result;
use idcase_core::GO_INITIALISMS;

#[derive(Args)]
pub struct InitialismsCommand {}

impl InitialismsCommand {
    pub fn run(&self) -> Result<()> {
        for initialism in GO_INITIALISMS {
            println!("{}", initialism);
        }

        Ok(())
    }
}
