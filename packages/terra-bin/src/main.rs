mod address;
mod cli;
mod msg;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::Subcommand;

fn main() -> Result<()> {
    let cmd = cli::Cmd::parse();
    cmd.opt.init_logger()?;

    tracing::debug!("Verbose logging enabled");

    cmd.subcommand.go()
}

impl Subcommand {
    pub(crate) fn go(self) -> Result<()> {
        match self {
            Subcommand::Address { subcommand } => address::go(subcommand),
            Subcommand::Msg { subcommand } => msg::go(subcommand),
            Subcommand::GenerateShellCompletions { shell } => {
                clap_complete::generate(
                    shell,
                    &mut Subcommand::command(),
                    "terra",
                    &mut std::io::stdout(),
                );
                Ok(())
            }
        }
    }
}
