//! `slicer completions SHELL`: print a completion script to stdout.

use clap::CommandFactory;
use clap_complete::{generate, shells};

use crate::cli::{Cli, CompletionsArgs, Shell};
use crate::error::CliResult;

const BIN: &str = "slicer";

pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let mut command = Cli::command();
    let stdout = &mut std::io::stdout();

    match args.shell {
        Shell::Bash => generate(shells::Bash, &mut command, BIN, stdout),
        Shell::Zsh => generate(shells::Zsh, &mut command, BIN, stdout),
        Shell::Fish => generate(shells::Fish, &mut command, BIN, stdout),
        Shell::PowerShell => generate(shells::PowerShell, &mut command, BIN, stdout),
        Shell::Elvish => generate(shells::Elvish, &mut command, BIN, stdout),
    }
    Ok(())
}
