//! `slicer`: scaffold CRUD feature slices into a multi-project .NET solution.
//!
//! `main` parses flags, installs logging, layers the configuration and hands
//! the command to [`run`]. Whatever comes back as a [`CliError`] is printed
//! once, by [`handle_error`], and decides the process status:
//!
//! | Status | When                                        |
//! |--------|---------------------------------------------|
//! | 0      | the command finished                        |
//! | 1      | I/O or another internal failure             |
//! | 2      | bad flags, bad feature, unknown key type    |
//! | 3      | manifest or templates missing               |
//! | 4      | unreadable or invalid configuration         |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands, ConfigCommands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod manifest;
mod output;

fn main() -> ExitCode {
    // Load .env before anything else, including tracing init.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also arrive here and are not failures.
            let code = if e.use_stderr() { 2 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    let _log_guard = match init_logging(&cli.global) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialise logging: {e:#}");
            return ExitCode::from(1);
        }
    };

    debug!(command = ?cli.command, "Starting slicer {}", env!("CARGO_PKG_VERSION"));

    let config_file = cli
        .global
        .config
        .as_ref()
        .filter(|_| reads_config_file(&cli.command));
    let config = match AppConfig::load(config_file) {
        Ok(cfg) => cfg,
        Err(e) => {
            return handle_error(
                CliError::config("Failed to load configuration", e),
                cli.global.verbose > 0,
            );
        }
    };

    let output = OutputManager::new(&cli.global, &config);
    let verbose = cli.global.verbose > 0;

    match run(cli, config, output) {
        Ok(()) => {
            info!("Slicer completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose),
    }
}

/// Commands that create or locate the config file must not fail when the
/// file passed with `--config` does not exist yet.
fn reads_config_file(command: &Commands) -> bool {
    !matches!(
        command,
        Commands::Init(_)
            | Commands::Completions(_)
            | Commands::Config(ConfigCommands::Set { .. } | ConfigCommands::Path)
    )
}

#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::Generate(cmd) => commands::generate::execute(cmd, cli.global, config, output),
        Commands::Remove(cmd) => commands::remove::execute(cmd, cli.global, config, output),
        Commands::List(cmd) => commands::list::execute(cmd, cli.global, config, output),
        Commands::Init(cmd) => commands::init::execute(cmd, cli.global, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
        Commands::Config(cmd) => commands::config::execute(cmd, cli.global, config, output),
    }
}

/// Log, print and convert to a process status.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    let color = std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();
    eprint!("{}", err.render(verbose, color));

    ExitCode::from(err.exit_code())
}
