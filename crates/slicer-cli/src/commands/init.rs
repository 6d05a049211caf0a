//! `slicer init`: write a default configuration file.

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Writes to `--config` when given, else to the platform config location.
pub fn execute(args: InitArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let target = global.config.unwrap_or_else(AppConfig::config_path);

    if target.exists() && !args.force {
        output.warning(&format!(
            "{} is already there; pass --force to replace it with the defaults",
            target.display()
        ))?;
        return Ok(());
    }

    AppConfig::default()
        .save(&target)
        .map_err(|e| CliError::config(format!("Failed to write '{}'", target.display()), e))?;
    output.success(&format!("Wrote default settings to {}", target.display()))?;
    Ok(())
}
