//! `slicer config`: read and write configuration values.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::{AppConfig, KEYS},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::Set { key, value } => {
            let path = file_path(&global);
            set_in_file(&path, &key, &value)?;
            output.success(&format!("{key} = {value} (saved to {})", path.display()))?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                return output.json(&config);
            }
            output.header("Current Configuration:")?;
            let serialised = toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                message: format!("Failed to serialise config: {e}"),
                source: Some(Box::new(e)),
            })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.print(&file_path(&global).display().to_string())?;
        }
    }

    Ok(())
}

fn file_path(global: &GlobalArgs) -> PathBuf {
    global.config.clone().unwrap_or_else(AppConfig::config_path)
}

fn set_in_file(path: &Path, key: &str, value: &str) -> CliResult<()> {
    let current = AppConfig::read_file(path)
        .map_err(|e| CliError::config(format!("Failed to read '{}'", path.display()), e))?;
    let updated = set_config_value(&current, key, value)?;
    updated
        .save(path)
        .map_err(|e| CliError::config(format!("Failed to write '{}'", path.display()), e))
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn unknown_key(key: &str) -> CliError {
    CliError::ConfigError {
        message: format!("Unknown config key '{key}' (known: {})", KEYS.join(", ")),
        source: None,
    }
}

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    if !KEYS.contains(&key) {
        return Err(unknown_key(key));
    }
    let tree = serde_json::to_value(config)?;
    let value = key
        .split('.')
        .try_fold(&tree, |node, part| node.get(part));
    Ok(match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    })
}

/// Returns the updated config; values are type-checked by deserialising the
/// result.
fn set_config_value(config: &AppConfig, key: &str, value: &str) -> CliResult<AppConfig> {
    let Some((section, field)) = key.split_once('.').filter(|_| KEYS.contains(&key)) else {
        return Err(unknown_key(key));
    };

    let mut tree = serde_json::to_value(config)?;
    let table = tree
        .get_mut(section)
        .and_then(Value::as_object_mut)
        .ok_or_else(|| unknown_key(key))?;
    let parsed = match table.get(field) {
        Some(Value::Bool(_)) => value
            .parse::<bool>()
            .map(Value::Bool)
            .map_err(|_| invalid_value(key, value, "expected true or false"))?,
        _ => Value::String(value.to_string()),
    };
    table.insert(field.to_string(), parsed);

    serde_json::from_value(tree).map_err(|e| invalid_value(key, value, &e.to_string()))
}

fn invalid_value(key: &str, value: &str, reason: &str) -> CliError {
    CliError::InvalidInput {
        message: format!("'{value}' is not a valid value for {key}: {reason}"),
        source: None,
    }
}
