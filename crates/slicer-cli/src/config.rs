//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The CLI
//! owns configuration; core services receive plain values built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `SLICER_*` environment variables, `__` between nested keys
//!    (`SLICER_GENERATION__COLLISION=overwrite`)
//! 3. Config file (`--config`, else the platform config directory)
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};

use slicer_core::application::{CollisionPolicy, DEFAULT_NAVIGATION_FILE};

/// Prefix of environment variables read into the configuration.
pub const ENV_PREFIX: &str = "SLICER";

/// Every key `config get` / `config set` understand.
pub const KEYS: [&str; 6] = [
    "generation.collision",
    "generation.primary_key_type",
    "templates.directory",
    "navigation.file",
    "output.no_color",
    "output.format",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub generation: GenerationConfig,
    pub templates: TemplateConfig,
    pub navigation: NavigationConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Applied when `--overwrite` is not given.
    pub collision: CollisionPolicy,
    /// Used when `--key` is not given.
    pub primary_key_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TemplateConfig {
    /// On-disk template store; the built-in templates are used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Navigation-definition file, relative to the native app project.
    pub file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            collision: CollisionPolicy::Skip,
            primary_key_type: "guid".into(),
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_NAVIGATION_FILE),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, file and environment.
    ///
    /// A file passed explicitly via `--config` must exist; the default
    /// location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let required = config_file.is_some();
        let path = config_file.cloned().unwrap_or_else(Self::config_path);
        Self::load_with_env(&path, required, None)
    }

    /// Like [`AppConfig::load`], with an explicit environment map instead of
    /// the process environment when `env` is `Some`.
    pub fn load_with_env(
        path: &Path,
        required: bool,
        env: Option<config::Map<String, String>>,
    ) -> anyhow::Result<Self> {
        let environment = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(env);

        let config = Self::layered(path, required)?
            .add_source(environment)
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Defaults overlaid with the file only, ignoring the environment. This is
    /// what `config set` edits.
    pub fn read_file(path: &Path) -> anyhow::Result<Self> {
        Ok(Self::layered(path, false)?.build()?.try_deserialize()?)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let toml = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml)?;
        Ok(())
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.slicer.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "slicer", "slicer")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".slicer.toml"))
    }

    fn layered(path: &Path, required: bool) -> anyhow::Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::from(path).format(FileFormat::Toml).required(required)))
    }
}
