//! CLI argument definitions using the clap derive API.
//!
//! This module is the only place that knows about argument names, aliases,
//! help text and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use slicer_core::domain::ProjectKind;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// Manifest looked up in the working directory when `--manifest` is absent.
pub const DEFAULT_MANIFEST: &str = "slicer.toml";

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "slicer",
    bin_name = "slicer",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f52a} Vertical feature slices for multi-project solutions",
    long_about = "Slicer stamps out a complete CRUD feature slice (contracts, data \
                  services, controllers, view models) across every project of a \
                  solution from one feature definition.",
    after_help = "EXAMPLES:\n\
        \x20 slicer generate --prefix Invoice --module Invoices --key guid --listing --form\n\
        \x20 slicer generate --feature invoice.toml --manifest slicer.toml --dry-run\n\
        \x20 slicer remove --prefix Invoice --module Invoices --listing --form\n\
        \x20 slicer list --kind controllers\n\
        \x20 slicer completions bash > /usr/share/bash-completion/completions/slicer",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a feature slice into the manifest's projects.
    #[command(
        visible_alias = "g",
        about = "Generate a feature slice",
        after_help = "EXAMPLES:\n\
            \x20 slicer generate -p Invoice -m Invoices -k guid --listing --form\n\
            \x20 slicer generate -p Category -k int --listing --select-list string\n\
            \x20 slicer generate --feature invoice.toml --overwrite"
    )]
    Generate(GenerateArgs),

    /// Delete the files of a feature slice.
    #[command(
        visible_alias = "rm",
        about = "Remove a generated feature slice",
        after_help = "EXAMPLES:\n\
            \x20 slicer remove -p Invoice -m Invoices --listing --form\n\
            \x20 slicer remove --feature invoice.toml --yes"
    )]
    Remove(RemoveArgs),

    /// List available templates.
    #[command(
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 slicer list\n\
            \x20 slicer list --kind controllers --format csv\n\
            \x20 slicer list --templates ./templates --format json"
    )]
    List(ListArgs),

    /// Write a default configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 slicer init\n\
            \x20 slicer init --force\n\
            \x20 slicer -c ./slicer.config.toml init"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 slicer completions bash > ~/.local/share/bash-completion/completions/slicer\n\
            \x20 slicer completions zsh  > ~/.zfunc/_slicer\n\
            \x20 slicer completions fish > ~/.config/fish/completions/slicer.fish"
    )]
    Completions(CompletionsArgs),

    /// Read and write configuration values.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 slicer config get generation.collision\n\
            \x20 slicer config set generation.primary_key_type int\n\
            \x20 slicer config list"
    )]
    Config(ConfigCommands),
}

// ── feature + project inputs ──────────────────────────────────────────────────

/// How the feature is described: flags, a feature file, or the manifest's
/// `[feature]` table when neither is given.
#[derive(Debug, Clone, Default, Args)]
pub struct FeatureArgs {
    #[arg(
        long = "feature",
        value_name = "FILE",
        conflicts_with_all = ["prefix", "module", "key", "listing", "form", "select_list"],
        help = "Read the feature definition from a TOML file"
    )]
    pub feature_file: Option<PathBuf>,

    /// PascalCase name every generated type starts with.
    #[arg(
        short = 'p',
        long = "prefix",
        value_name = "NAME",
        help = "Component prefix, e.g. Invoice"
    )]
    pub prefix: Option<String>,

    /// Defaults to the plural of the prefix.
    #[arg(
        short = 'm',
        long = "module",
        value_name = "NAMESPACE",
        help = "Module namespace, e.g. Invoices"
    )]
    pub module: Option<String>,

    #[arg(
        short = 'k',
        long = "key",
        value_name = "TYPE",
        help = "Primary key type (string, int, long, guid)"
    )]
    pub key: Option<String>,

    #[arg(long = "listing", help = "Generate the listing slice")]
    pub listing: bool,

    #[arg(long = "form", help = "Generate the form slice")]
    pub form: bool,

    #[arg(
        long = "select-list",
        value_name = "TYPE",
        help = "Generate the select-list slice with this value type"
    )]
    pub select_list: Option<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ProjectArgs {
    #[arg(
        short = 'M',
        long = "manifest",
        value_name = "FILE",
        help = "Project manifest (default: ./slicer.toml)"
    )]
    pub manifest: Option<PathBuf>,

    #[arg(
        short = 't',
        long = "templates",
        value_name = "DIR",
        help = "Template store directory (default: built-in templates)"
    )]
    pub templates: Option<PathBuf>,
}

// ── generate ──────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub feature: FeatureArgs,

    #[command(flatten)]
    pub projects: ProjectArgs,

    #[arg(long = "overwrite", help = "Replace files that already exist")]
    pub overwrite: bool,

    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,

    #[arg(short = 'y', long = "yes", help = "Skip the confirmation prompt")]
    pub yes: bool,
}

// ── remove ────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct RemoveArgs {
    #[command(flatten)]
    pub feature: FeatureArgs,

    #[command(flatten)]
    pub projects: ProjectArgs,

    #[arg(short = 'y', long = "yes", help = "Skip the confirmation prompt")]
    pub yes: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(
        long = "kind",
        value_name = "KIND",
        value_parser = parse_kind,
        help = "Only templates for this project kind"
    )]
    pub kind: Option<ProjectKind>,

    #[arg(
        short = 't',
        long = "templates",
        value_name = "DIR",
        help = "Template store directory (default: built-in templates)"
    )]
    pub templates: Option<PathBuf>,

    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "table",
        help = "Listing format"
    )]
    pub format: ListFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    Table,
    List,
    Json,
    Csv,
}

fn parse_kind(s: &str) -> Result<ProjectKind, String> {
    s.parse().map_err(|e: slicer_core::domain::DomainError| e.to_string())
}

// ── init ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(long = "force", help = "Overwrite an existing configuration file")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Target shell")]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
    Elvish,
}

// ── config ────────────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one value.
    Get {
        #[arg(value_name = "KEY", help = "Dotted key, e.g. generation.collision")]
        key: String,
    },
    /// Persist one value to the configuration file.
    Set {
        #[arg(value_name = "KEY")]
        key: String,
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Print the effective configuration.
    List,
    /// Print the configuration file location.
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn generate_with_flags() {
        let cli = parse(&[
            "slicer", "generate", "-p", "Invoice", "-m", "Invoices", "-k", "guid", "--listing",
            "--form",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.feature.prefix.as_deref(), Some("Invoice"));
        assert_eq!(args.feature.module.as_deref(), Some("Invoices"));
        assert!(args.feature.listing && args.feature.form);
        assert!(args.feature.select_list.is_none());
        assert!(!args.overwrite && !args.dry_run);
    }

    #[test]
    fn generate_alias() {
        let cli = parse(&["slicer", "g", "-p", "Invoice", "--listing", "--dry-run"]);
        assert!(matches!(cli.command, Commands::Generate(ref a) if a.dry_run));
    }

    #[test]
    fn feature_file_conflicts_with_prefix() {
        let res = Cli::try_parse_from([
            "slicer", "generate", "--feature", "f.toml", "--prefix", "Invoice",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn list_kind_accepts_aliases() {
        let cli = parse(&["slicer", "list", "--kind", "server-side-services"]);
        let Commands::List(args) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.kind, Some(ProjectKind::ServerDataServices));
        assert_eq!(args.format, ListFormat::Table);
    }

    #[test]
    fn list_kind_rejects_unknown() {
        assert!(Cli::try_parse_from(["slicer", "list", "--kind", "wpf"]).is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["slicer", "-q", "-v", "list"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["slicer", "list", "-vv", "--log-file", "slicer.log"]);
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.log_file, Some(PathBuf::from("slicer.log")));
    }

    #[test]
    fn config_set() {
        let cli = parse(&["slicer", "config", "set", "generation.collision", "overwrite"]);
        assert!(matches!(
            cli.command,
            Commands::Config(ConfigCommands::Set { ref key, ref value })
                if key == "generation.collision" && value == "overwrite"
        ));
    }
}
