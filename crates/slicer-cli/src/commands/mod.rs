//! Command handlers, one module per subcommand, plus the input plumbing
//! `generate` and `remove` share.

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod list;
pub mod remove;

use std::path::{Path, PathBuf};

use tracing::debug;

use slicer_adapters::{BuiltinTemplateStore, DirectoryTemplateStore, LocalFilesystem};
use slicer_core::{
    application::{NavigationService, SliceService, TemplateStore},
    domain::{Feature, NavigationOutcome, Pluralizer, Project},
};

use crate::{
    cli::{DEFAULT_MANIFEST, FeatureArgs, ProjectArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    manifest::{FeatureSpec, Manifest},
    output::OutputManager,
};

/// Everything a slice run needs, resolved from flags, files and config.
#[derive(Debug)]
pub struct SliceInputs {
    pub feature: Feature,
    pub projects: Vec<Project>,
    pub manifest: PathBuf,
}

/// Resolve the feature and the target projects.
///
/// The feature comes from `--feature FILE`, else from the flags, else from
/// the manifest's `[feature]` table.
pub fn resolve_inputs(
    feature_args: &FeatureArgs,
    project_args: &ProjectArgs,
    config: &AppConfig,
) -> CliResult<SliceInputs> {
    let manifest_path = project_args
        .manifest
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST));
    let manifest = Manifest::load(&manifest_path)?;

    let spec = match (&feature_args.feature_file, FeatureSpec::from_args(feature_args)) {
        (Some(file), _) => FeatureSpec::load(file)?,
        (None, Some(spec)) => spec,
        (None, None) => manifest.feature.clone().ok_or_else(|| CliError::InvalidInput {
            message: format!(
                "no feature given and '{}' has no [feature] table",
                manifest_path.display()
            ),
            source: None,
        })?,
    };

    let feature = spec.into_feature(&config.generation.primary_key_type, &Pluralizer::default())?;
    let projects = manifest.projects()?;
    debug!(feature = %feature, projects = projects.len(), "Inputs resolved");

    Ok(SliceInputs {
        feature,
        projects,
        manifest: manifest_path,
    })
}

/// `--templates` wins over `templates.directory`; the built-in set is the
/// fallback.
pub fn template_store(flag: Option<&Path>, config: &AppConfig) -> Box<dyn TemplateStore> {
    match flag.or(config.templates.directory.as_deref()) {
        Some(dir) => {
            debug!(dir = %dir.display(), "Using template directory");
            Box::new(DirectoryTemplateStore::new(dir))
        }
        None => Box::new(BuiltinTemplateStore::new()),
    }
}

pub fn slice_service(templates: Option<&Path>, config: &AppConfig) -> SliceService {
    SliceService::new(template_store(templates, config), Box::new(LocalFilesystem::new()))
        .with_navigation(NavigationService::new(
            Pluralizer::default(),
            config.navigation.file.clone(),
        ))
}

/// Navigation guidance is a to-do for the user, so it is shown as a warning.
pub fn print_navigation(outcome: &NavigationOutcome, output: &OutputManager) -> CliResult<()> {
    match outcome {
        NavigationOutcome::ManualActionRequired(action) => {
            output.warning("Manual navigation step required:")?;
            output.print(&format!("  {action}"))?;
        }
        NavigationOutcome::NotApplicable { reason } => {
            output.info(&format!("Navigation unchanged: {reason}"))?;
        }
    }
    Ok(())
}

/// Ask before a destructive step. `assume_yes` and non-interactive sessions
/// skip the prompt.
pub fn confirm(prompt: &str, assume_yes: bool, output: &OutputManager) -> CliResult<bool> {
    if assume_yes || !output.is_interactive() {
        return Ok(true);
    }
    prompt_user(prompt)
}

#[cfg(feature = "interactive")]
fn prompt_user(prompt: &str) -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation".into(),
            source: std::io::Error::other(e),
        })
}

#[cfg(not(feature = "interactive"))]
fn prompt_user(_prompt: &str) -> CliResult<bool> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_manifest(dir: &Path, feature: bool) -> PathBuf {
        let mut text = String::new();
        if feature {
            text.push_str("[feature]\ncomponent_prefix = \"Invoice\"\nlisting = true\n\n");
        }
        text.push_str(
            "[[projects]]\nroot = \"Shared\"\nkind = \"ClientShared\"\nnamespace = \"App.Shared\"\n",
        );
        let path = dir.join("slicer.toml");
        std::fs::write(&path, text).unwrap();
        path
    }

    fn project_args(manifest: PathBuf) -> ProjectArgs {
        ProjectArgs {
            manifest: Some(manifest),
            templates: None,
        }
    }

    #[test]
    fn flags_win_over_manifest_feature() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = write_manifest(dir.path(), true);
        let flags = FeatureArgs {
            prefix: Some("Category".into()),
            form: true,
            ..FeatureArgs::default()
        };

        let inputs = resolve_inputs(&flags, &project_args(manifest), &AppConfig::default()).unwrap();
        assert_eq!(inputs.feature.component_prefix(), "Category");
        assert!(inputs.feature.has_form() && !inputs.feature.has_listing());
        assert_eq!(inputs.projects[0].root_path(), dir.path().join("Shared"));
    }

    #[test]
    fn manifest_feature_is_the_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = write_manifest(dir.path(), true);
        let mut config = AppConfig::default();
        config.generation.primary_key_type = "int".into();

        let inputs =
            resolve_inputs(&FeatureArgs::default(), &project_args(manifest), &config).unwrap();
        assert_eq!(inputs.feature.component_prefix(), "Invoice");
        assert_eq!(inputs.feature.module_namespace(), "Invoices");
        assert_eq!(inputs.feature.primary_key_type().as_str(), "int");
    }

    #[test]
    fn no_feature_anywhere_is_invalid_input() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = write_manifest(dir.path(), false);
        let err = resolve_inputs(&FeatureArgs::default(), &project_args(manifest), &AppConfig::default())
            .unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { .. }));
    }

    #[test]
    fn template_flag_beats_config() {
        let mut config = AppConfig::default();
        config.templates.directory = Some(PathBuf::from("from-config"));
        assert_eq!(template_store(Some(Path::new("from-flag")), &config).source(), "from-flag");
        assert_eq!(template_store(None, &config).source(), "from-config");
        assert_eq!(template_store(None, &AppConfig::default()).source(), "built-in");
    }
}
