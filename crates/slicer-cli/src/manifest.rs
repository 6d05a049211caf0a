//! Feature and project inputs read from TOML.
//!
//! A project manifest (`slicer.toml`) lists the target projects and may
//! carry a default feature:
//!
//! ```toml
//! [feature]
//! component_prefix = "Invoice"
//! module_namespace = "Invoices"
//! primary_key_type = "guid"
//! listing = true
//! form = true
//!
//! [[projects]]
//! root = "ExpenseTracker.ClientShared"
//! kind = "ClientShared"
//! namespace = "ExpenseTracker.ClientShared"
//! ```
//!
//! Relative project roots are resolved against the manifest's directory.
//! A standalone feature file has the `[feature]` fields at top level.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use slicer_core::{
    domain::{Feature, Pluralizer, Project, ProjectKind},
    error::SlicerError,
};

use crate::{
    cli::FeatureArgs,
    error::{CliError, CliResult, IntoCli},
};

/// A feature as written by a user, before defaults and validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureSpec {
    pub component_prefix: String,
    /// Defaults to the plural of `component_prefix`.
    #[serde(default)]
    pub module_namespace: Option<String>,
    /// Defaults to `generation.primary_key_type` from the configuration.
    #[serde(default)]
    pub primary_key_type: Option<String>,
    #[serde(default)]
    pub listing: bool,
    #[serde(default)]
    pub form: bool,
    /// Element type of the select list; its presence enables the slice.
    #[serde(default)]
    pub select_list: Option<String>,
}

impl FeatureSpec {
    /// Read a standalone feature file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_cli_context(|| format!("Failed to read feature file '{}'", path.display()))?;
        toml::from_str(&text).map_err(|e| CliError::InvalidFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Flags from the command line, when a prefix was given.
    pub fn from_args(args: &FeatureArgs) -> Option<Self> {
        let prefix = args.prefix.clone()?;
        Some(Self {
            component_prefix: prefix,
            module_namespace: args.module.clone(),
            primary_key_type: args.key.clone(),
            listing: args.listing,
            form: args.form,
            select_list: args.select_list.clone(),
        })
    }

    /// Apply defaults and validate.
    ///
    /// With no slice selected at all, listing and form are generated.
    pub fn into_feature(self, default_key: &str, pluralizer: &Pluralizer) -> CliResult<Feature> {
        let (listing, form) = if !self.listing && !self.form && self.select_list.is_none() {
            (true, true)
        } else {
            (self.listing, self.form)
        };
        let module = self
            .module_namespace
            .unwrap_or_else(|| pluralizer.pluralize(&self.component_prefix));
        let key = self.primary_key_type.unwrap_or_else(|| default_key.to_string());

        let mut builder = Feature::builder()
            .component_prefix(self.component_prefix)
            .module_namespace(module)
            .primary_key_type(key)
            .listing(listing)
            .form(form);
        if let Some(data_type) = self.select_list {
            builder = builder.select_list(data_type);
        }
        builder
            .build()
            .map_err(|e| CliError::Core(SlicerError::from(e)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectEntry {
    pub root: PathBuf,
    pub kind: String,
    /// Root namespace of the project, substituted for `__projectNamespace__`.
    pub namespace: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub feature: Option<FeatureSpec>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(skip)]
    path: PathBuf,
}

impl Manifest {
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.is_file() {
            return Err(CliError::ManifestNotFound {
                path: path.to_path_buf(),
            });
        }
        let text = std::fs::read_to_string(path)
            .with_cli_context(|| format!("Failed to read manifest '{}'", path.display()))?;
        let mut manifest: Manifest = toml::from_str(&text).map_err(|e| CliError::InvalidFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        manifest.path = path.to_path_buf();
        debug!(
            manifest = %path.display(),
            projects = manifest.projects.len(),
            "Manifest loaded"
        );
        Ok(manifest)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory relative project roots are resolved against.
    pub fn base_dir(&self) -> &Path {
        self.path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }

    /// The declared projects, validated, with resolved roots.
    pub fn projects(&self) -> CliResult<Vec<Project>> {
        if self.projects.is_empty() {
            return Err(self.invalid("no [[projects]] declared".into()));
        }

        let base = self.base_dir();
        self.projects
            .iter()
            .map(|entry| {
                let kind: ProjectKind = entry
                    .kind
                    .parse()
                    .map_err(|e: slicer_core::domain::DomainError| self.invalid(e.to_string()))?;
                let root = if entry.root.is_absolute() {
                    entry.root.clone()
                } else {
                    base.join(&entry.root)
                };
                Project::new(root, kind, entry.namespace.clone())
                    .map_err(|e| self.invalid(e.to_string()))
            })
            .collect()
    }

    fn invalid(&self, reason: String) -> CliError {
        CliError::InvalidFile {
            path: self.path.clone(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"
[feature]
component_prefix = "Invoice"
module_namespace = "Invoices"
primary_key_type = "guid"
listing = true
form = true

[[projects]]
root = "ExpenseTracker.ClientShared"
kind = "ClientShared"
namespace = "ExpenseTracker.ClientShared"

[[projects]]
root = "/srv/ExpenseTracker.Server.Controllers"
kind = "Controllers"
namespace = "ExpenseTracker.Server.Controllers"
"#;

    fn write_manifest(dir: &Path, text: &str) -> PathBuf {
        let path = dir.join("slicer.toml");
        std::fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn resolves_relative_roots_against_manifest_dir() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = Manifest::load(&write_manifest(dir.path(), MANIFEST)).unwrap();
        let projects = manifest.projects().unwrap();

        assert_eq!(projects.len(), 2);
        assert_eq!(
            projects[0].root_path(),
            dir.path().join("ExpenseTracker.ClientShared")
        );
        assert_eq!(projects[1].kind(), ProjectKind::Controllers);
        assert_eq!(
            projects[1].root_path(),
            Path::new("/srv/ExpenseTracker.Server.Controllers")
        );
        assert_eq!(
            manifest.feature.as_ref().unwrap().component_prefix,
            "Invoice"
        );
    }

    #[test]
    fn missing_manifest_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = Manifest::load(&dir.path().join("slicer.toml")).unwrap_err();
        assert!(matches!(err, CliError::ManifestNotFound { .. }));
    }

    #[test]
    fn unknown_kind_is_reported_with_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(
            dir.path(),
            "[[projects]]\nroot = \"a\"\nkind = \"Wpf\"\nnamespace = \"A\"\n",
        );
        let err = Manifest::load(&path).unwrap().projects().unwrap_err();
        assert!(matches!(err, CliError::InvalidFile { ref reason, .. } if reason.contains("Wpf")));
    }

    #[test]
    fn empty_project_list_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(dir.path(), "");
        assert!(Manifest::load(&path).unwrap().projects().is_err());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(dir.path(), "[[project]]\nroot = \"a\"\n");
        assert!(matches!(
            Manifest::load(&path),
            Err(CliError::InvalidFile { .. })
        ));
    }

    #[test]
    fn feature_defaults_module_key_and_slices() {
        let spec = FeatureSpec {
            component_prefix: "Category".into(),
            ..FeatureSpec::default()
        };
        let feature = spec.into_feature("int", &Pluralizer::default()).unwrap();
        assert_eq!(feature.module_namespace(), "Categories");
        assert_eq!(feature.primary_key_type().as_str(), "int");
        assert!(feature.has_listing() && feature.has_form());
        assert!(!feature.has_select_list());
    }

    #[test]
    fn select_list_alone_does_not_enable_other_slices() {
        let spec = FeatureSpec {
            component_prefix: "Category".into(),
            select_list: Some("string".into()),
            ..FeatureSpec::default()
        };
        let feature = spec.into_feature("guid", &Pluralizer::default()).unwrap();
        assert!(feature.has_select_list());
        assert!(!feature.has_listing() && !feature.has_form());
    }

    #[test]
    fn invalid_prefix_is_a_core_error() {
        let spec = FeatureSpec {
            component_prefix: "9Lives".into(),
            ..FeatureSpec::default()
        };
        let err = spec.into_feature("guid", &Pluralizer::default()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn from_args_requires_prefix() {
        assert!(FeatureSpec::from_args(&FeatureArgs::default()).is_none());
        let args = FeatureArgs {
            prefix: Some("Invoice".into()),
            listing: true,
            ..FeatureArgs::default()
        };
        let spec = FeatureSpec::from_args(&args).unwrap();
        assert!(spec.listing && !spec.form);
    }

    #[test]
    fn feature_file_at_top_level() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("invoice.toml");
        std::fs::write(
            &path,
            "component_prefix = \"Invoice\"\nprimary_key_type = \"guid\"\nlisting = true\n",
        )
        .unwrap();
        let spec = FeatureSpec::load(&path).unwrap();
        assert_eq!(spec.component_prefix, "Invoice");
        assert!(spec.listing);
    }
}
