//! Output side of a generation run: planned files, collisions and reports.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{
    entities::{common::RelativePath, navigation::NavigationOutcome},
    error::DomainError,
    tokens::SubstitutionMap,
    value_objects::{ProjectKind, TemplateCategory},
};

/// A fully substituted file, ready to write.
///
/// Invariant: neither `relative` nor `content` contain a token. Enforced by
/// [`GeneratedFile::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    pub project_kind: ProjectKind,
    pub category: TemplateCategory,
    /// Store path of the template this came from.
    pub template: String,
    /// Destination below the project root.
    #[serde(serialize_with = "serialize_relative")]
    pub relative: RelativePath,
    /// Destination joined onto the project root.
    pub path: PathBuf,
    #[serde(skip)]
    pub content: String,
}

impl GeneratedFile {
    pub fn new(
        project_kind: ProjectKind,
        category: TemplateCategory,
        template: impl Into<String>,
        relative: RelativePath,
        path: PathBuf,
        content: String,
    ) -> Result<Self, DomainError> {
        let template = template.into();
        SubstitutionMap::ensure_resolved(&relative.to_slash_string(), &template)?;
        SubstitutionMap::ensure_resolved(&content, &template)?;
        Ok(Self {
            project_kind,
            category,
            template,
            relative,
            path,
            content,
        })
    }
}

fn serialize_relative<S: serde::Serializer>(
    path: &RelativePath,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_slash_string())
}

/// A destination that already existed while running in non-destructive mode.
///
/// Recoverable: collected into [`GenerationReport::skipped`], never aborts
/// the batch.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{} already exists (from template '{template}'), skipped", path.display())]
pub struct DestinationCollision {
    pub path: PathBuf,
    pub template: String,
}

/// What a run is going to do, computed before anything touches the disk.
#[derive(Debug, Clone, Default)]
pub struct GenerationPlan {
    /// Files that will be written, in template order.
    pub files: Vec<GeneratedFile>,
    /// Files whose destination already exists and will be skipped.
    pub collisions: Vec<DestinationCollision>,
    /// Files whose destination already exists and will be replaced.
    pub overwrites: Vec<PathBuf>,
}

impl GenerationPlan {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.collisions.is_empty()
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub run_id: Uuid,
    pub written: Vec<GeneratedFile>,
    pub skipped: Vec<DestinationCollision>,
    /// `false` for dry runs.
    pub applied: bool,
    pub navigation: Option<NavigationOutcome>,
}

impl GenerationReport {
    pub fn written_paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.written.iter().map(|f| &f.path)
    }
}

/// Result of removing a feature's generated files.
#[derive(Debug, Clone, Serialize)]
pub struct RemovalReport {
    pub run_id: Uuid,
    pub removed: Vec<PathBuf>,
    pub missing: Vec<PathBuf>,
    pub navigation: NavigationOutcome,
}
