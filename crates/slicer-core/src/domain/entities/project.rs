use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{
    entities::common::RelativePath, error::DomainError, validation::DomainValidator,
    value_objects::ProjectKind,
};

/// A generation target: one project tree on disk.
///
/// Discovered by the caller once per invocation and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    root_path: PathBuf,
    kind: ProjectKind,
    root_namespace: String,
}

impl Project {
    /// Create and validate a project.
    pub fn new(
        root_path: impl Into<PathBuf>,
        kind: ProjectKind,
        root_namespace: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let project = Self {
            root_path: root_path.into(),
            kind,
            root_namespace: root_namespace.into(),
        };
        project.validate()?;
        Ok(project)
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    pub fn kind(&self) -> ProjectKind {
        self.kind
    }

    pub fn root_namespace(&self) -> &str {
        &self.root_namespace
    }

    /// Absolute (or caller-relative) location of a path inside this project.
    pub fn resolve(&self, relative: &RelativePath) -> PathBuf {
        self.root_path.join(relative.as_path())
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.root_path.as_os_str().is_empty() {
            return Err(DomainError::InvalidProject(format!(
                "{} project has an empty root path",
                self.kind
            )));
        }
        DomainValidator::validate_namespace("project namespace", &self.root_namespace)
    }
}
