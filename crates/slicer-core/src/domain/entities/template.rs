//! Templates as they come out of a template store.
//!
//! A store addresses every template by a `/`-separated store path:
//!
//! ```text
//! <ProjectKind>/<Category>/<destination path, may contain tokens>
//! ```
//!
//! e.g. `ClientShared/Form/Features/__moduleNamespace__/__ComponentPrefix__FormClientDataService.cs`.
//! Only the destination part ends up on disk, below the target project root.

use std::str::FromStr;

use crate::domain::{
    entities::common::RelativePath,
    error::DomainError,
    value_objects::{ProjectKind, TemplateCategory},
};

/// One template: text with tokens, plus where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    store_path: String,
    kind: ProjectKind,
    category: TemplateCategory,
    destination: RelativePath,
    content: String,
}

impl TemplateFile {
    /// Parse a store path and attach `content`.
    ///
    /// # Errors
    ///
    /// - [`DomainError::UnknownProjectKind`] / [`DomainError::UnknownCategory`]
    ///   for unrecognised leading segments
    /// - [`DomainError::InvalidTemplate`] when the destination part is missing
    /// - path errors from [`RelativePath`] for absolute or escaping paths
    pub fn from_store_path(
        store_path: &str,
        content: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let normalized = store_path.replace('\\', "/");
        if normalized.starts_with('/') {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: store_path.to_string(),
            });
        }

        let segments: Vec<&str> = normalized.split('/').filter(|s| !s.is_empty()).collect();
        let [kind, category, rest @ ..] = segments.as_slice() else {
            return Err(DomainError::InvalidTemplate(format!(
                "'{store_path}' is not of the form <ProjectKind>/<Category>/<path>"
            )));
        };
        if rest.is_empty() {
            return Err(DomainError::InvalidTemplate(format!(
                "'{store_path}' has no destination path"
            )));
        }

        Ok(Self {
            store_path: segments.join("/"),
            kind: ProjectKind::from_str(kind)?,
            category: TemplateCategory::from_str(category)?,
            destination: RelativePath::from_segments(rest)?,
            content: content.into(),
        })
    }

    /// Normalised store path, used as the template's name in errors and logs.
    pub fn store_path(&self) -> &str {
        &self.store_path
    }

    pub fn kind(&self) -> ProjectKind {
        self.kind
    }

    pub fn category(&self) -> TemplateCategory {
        self.category
    }

    /// Destination below the project root, tokens still in place.
    pub fn destination(&self) -> &RelativePath {
        &self.destination
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
