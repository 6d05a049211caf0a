//! Failures raised while a service drives the ports.
//!
//! Rule violations on features, projects or templates live in
//! [`DomainError`](crate::domain::DomainError) instead.

use std::path::PathBuf;

use thiserror::Error;

use crate::error::ErrorCategory;

#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A read, write or delete through the [`Filesystem`](super::ports::Filesystem) port failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// An in-memory adapter found its lock poisoned.
    #[error("In-memory store lock poisoned")]
    StoreLockError,

    /// The template store could not be read.
    #[error("Template store unavailable: {reason}")]
    TemplateStore { reason: String },

    /// No template applies to the feature and projects given.
    #[error("No templates apply to feature {feature}")]
    NoTemplates { feature: String },

    /// Navigation guidance could not be composed.
    #[error("Navigation guidance failed for {feature}: {reason}")]
    NavigationGuidance { feature: String, reason: String },

    /// Deleting a partially written file after a failed run did not work.
    #[error("Rollback failed for {path}: {reason}")]
    RollbackFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Could not use {}", path.display()),
                "Make sure every project root in the manifest exists and is writable".into(),
            ],
            Self::StoreLockError => vec!["Another thread panicked while holding the store".into()],
            Self::TemplateStore { .. } => vec![
                "Check the --templates directory or the templates.directory setting".into(),
                "Omit both to use the built-in templates".into(),
            ],
            Self::NoTemplates { .. } => vec![
                "Check that the manifest lists projects of the right kinds".into(),
                "Enable at least one of --listing, --form or --select-list".into(),
                "Try: slicer list to see available templates".into(),
            ],
            Self::NavigationGuidance { .. } => vec![
                "Generated files were kept".into(),
                "Register the route by hand in the navigation file".into(),
            ],
            Self::RollbackFailed { path, .. } => vec![
                format!("Inspect {} by hand", path.display()),
                "Files from the failed run may remain".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::RollbackFailed { .. } | Self::StoreLockError => {
                ErrorCategory::Internal
            }
            Self::TemplateStore { .. } => ErrorCategory::Configuration,
            Self::NoTemplates { .. } => ErrorCategory::NotFound,
            Self::NavigationGuidance { .. } => ErrorCategory::Validation,
        }
    }
}
