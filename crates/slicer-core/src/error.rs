//! The crate-wide error, [`SlicerError`].
//!
//! Domain rule violations and orchestration failures share one type so the
//! CLI can map either to a message, a list of hints and an exit code.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{self, DomainError};

#[derive(Debug, Error, Clone)]
pub enum SlicerError {
    /// A feature, project or template broke a domain rule.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Stores, filesystem or navigation failed while running a slice.
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl SlicerError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(inner) => inner.suggestions(),
            Self::Application(inner) => inner.suggestions(),
        }
    }

    /// Coarse classification used for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(inner) => match inner.category() {
                domain::ErrorCategory::Validation => ErrorCategory::Validation,
                domain::ErrorCategory::Template => ErrorCategory::Template,
            },
            Self::Application(inner) => inner.category(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Template,
    NotFound,
    Configuration,
    Internal,
}

pub type SlicerResult<T> = Result<T, SlicerError>;
