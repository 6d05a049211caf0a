//! Rule violations detected before anything touches the disk.

use thiserror::Error;

use super::resolver::supported_type_tags;

/// Raised by the builders, the resolver and the template checks.
///
/// Cloneable and comparable so reports and tests can hold on to them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid feature definition: {0}")]
    InvalidFeature(String),

    #[error("'{value}' is not a valid {field}: {reason}")]
    InvalidIdentifier {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Invalid project: {0}")]
    InvalidProject(String),

    #[error("Template rejected: {0}")]
    InvalidTemplate(String),

    #[error("Duplicate destination path: {path}")]
    DuplicatePath { path: String },

    #[error("Template destination '{path}' must be relative")]
    AbsolutePathNotAllowed { path: String },

    #[error("Feature is missing its {field}")]
    MissingRequiredField { field: &'static str },

    // Raised while resolving tokens.
    #[error("Unsupported {role} type '{tag}'")]
    UnsupportedType { tag: String, role: &'static str },

    #[error("Unresolved token '__{token}__' in template '{template}'")]
    UnresolvedToken { token: String, template: String },

    #[error("Unknown project kind '{0}'")]
    UnknownProjectKind(String),

    #[error("Unknown template category '{0}'")]
    UnknownCategory(String),
}

impl DomainError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidFeature(_) => vec![
                "Enable at least one of --listing, --form or --select-list".into(),
            ],
            Self::MissingRequiredField { field } => vec![format!("Provide the {field}")],
            Self::InvalidIdentifier { field, .. } => vec![
                format!("The {} must be a valid C# identifier", field),
                "Start with a letter; use letters, digits and '_' only".into(),
                "Reserved words such as 'class' or 'namespace' are not allowed".into(),
            ],
            Self::UnsupportedType { role, .. } => vec![
                format!(
                    "Use a supported {role} type: {}",
                    supported_type_tags().collect::<Vec<_>>().join(", ")
                ),
                "Tags are case-insensitive".into(),
            ],
            Self::UnresolvedToken { token, template } => vec![
                format!("Template '{}' uses '__{}__'", template, token),
                "Known tokens: __ComponentPrefix__, __moduleNamespace__, __primaryKeyType__, \
                 __selectListDataType__, __projectNamespace__"
                    .into(),
                "Fix the template or enable the feature flag that provides this token".into(),
            ],
            Self::UnknownProjectKind(_) => vec![
                "Supported project kinds:".into(),
                "  • ClientShared, ServerDataServices, Controllers".into(),
                "  • MauiNativeApp, RazorComponents, ServiceContracts".into(),
            ],
            Self::DuplicatePath { path } => vec![
                format!("Two templates would write '{}'", path),
                "Check for duplicate projects of the same kind with the same root".into(),
            ],
            Self::InvalidProject(_) => vec![
                "Each [[projects]] entry needs a root, a kind and a namespace".into(),
            ],
            Self::InvalidTemplate(_) | Self::AbsolutePathNotAllowed { .. } => vec![
                "Template paths are <Kind>/<Category>/<relative destination>".into(),
                "Try: slicer list to see how the built-in set is laid out".into(),
            ],
            Self::UnknownCategory(_) => {
                vec!["Template categories: Listing, Form, SelectList".into()]
            }
        }
    }

    /// `Template` marks a broken template rather than bad user input.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidFeature(_)
            | Self::InvalidIdentifier { .. }
            | Self::InvalidProject(_)
            | Self::MissingRequiredField { .. }
            | Self::UnsupportedType { .. }
            | Self::UnknownProjectKind(_)
            | Self::UnknownCategory(_) => ErrorCategory::Validation,
            Self::InvalidTemplate(_)
            | Self::UnresolvedToken { .. }
            | Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Template,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Template,
}
