//! Domain value objects: ProjectKind, TemplateCategory, TypeTag.
//!
//! # Design
//!
//! These are pure value types, `Copy` and equal by value. This file defines
//! the types, their string representations and their `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Done (the template store grammar picks the new name up automatically)

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ProjectKind ───────────────────────────────────────────────────────────────

/// Which kind of target project a template belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProjectKind {
    ClientShared,
    ServerDataServices,
    Controllers,
    MauiNativeApp,
    RazorComponents,
    ServiceContracts,
}

impl ProjectKind {
    pub const ALL: [ProjectKind; 6] = [
        Self::ClientShared,
        Self::ServerDataServices,
        Self::Controllers,
        Self::MauiNativeApp,
        Self::RazorComponents,
        Self::ServiceContracts,
    ];

    /// Canonical name, also the top-level directory in a template store.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ClientShared => "ClientShared",
            Self::ServerDataServices => "ServerDataServices",
            Self::Controllers => "Controllers",
            Self::MauiNativeApp => "MauiNativeApp",
            Self::RazorComponents => "RazorComponents",
            Self::ServiceContracts => "ServiceContracts",
        }
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "clientshared" => Ok(Self::ClientShared),
            "serverdataservices" | "serversideservices" => Ok(Self::ServerDataServices),
            "controllers" => Ok(Self::Controllers),
            "mauinativeapp" | "maui" => Ok(Self::MauiNativeApp),
            "razorcomponents" | "razor" => Ok(Self::RazorComponents),
            "servicecontracts" | "contracts" => Ok(Self::ServiceContracts),
            _ => Err(DomainError::UnknownProjectKind(s.to_string())),
        }
    }
}

// ── TemplateCategory ──────────────────────────────────────────────────────────

/// Template category, switched on and off by the feature flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TemplateCategory {
    Listing,
    Form,
    SelectList,
}

impl TemplateCategory {
    pub const ALL: [TemplateCategory; 3] = [Self::Listing, Self::Form, Self::SelectList];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Listing => "Listing",
            Self::Form => "Form",
            Self::SelectList => "SelectList",
        }
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "listing" => Ok(Self::Listing),
            "form" => Ok(Self::Form),
            "selectlist" => Ok(Self::SelectList),
            _ => Err(DomainError::UnknownCategory(s.to_string())),
        }
    }
}

// ── TypeTag ───────────────────────────────────────────────────────────────────

/// A semantic type tag as supplied by the caller (`"guid"`, `"int"`, ...).
///
/// Tags are kept verbatim; the token resolver decides whether a tag has a
/// spelling in the generated language. This keeps unsupported tags
/// representable so they fail at resolution with a proper error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeTag(String);

impl TypeTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeTag {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TypeTag {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_kind_parses_canonical_and_aliases() {
        assert_eq!(
            ProjectKind::from_str("ClientShared").unwrap(),
            ProjectKind::ClientShared
        );
        assert_eq!(
            ProjectKind::from_str("ServerSideServices").unwrap(),
            ProjectKind::ServerDataServices
        );
        assert_eq!(
            ProjectKind::from_str("server-data-services").unwrap(),
            ProjectKind::ServerDataServices
        );
        assert_eq!(ProjectKind::from_str("maui").unwrap(), ProjectKind::MauiNativeApp);
        assert!(matches!(
            ProjectKind::from_str("Wpf"),
            Err(DomainError::UnknownProjectKind(_))
        ));
    }

    #[test]
    fn project_kind_display_round_trips() {
        for kind in ProjectKind::ALL {
            assert_eq!(ProjectKind::from_str(&kind.to_string()).unwrap(), kind);
        }
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!(
            TemplateCategory::from_str("selectlist").unwrap(),
            TemplateCategory::SelectList
        );
        assert_eq!(
            TemplateCategory::from_str("Select_List").unwrap(),
            TemplateCategory::SelectList
        );
        assert!(TemplateCategory::from_str("Details").is_err());
    }
}
