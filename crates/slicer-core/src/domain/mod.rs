//! Core domain layer for Slicer.
//!
//! Pure business logic: the feature model, the token grammar, type spelling,
//! pluralization and template path parsing. Everything touching the disk is
//! reached through ports defined in the application layer.
//!
//! ## Rules
//!
//! - **No I/O**: no filesystem, network, clock or environment access
//! - **No async**: domain logic is synchronous
//! - **Few crates**: std, `thiserror`, `serde` derives, `uuid` for run ids
//! - **Immutable entities**: all domain objects are `Clone + PartialEq`

pub mod entities;
pub mod error;
pub mod pluralize;
pub mod resolver;
pub mod tokens;
pub mod value_objects;

mod validation;

pub use entities::{
    DestinationCollision, Feature, FeatureBuilder, GeneratedFile, GenerationPlan,
    GenerationReport, ManualAction, NavigationEdit, NavigationOutcome, Project, RemovalReport,
    TemplateFile, common::RelativePath,
};
pub use error::{DomainError, ErrorCategory};
pub use pluralize::{Pluralizer, pluralize};
pub use resolver::{TokenResolver, spell_type, supported_type_tags};
pub use tokens::{SubstitutionMap, Token, contains_tokens};
pub use validation::DomainValidator;
pub use value_objects::{ProjectKind, TemplateCategory, TypeTag};
