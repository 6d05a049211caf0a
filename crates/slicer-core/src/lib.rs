//! Slicer Core - vertical slice generation.
//!
//! Given a feature (a component prefix, a module namespace, a key type and
//! which slices to build) and a list of target projects, Slicer instantiates a
//! set of token templates into each project tree.
//!
//! ## Layers
//!
//! ```text
//! slicer-cli ──> application::services ──> application::ports ──> slicer-adapters
//!   (clap)       SliceService               Filesystem              LocalFilesystem
//!                NavigationService          TemplateStore           BuiltinTemplateStore
//!                TemplateService                                    DirectoryTemplateStore
//!
//! domain (no I/O): Feature, Project, Token, TokenResolver, Pluralizer, TemplateFile
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use slicer_core::prelude::*;
//!
//! # fn run(store: Box<dyn TemplateStore>, fs: Box<dyn Filesystem>) -> SlicerResult<()> {
//! let feature = Feature::builder()
//!     .component_prefix("Invoice")
//!     .module_namespace("Invoices")
//!     .primary_key_type("guid")
//!     .listing(true)
//!     .form(true)
//!     .build()?;
//!
//! let projects = vec![Project::new(
//!     "src/ExpenseTracker.ClientShared",
//!     ProjectKind::ClientShared,
//!     "ExpenseTracker.ClientShared",
//! )?];
//!
//! let service = SliceService::new(store, fs);
//! let report = service.generate(&feature, &projects, &GenerationOptions::default())?;
//! println!("{} files written", report.written.len());
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod error;

/// The types a front end needs to drive a run.
pub mod prelude {
    pub use crate::application::{
        CollisionPolicy, GenerationOptions, NavigationService, SliceService, TemplateInfo,
        TemplateService,
        ports::{Filesystem, TemplateStore},
    };
    pub use crate::domain::{
        Feature, FeatureBuilder, GenerationReport, NavigationOutcome, Pluralizer, Project,
        ProjectKind, RemovalReport, TemplateCategory, TemplateFile,
    };
    pub use crate::error::{SlicerError, SlicerResult};
}

