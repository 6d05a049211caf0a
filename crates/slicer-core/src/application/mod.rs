//! Application layer for Slicer.
//!
//! This layer contains:
//! - **Services**: use case orchestration (SliceService, NavigationService, TemplateService)
//! - **Ports**: traits for the filesystem and the template store
//! - **Errors**: orchestration failures
//!
//! Business rules (token grammar, type table, pluralization) live in
//! `crate::domain`; services only sequence them and perform I/O through ports.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    CollisionPolicy, DEFAULT_NAVIGATION_FILE, GenerationOptions, NavigationService,
    SliceService, TemplateInfo, TemplateService,
};

pub use ports::{Filesystem, TemplateStore};

pub use error::ApplicationError;
