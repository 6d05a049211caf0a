//! Application services - orchestrate use cases.
//!
//! - [`SliceService`]: the template instantiation engine (plan, write, remove)
//! - [`NavigationService`]: navigation guidance after generation and removal
//! - [`TemplateService`]: read-only queries over the template store

pub mod navigation_service;
pub mod slice_service;
pub mod template_service;

pub use navigation_service::{DEFAULT_NAVIGATION_FILE, NavigationService};
pub use slice_service::{CollisionPolicy, GenerationOptions, SliceService};
pub use template_service::{TemplateInfo, TemplateService};
