//! Adapters behind the `slicer-core` ports.
//!
//! All disk access lives here: the local filesystem, an in-memory one for
//! tests, and the three template stores (built-in, directory, in-memory).

pub mod filesystem;
pub mod template_store;

pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use template_store::{BuiltinTemplateStore, DirectoryTemplateStore, MemoryTemplateStore};
