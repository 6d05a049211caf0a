//! Template store adapters.
//!
//! Every store addresses templates by `/`-separated store path
//! (`<ProjectKind>/<Category>/<destination>`), parsed by
//! [`TemplateFile::from_store_path`](slicer_core::domain::TemplateFile::from_store_path).

mod builtin;
mod directory;
mod memory;

pub use builtin::BuiltinTemplateStore;
pub use directory::DirectoryTemplateStore;
pub use memory::MemoryTemplateStore;

/// Normalise a relative path to forward slashes.
pub(crate) fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
