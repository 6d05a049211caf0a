//! What the services need from the outside world. `slicer-adapters`
//! supplies the implementations.

use std::path::Path;

use crate::domain::TemplateFile;
use crate::error::SlicerResult;

/// Access to the target project trees. Implementations:
/// - `slicer_adapters::filesystem::LocalFilesystem` (production)
/// - `slicer_adapters::filesystem::MemoryFilesystem` (testing)
///
/// No locking. Callers serialize generation runs against the same tree.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Like `mkdir -p`.
    fn create_dir_all(&self, path: &Path) -> SlicerResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> SlicerResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> SlicerResult<String>;

    fn exists(&self, path: &Path) -> bool;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> SlicerResult<()>;
}

/// Where template text comes from. Implementations:
/// - `slicer_adapters::template_store::BuiltinTemplateStore` (compiled-in templates)
/// - `slicer_adapters::template_store::DirectoryTemplateStore` (a store directory on disk)
/// - `slicer_adapters::template_store::MemoryTemplateStore` (testing)
///
/// Templates are loaded fresh on every call.
pub trait TemplateStore: Send + Sync {
    /// Every template in the store, sorted by store path.
    fn templates(&self) -> SlicerResult<Vec<TemplateFile>>;

    /// Human-readable origin, e.g. `built-in` or a directory path.
    fn source(&self) -> String;
}
