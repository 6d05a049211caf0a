//! Application ports (traits) for external dependencies.
//!
//! Adapters in `slicer-adapters` implement these.
//!
//! - `Filesystem`: file operations on the target project trees
//! - `TemplateStore`: access to the Template Store

pub mod output;

pub use output::{Filesystem, TemplateStore};

#[cfg(test)]
pub use output::MockFilesystem;
