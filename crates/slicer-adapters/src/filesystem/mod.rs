//! [`Filesystem`](slicer_core::application::Filesystem) implementations.

mod local;
mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
