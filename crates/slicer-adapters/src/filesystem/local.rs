//! The real disk, through `std::fs`.

use std::io;
use std::path::Path;

use slicer_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{SlicerError, SlicerResult},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> SlicerResult<()> {
        std::fs::create_dir_all(path).map_err(|e| io_failure(path, "create directory", e))
    }

    fn write_file(&self, path: &Path, content: &str) -> SlicerResult<()> {
        std::fs::write(path, content).map_err(|e| io_failure(path, "write", e))
    }

    fn read_to_string(&self, path: &Path) -> SlicerResult<String> {
        std::fs::read_to_string(path).map_err(|e| io_failure(path, "read", e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_file(&self, path: &Path) -> SlicerResult<()> {
        std::fs::remove_file(path).map_err(|e| io_failure(path, "delete", e))
    }
}

fn io_failure(path: &Path, action: &str, err: io::Error) -> SlicerError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("could not {action}: {err}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_reads_and_removes() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let nested = dir.path().join("Features/Invoices");
        let file = nested.join("InvoiceForm.cs");

        fs.create_dir_all(&nested).unwrap();
        fs.write_file(&file, "class InvoiceForm {}").unwrap();
        assert!(fs.exists(&file));
        assert_eq!(fs.read_to_string(&file).unwrap(), "class InvoiceForm {}");

        fs.remove_file(&file).unwrap();
        assert!(!fs.exists(&file));
    }

    #[test]
    fn io_errors_carry_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.cs");
        let err = LocalFilesystem::new().read_to_string(&missing).unwrap_err();
        assert!(matches!(
            err,
            SlicerError::Application(ApplicationError::FilesystemError { ref path, .. })
                if path == &missing
        ));
    }
}
