//! A [`Filesystem`] held entirely in memory, for service tests.

use std::{
    collections::{BTreeMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use slicer_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{SlicerError, SlicerResult},
};

/// Clones share state, so a test can hand one clone to a service and inspect
/// the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    state: Arc<RwLock<State>>,
}

#[derive(Debug, Default)]
struct State {
    files: BTreeMap<PathBuf, String>,
    dirs: HashSet<PathBuf>,
    /// Writes to these fail with "Permission denied".
    denied: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.read().ok()?.files.get(path).cloned()
    }

    /// Every stored file, in path order.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.read()
            .map(|state| state.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Make every later write to `path` fail.
    pub fn deny_writes(&self, path: impl Into<PathBuf>) {
        if let Ok(mut state) = self.write() {
            state.denied.insert(path.into());
        }
    }

    fn read(&self) -> SlicerResult<RwLockReadGuard<'_, State>> {
        self.state
            .read()
            .map_err(|_| ApplicationError::StoreLockError.into())
    }

    fn write(&self) -> SlicerResult<RwLockWriteGuard<'_, State>> {
        self.state
            .write()
            .map_err(|_| ApplicationError::StoreLockError.into())
    }
}

fn fs_error(path: &Path, reason: &str) -> SlicerError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
    .into()
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> SlicerResult<()> {
        let mut state = self.write()?;
        for ancestor in path.ancestors().filter(|a| !a.as_os_str().is_empty()) {
            state.dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> SlicerResult<()> {
        let mut state = self.write()?;
        if state.denied.contains(path) {
            return Err(fs_error(path, "Permission denied"));
        }
        let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
        if parent.is_some_and(|p| !state.dirs.contains(p)) {
            return Err(fs_error(path, "Parent directory does not exist"));
        }
        state.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> SlicerResult<String> {
        self.read()?
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| fs_error(path, "No such file"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.read()
            .map(|state| state.files.contains_key(path) || state.dirs.contains(path))
            .unwrap_or(false)
    }

    fn remove_file(&self, path: &Path) -> SlicerResult<()> {
        self.write()?
            .files
            .remove(path)
            .map(drop)
            .ok_or_else(|| fs_error(path, "No such file"))
    }
}
