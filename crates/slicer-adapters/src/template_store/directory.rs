//! Template store backed by a directory on disk.
//!
//! # Directory layout expected
//!
//! ```text
//! templates/
//! ├── ClientShared/
//! │   ├── Listing/
//! │   │   └── Features/__moduleNamespace__/__ComponentPrefix__ListingClientDataService.cs
//! │   └── Form/
//! │       └── ...
//! ├── Controllers/
//! │   └── ...
//! └── ServerSideServices/      ← legacy name, read as ServerDataServices
//!     └── ...
//! ```
//!
//! Files whose path does not fit `<ProjectKind>/<Category>/<path>`, or that
//! are not UTF-8, are skipped with a `WARN` log; they never block the rest of
//! the store. Hidden entries (`.DS_Store`, `.git/`, vim swap files) and
//! `~` backups are skipped the same way.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use slicer_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::TemplateFile,
    error::SlicerResult,
};

use super::normalize_path;

/// Loads templates from a Template Store directory on every call.
#[derive(Debug, Clone)]
pub struct DirectoryTemplateStore {
    root: PathBuf,
}

impl DirectoryTemplateStore {
    /// The directory does not need to exist yet; [`TemplateStore::templates`]
    /// fails if it is missing when called.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn load_one(&self, abs_path: &Path) -> Result<TemplateFile, String> {
        let rel = abs_path
            .strip_prefix(&self.root)
            .map_err(|_| format!("'{}' is outside the store", abs_path.display()))?;
        let store_path = normalize_path(&rel.to_string_lossy());
        let content = fs::read_to_string(abs_path).map_err(|e| format!("unreadable: {e}"))?;
        TemplateFile::from_store_path(&store_path, content).map_err(|e| e.to_string())
    }
}

impl TemplateStore for DirectoryTemplateStore {
    #[instrument(skip(self), fields(dir = %self.root.display()))]
    fn templates(&self) -> SlicerResult<Vec<TemplateFile>> {
        if !self.root.is_dir() {
            return Err(ApplicationError::TemplateStore {
                reason: format!("templates directory not found: {}", self.root.display()),
            }
            .into());
        }

        let mut templates = Vec::new();

        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                let skip = entry.depth() > 0 && is_junk(&entry.file_name().to_string_lossy());
                if skip {
                    warn!(file = %entry.path().display(), "skipping hidden or backup file");
                }
                !skip
            });

        for entry in walker {
            let entry = entry.map_err(|e| ApplicationError::TemplateStore {
                reason: format!("directory walk error: {e}"),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            match self.load_one(entry.path()) {
                Ok(template) => {
                    debug!(template = %template.store_path(), "loaded template");
                    templates.push(template);
                }
                Err(reason) => {
                    warn!(
                        file = %entry.path().display(),
                        error = %reason,
                        "skipping template file"
                    );
                }
            }
        }

        templates.sort_by(|a, b| a.store_path().cmp(b.store_path()));
        debug!(count = templates.len(), "finished loading templates");
        Ok(templates)
    }

    fn source(&self) -> String {
        self.root.display().to_string()
    }
}

/// Dotfiles and editor backups never become templates.
fn is_junk(name: &str) -> bool {
    name.starts_with('.') || name.ends_with('~')
}
