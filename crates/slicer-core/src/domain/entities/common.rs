use super::DomainError;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A filesystem path guaranteed to stay inside the directory it is joined to.
///
/// Invariant: never absolute and never contains `..`. Enforced at construction.
/// Template paths and generated destinations are both expressed with this type
/// so a template can never write outside its project root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.is_absolute() || path.has_root() {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            });
        }
        if path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            return Err(DomainError::InvalidTemplate(format!(
                "path escapes its root: {}",
                path.display()
            )));
        }
        if path.as_os_str().is_empty() {
            return Err(DomainError::InvalidTemplate("path is empty".into()));
        }
        Ok(Self(path))
    }

    /// Build from already-split segments (store paths use `/` on every platform).
    pub fn from_segments<S: AsRef<str>>(segments: &[S]) -> Result<Self, DomainError> {
        let path: PathBuf = segments.iter().map(|s| s.as_ref()).collect();
        Self::try_new(path)
    }

    /// Path segments as UTF-8 strings. Non-UTF-8 segments are replaced lossily.
    pub fn segments(&self) -> Vec<String> {
        self.0
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect()
    }

    /// `/`-separated form, stable across platforms.
    pub fn to_slash_string(&self) -> String {
        self.segments().join("/")
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl TryFrom<&str> for RelativePath {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::from_segments(&s.split('/').filter(|p| !p.is_empty()).collect::<Vec<_>>())
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_slash_string())
    }
}
