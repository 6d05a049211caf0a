//! In-memory template store for tests and embedding.

use std::sync::{Arc, RwLock};

use slicer_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::TemplateFile,
    error::SlicerResult,
};

/// Thread-safe in-memory template store.
#[derive(Debug, Clone, Default)]
pub struct MemoryTemplateStore {
    inner: Arc<RwLock<Vec<TemplateFile>>>,
}

impl MemoryTemplateStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and add a template.
    pub fn insert(&self, store_path: &str, content: &str) -> SlicerResult<()> {
        let template = TemplateFile::from_store_path(store_path, content)?;
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.retain(|t| t.store_path() != template.store_path());
        inner.push(template);
        inner.sort_by(|a, b| a.store_path().cmp(b.store_path()));
        Ok(())
    }

    /// Builder-style [`MemoryTemplateStore::insert`].
    pub fn with(self, store_path: &str, content: &str) -> SlicerResult<Self> {
        self.insert(store_path, content)?;
        Ok(self)
    }
}

impl TemplateStore for MemoryTemplateStore {
    fn templates(&self) -> SlicerResult<Vec<TemplateFile>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.clone())
    }

    fn source(&self) -> String {
        "memory".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_same_store_path() {
        let store = MemoryTemplateStore::new()
            .with("Controllers/Form/B.cs", "one")
            .unwrap()
            .with("Controllers/Form/A.cs", "a")
            .unwrap()
            .with("Controllers/Form/B.cs", "two")
            .unwrap();

        let templates = store.templates().unwrap();
        assert_eq!(templates.len(), 2);
        assert_eq!(templates[0].store_path(), "Controllers/Form/A.cs");
        assert_eq!(templates[1].content(), "two");
    }

    #[test]
    fn insert_rejects_bad_store_path() {
        assert!(MemoryTemplateStore::new().insert("Controllers/x.cs", "").is_err());
    }
}
