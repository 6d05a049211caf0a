//! Template Service - read-only queries over the template store.

use serde::Serialize;

use crate::{
    application::ports::TemplateStore,
    domain::{ProjectKind, TemplateCategory, TemplateFile},
    error::SlicerResult,
};

/// Information about a template for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub store_path: String,
    pub kind: ProjectKind,
    pub category: TemplateCategory,
    /// Destination below the project root, tokens still in place.
    pub destination: String,
}

impl From<&TemplateFile> for TemplateInfo {
    fn from(t: &TemplateFile) -> Self {
        Self {
            store_path: t.store_path().to_string(),
            kind: t.kind(),
            category: t.category(),
            destination: t.destination().to_slash_string(),
        }
    }
}

/// Service for template queries.
pub struct TemplateService {
    store: Box<dyn TemplateStore>,
}

impl TemplateService {
    /// Create a new template service.
    pub fn new(store: Box<dyn TemplateStore>) -> Self {
        Self { store }
    }

    /// List all templates.
    pub fn list(&self) -> SlicerResult<Vec<TemplateInfo>> {
        Ok(self.store.templates()?.iter().map(TemplateInfo::from).collect())
    }

    /// Templates belonging to one project kind.
    pub fn for_kind(&self, kind: ProjectKind) -> SlicerResult<Vec<TemplateInfo>> {
        Ok(self
            .store
            .templates()?
            .iter()
            .filter(|t| t.kind() == kind)
            .map(TemplateInfo::from)
            .collect())
    }

    /// Where templates come from.
    pub fn source(&self) -> String {
        self.store.source()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TwoTemplates;

    impl TemplateStore for TwoTemplates {
        fn templates(&self) -> SlicerResult<Vec<TemplateFile>> {
            Ok(vec![
                TemplateFile::from_store_path("Controllers/Form/__ComponentPrefix__.cs", "")?,
                TemplateFile::from_store_path("ClientShared/Listing/__ComponentPrefix__.cs", "")?,
            ])
        }

        fn source(&self) -> String {
            "test".into()
        }
    }

    #[test]
    fn lists_and_filters_by_kind() {
        let service = TemplateService::new(Box::new(TwoTemplates));
        assert_eq!(service.list().unwrap().len(), 2);

        let controllers = service.for_kind(ProjectKind::Controllers).unwrap();
        assert_eq!(controllers.len(), 1);
        assert_eq!(controllers[0].category, TemplateCategory::Form);
        assert_eq!(controllers[0].destination, "__ComponentPrefix__.cs");
        assert_eq!(service.source(), "test");
    }
}
