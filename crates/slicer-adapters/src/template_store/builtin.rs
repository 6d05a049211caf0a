//! The stock ExpenseTracker-style slice templates, compiled into the binary.

use slicer_core::{
    application::ports::TemplateStore,
    domain::{DomainError, TemplateFile},
    error::SlicerResult,
};

macro_rules! builtin {
    ($($path:literal),* $(,)?) => {
        &[$(($path, include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/", $path)))),*]
    };
}

/// Store path and content of every built-in template, sorted by store path.
const BUILTIN_TEMPLATES: &[(&str, &str)] = builtin![
    "ClientShared/Form/Features/__moduleNamespace__/__ComponentPrefix__FormClientDataService.cs",
    "ClientShared/Listing/Features/__moduleNamespace__/__ComponentPrefix__ListingClientDataService.cs",
    "ClientShared/SelectList/Features/__moduleNamespace__/__ComponentPrefix__SelectListClientDataService.cs",
    "Controllers/Form/Controllers/__moduleNamespace__/__ComponentPrefix__FormController.cs",
    "Controllers/Listing/Controllers/__moduleNamespace__/__ComponentPrefix__ListingController.cs",
    "Controllers/SelectList/Controllers/__moduleNamespace__/__ComponentPrefix__SelectListController.cs",
    "MauiNativeApp/Form/Features/__moduleNamespace__/__ComponentPrefix__FormPageViewModel.cs",
    "MauiNativeApp/Listing/Features/__moduleNamespace__/__ComponentPrefix__ListPageViewModel.cs",
    "RazorComponents/Form/Features/__moduleNamespace__/__ComponentPrefix__FormViewModel.cs",
    "RazorComponents/Listing/Features/__moduleNamespace__/__ComponentPrefix__ListingViewModel.cs",
    "ServerDataServices/Form/Features/__moduleNamespace__/__ComponentPrefix__FormServerDataService.cs",
    "ServerDataServices/Listing/Features/__moduleNamespace__/__ComponentPrefix__ListingServerDataService.cs",
    "ServerDataServices/SelectList/Features/__moduleNamespace__/__ComponentPrefix__SelectListServerDataService.cs",
    "ServiceContracts/Form/Features/__moduleNamespace__/I__ComponentPrefix__FormDataService.cs",
    "ServiceContracts/Form/Features/__moduleNamespace__/__ComponentPrefix__FormBusinessModel.cs",
    "ServiceContracts/Listing/Features/__moduleNamespace__/I__ComponentPrefix__ListingDataService.cs",
    "ServiceContracts/Listing/Features/__moduleNamespace__/__ComponentPrefix__ListingBusinessModel.cs",
    "ServiceContracts/SelectList/Features/__moduleNamespace__/I__ComponentPrefix__SelectListDataService.cs",
];

/// Template store backed by the built-in template set.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplateStore;

impl BuiltinTemplateStore {
    pub fn new() -> Self {
        Self
    }

    /// Number of built-in templates.
    pub fn len(&self) -> usize {
        BUILTIN_TEMPLATES.len()
    }

    pub fn is_empty(&self) -> bool {
        BUILTIN_TEMPLATES.is_empty()
    }
}

impl TemplateStore for BuiltinTemplateStore {
    fn templates(&self) -> SlicerResult<Vec<TemplateFile>> {
        let templates = BUILTIN_TEMPLATES
            .iter()
            .map(|(path, content)| TemplateFile::from_store_path(path, *content))
            .collect::<Result<Vec<_>, DomainError>>()?;
        Ok(templates)
    }

    fn source(&self) -> String {
        "built-in".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slicer_core::domain::{ProjectKind, TemplateCategory, Token, tokens::scan};

    #[test]
    fn every_builtin_template_parses() {
        let templates = BuiltinTemplateStore::new().templates().unwrap();
        assert_eq!(templates.len(), BuiltinTemplateStore::new().len());
    }

    #[test]
    fn every_kind_has_templates() {
        let templates = BuiltinTemplateStore::new().templates().unwrap();
        for kind in ProjectKind::ALL {
            assert!(
                templates.iter().any(|t| t.kind() == kind),
                "no template for {kind}"
            );
        }
    }

    #[test]
    fn builtin_templates_only_use_known_tokens() {
        for t in BuiltinTemplateStore::new().templates().unwrap() {
            let path = t.destination().to_slash_string();
            for occ in scan(t.content()).into_iter().chain(scan(&path)) {
                assert!(
                    Token::from_name(occ.name).is_some(),
                    "{} uses unknown token {}",
                    t.store_path(),
                    occ.name
                );
            }
        }
    }

    #[test]
    fn select_list_token_only_in_select_list_templates() {
        for t in BuiltinTemplateStore::new().templates().unwrap() {
            if t.category() != TemplateCategory::SelectList {
                assert!(
                    !t.content().contains(&Token::SelectListDataType.placeholder()),
                    "{} needs a select list type",
                    t.store_path()
                );
            }
        }
    }
}
