//! Token resolver: feature → substitution map.
//!
//! Pure and deterministic. No I/O, no clock, no environment.

use tracing::debug;

use crate::domain::{
    entities::{Feature, Project},
    error::DomainError,
    tokens::{SubstitutionMap, Token},
    value_objects::TypeTag,
};

/// Semantic type tag → C# spelling. Lookup is case-insensitive.
const TYPE_SPELLINGS: &[(&str, &str)] = &[
    ("string", "string"),
    ("int", "int"),
    ("integer", "int"),
    ("long", "long"),
    ("guid", "Guid"),
    ("uuid", "Guid"),
];

/// Spell a type tag in the generated language.
///
/// # Errors
///
/// [`DomainError::UnsupportedType`] when the tag has no spelling. `role`
/// names what the tag was used for ("primary key", "select list").
pub fn spell_type(tag: &TypeTag, role: &'static str) -> Result<&'static str, DomainError> {
    let wanted = tag.as_str().trim();
    TYPE_SPELLINGS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
        .map(|(_, spelling)| *spelling)
        .ok_or_else(|| DomainError::UnsupportedType {
            tag: tag.as_str().to_string(),
            role,
        })
}

/// Every tag the resolver understands.
pub fn supported_type_tags() -> impl Iterator<Item = &'static str> {
    TYPE_SPELLINGS.iter().map(|(name, _)| *name)
}

/// Builds substitution maps.
pub struct TokenResolver;

impl TokenResolver {
    /// Feature-level tokens: prefix, module, primary key and, when the select
    /// list is on, its element type.
    ///
    /// `projectNamespace` depends on the target project and is added per
    /// project by [`TokenResolver::for_project`].
    pub fn resolve(feature: &Feature) -> Result<SubstitutionMap, DomainError> {
        let mut map = SubstitutionMap::new();

        map.insert(Token::ComponentPrefix, feature.component_prefix())?;
        map.insert(Token::ModuleNamespace, feature.module_namespace())?;
        map.insert(
            Token::PrimaryKeyType,
            spell_type(feature.primary_key_type(), "primary key")?,
        )?;

        if feature.has_select_list() {
            let tag = feature
                .select_list_data_type()
                .ok_or(DomainError::MissingRequiredField {
                    field: "select_list_data_type",
                })?;
            map.insert(Token::SelectListDataType, spell_type(tag, "select list")?)?;
        }

        debug!(feature = %feature, tokens = map.len(), "resolved feature tokens");
        Ok(map)
    }

    /// Extend a feature map with the tokens of one target project.
    pub fn for_project(
        feature_map: &SubstitutionMap,
        project: &Project,
    ) -> Result<SubstitutionMap, DomainError> {
        let mut map = feature_map.clone();
        map.insert(Token::ProjectNamespace, project.root_namespace())?;
        Ok(map)
    }
}
