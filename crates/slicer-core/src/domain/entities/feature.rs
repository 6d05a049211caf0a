//! The feature aggregate: one vertical slice to generate.

use std::fmt;

use serde::Serialize;

use crate::domain::{
    error::DomainError,
    validation::DomainValidator,
    value_objects::{TemplateCategory, TypeTag},
};

/// Identifies one vertical slice to generate.
///
/// Immutable once built. Construct through [`Feature::builder`], which runs
/// [`Feature::validate`] before handing the value out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feature {
    component_prefix: String,
    module_namespace: String,
    primary_key_type: TypeTag,
    has_listing: bool,
    has_form: bool,
    has_select_list: bool,
    select_list_data_type: Option<TypeTag>,
}

impl Feature {
    pub fn builder() -> FeatureBuilder {
        FeatureBuilder::default()
    }

    pub fn component_prefix(&self) -> &str {
        &self.component_prefix
    }

    pub fn module_namespace(&self) -> &str {
        &self.module_namespace
    }

    pub fn primary_key_type(&self) -> &TypeTag {
        &self.primary_key_type
    }

    pub fn has_listing(&self) -> bool {
        self.has_listing
    }

    pub fn has_form(&self) -> bool {
        self.has_form
    }

    pub fn has_select_list(&self) -> bool {
        self.has_select_list
    }

    pub fn select_list_data_type(&self) -> Option<&TypeTag> {
        self.select_list_data_type.as_ref()
    }

    /// Whether templates of `category` belong to this slice.
    pub fn enables(&self, category: TemplateCategory) -> bool {
        match category {
            TemplateCategory::Listing => self.has_listing,
            TemplateCategory::Form => self.has_form,
            TemplateCategory::SelectList => self.has_select_list,
        }
    }

    /// Categories switched on by the feature flags, in canonical order.
    pub fn enabled_categories(&self) -> Vec<TemplateCategory> {
        TemplateCategory::ALL
            .into_iter()
            .filter(|c| self.enables(*c))
            .collect()
    }

    /// Validate all invariants.
    pub fn validate(&self) -> Result<(), DomainError> {
        DomainValidator::validate_identifier("component prefix", &self.component_prefix)?;

        if !self
            .component_prefix
            .starts_with(|c: char| c.is_ascii_uppercase())
        {
            return Err(DomainError::InvalidIdentifier {
                field: "component prefix",
                value: self.component_prefix.clone(),
                reason: "must be PascalCase".into(),
            });
        }

        DomainValidator::validate_namespace("module namespace", &self.module_namespace)?;

        if self.primary_key_type.as_str().trim().is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "primary_key_type",
            });
        }

        match (self.has_select_list, &self.select_list_data_type) {
            (true, None) => {
                return Err(DomainError::InvalidFeature(
                    "a select list requires a select list data type".into(),
                ));
            }
            (false, Some(tag)) => {
                return Err(DomainError::InvalidFeature(format!(
                    "select list data type '{tag}' given but the select list is disabled"
                )));
            }
            _ => {}
        }

        if !(self.has_listing || self.has_form || self.has_select_list) {
            return Err(DomainError::InvalidFeature(
                "enable at least one of listing, form or select list".into(),
            ));
        }

        Ok(())
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.component_prefix, self.module_namespace)
    }
}

/// Builder for [`Feature`].
///
/// `component_prefix`, `module_namespace` and `primary_key_type` are required.
/// `select_list` both switches the select list on and records its element type.
#[derive(Debug, Default)]
pub struct FeatureBuilder {
    component_prefix: Option<String>,
    module_namespace: Option<String>,
    primary_key_type: Option<TypeTag>,
    has_listing: bool,
    has_form: bool,
    select_list_data_type: Option<TypeTag>,
}

impl FeatureBuilder {
    pub fn component_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.component_prefix = Some(prefix.into());
        self
    }

    pub fn module_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.module_namespace = Some(namespace.into());
        self
    }

    pub fn primary_key_type(mut self, tag: impl Into<TypeTag>) -> Self {
        self.primary_key_type = Some(tag.into());
        self
    }

    pub fn listing(mut self, enabled: bool) -> Self {
        self.has_listing = enabled;
        self
    }

    pub fn form(mut self, enabled: bool) -> Self {
        self.has_form = enabled;
        self
    }

    pub fn select_list(mut self, data_type: impl Into<TypeTag>) -> Self {
        self.select_list_data_type = Some(data_type.into());
        self
    }

    pub fn build(self) -> Result<Feature, DomainError> {
        let feature = Feature {
            component_prefix: self
                .component_prefix
                .ok_or(DomainError::MissingRequiredField {
                    field: "component_prefix",
                })?,
            module_namespace: self
                .module_namespace
                .ok_or(DomainError::MissingRequiredField {
                    field: "module_namespace",
                })?,
            primary_key_type: self
                .primary_key_type
                .ok_or(DomainError::MissingRequiredField {
                    field: "primary_key_type",
                })?,
            has_listing: self.has_listing,
            has_form: self.has_form,
            has_select_list: self.select_list_data_type.is_some(),
            select_list_data_type: self.select_list_data_type,
        };
        feature.validate()?;
        Ok(feature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice() -> FeatureBuilder {
        Feature::builder()
            .component_prefix("Invoice")
            .module_namespace("Invoices")
            .primary_key_type("guid")
    }

    #[test]
    fn builds_listing_and_form_feature() {
        let feature = invoice().listing(true).form(true).build().unwrap();
        assert_eq!(feature.component_prefix(), "Invoice");
        assert!(feature.has_listing());
        assert!(!feature.has_select_list());
        assert_eq!(
            feature.enabled_categories(),
            vec![TemplateCategory::Listing, TemplateCategory::Form]
        );
    }

    #[test]
    fn select_list_records_data_type() {
        let feature = invoice().select_list("int").build().unwrap();
        assert!(feature.enables(TemplateCategory::SelectList));
        assert_eq!(feature.select_list_data_type().unwrap().as_str(), "int");
    }

    #[test]
    fn requires_at_least_one_category() {
        assert!(matches!(
            invoice().build(),
            Err(DomainError::InvalidFeature(_))
        ));
    }

    #[test]
    fn rejects_lowercase_prefix() {
        let err = Feature::builder()
            .component_prefix("invoice")
            .module_namespace("Invoices")
            .primary_key_type("guid")
            .form(true)
            .build()
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidIdentifier { .. }));
    }

    #[test]
    fn rejects_missing_fields() {
        let err = Feature::builder().form(true).build().unwrap_err();
        assert_eq!(
            err,
            DomainError::MissingRequiredField {
                field: "component_prefix"
            }
        );
    }
}
