//! English pluralization for route segments.
//!
//! Rules, first match wins:
//! 1. Irregular table (case-insensitive lookup, leading capital preserved)
//! 2. consonant + `y` → `ies`
//! 3. ends in `s`, `x`, `z`, `ch`, `sh` → append `es`
//! 4. otherwise append `s`
//!
//! Only used for route segments. Display text is the UI's business.

use std::collections::HashMap;

/// Irregular plurals known out of the box, lower-case.
const DEFAULT_IRREGULARS: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("tooth", "teeth"),
    ("foot", "feet"),
    ("sheep", "sheep"),
    ("series", "series"),
    ("species", "species"),
    ("datum", "data"),
    ("criterion", "criteria"),
];

/// Pluralizer with an overridable irregular-word table.
#[derive(Debug, Clone)]
pub struct Pluralizer {
    irregulars: HashMap<String, String>,
}

impl Default for Pluralizer {
    fn default() -> Self {
        Self {
            irregulars: DEFAULT_IRREGULARS
                .iter()
                .map(|(s, p)| (s.to_string(), p.to_string()))
                .collect(),
        }
    }
}

impl Pluralizer {
    /// A pluralizer with no irregular words at all.
    pub fn heuristic_only() -> Self {
        Self {
            irregulars: HashMap::new(),
        }
    }

    /// Register (or replace) an irregular plural.
    pub fn with_irregular(mut self, singular: &str, plural: &str) -> Self {
        self.irregulars
            .insert(singular.to_lowercase(), plural.to_lowercase());
        self
    }

    pub fn pluralize(&self, singular: &str) -> String {
        if singular.is_empty() {
            return String::new();
        }

        if let Some(plural) = self.irregulars.get(&singular.to_lowercase()) {
            return match_leading_case(singular, plural);
        }

        let lower = singular.to_lowercase();

        if let Some(stem) = singular.strip_suffix(['y', 'Y']) {
            let before = stem.chars().last();
            if before.is_some_and(|c| c.is_alphabetic() && !is_vowel(c)) {
                return format!("{stem}ies");
            }
        }

        if ["s", "x", "z", "ch", "sh"]
            .iter()
            .any(|suffix| lower.ends_with(suffix))
        {
            return format!("{singular}es");
        }

        format!("{singular}s")
    }
}

/// Pluralize with the default irregular table.
pub fn pluralize(singular: &str) -> String {
    Pluralizer::default().pluralize(singular)
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Give `plural` the same leading capitalisation as `original`.
fn match_leading_case(original: &str, plural: &str) -> String {
    match original.chars().next() {
        Some(first) if first.is_uppercase() => {
            let mut chars = plural.chars();
            match chars.next() {
                Some(p) => p.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
        _ => plural.to_string(),
    }
}
