//! Placeholder grammar and substitution.
//!
//! A token is an ASCII identifier wrapped in double underscores:
//! `__ComponentPrefix__`, `__moduleNamespace__`. The identifier starts with a
//! letter and continues with letters or digits. Anything else containing `__`
//! (for example `a__b` or `____`) is ordinary text.
//!
//! Substitution is strict: every token found in the input must have an entry
//! in the [`SubstitutionMap`], otherwise the whole substitution fails with
//! [`DomainError::UnresolvedToken`]. Nothing is ever silently left behind.

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::error::DomainError;

/// Token delimiter on both sides of the identifier.
pub const TOKEN_DELIMITER: &str = "__";

/// The closed set of tokens templates may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Token {
    ComponentPrefix,
    ModuleNamespace,
    PrimaryKeyType,
    SelectListDataType,
    ProjectNamespace,
}

impl Token {
    pub const ALL: [Token; 5] = [
        Self::ComponentPrefix,
        Self::ModuleNamespace,
        Self::PrimaryKeyType,
        Self::SelectListDataType,
        Self::ProjectNamespace,
    ];

    /// Identifier as written between the delimiters.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ComponentPrefix => "ComponentPrefix",
            Self::ModuleNamespace => "moduleNamespace",
            Self::PrimaryKeyType => "primaryKeyType",
            Self::SelectListDataType => "selectListDataType",
            Self::ProjectNamespace => "projectNamespace",
        }
    }

    /// Exact-match lookup; token names are case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    /// The delimited form, e.g. `__ComponentPrefix__`.
    pub fn placeholder(&self) -> String {
        format!("{TOKEN_DELIMITER}{}{TOKEN_DELIMITER}", self.name())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One `__identifier__` match inside a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenOccurrence<'a> {
    /// Identifier without delimiters.
    pub name: &'a str,
    /// Byte offset of the opening delimiter.
    pub start: usize,
    /// Byte offset one past the closing delimiter.
    pub end: usize,
}

/// Find every token occurrence, left to right, non-overlapping.
pub fn scan(input: &str) -> Vec<TokenOccurrence<'_>> {
    let bytes = input.as_bytes();
    let len = bytes.len();
    let mut found = Vec::new();
    let mut i = 0;

    while i + 1 < len {
        if bytes[i] == b'_' && bytes[i + 1] == b'_' {
            let ident_start = i + 2;
            let mut j = ident_start;
            if j < len && bytes[j].is_ascii_alphabetic() {
                while j < len && bytes[j].is_ascii_alphanumeric() {
                    j += 1;
                }
                if j + 1 < len && bytes[j] == b'_' && bytes[j + 1] == b'_' {
                    found.push(TokenOccurrence {
                        name: &input[ident_start..j],
                        start: i,
                        end: j + 2,
                    });
                    i = j + 2;
                    continue;
                }
            }
        }
        i += 1;
    }

    found
}

/// Whether `input` still contains anything matching the token pattern.
pub fn contains_tokens(input: &str) -> bool {
    !scan(input).is_empty()
}

/// Mapping from token to literal replacement.
///
/// Built once per feature by the token resolver and read-only afterwards.
/// A token appears at most once; [`SubstitutionMap::insert`] refuses to
/// overwrite an existing entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionMap {
    entries: BTreeMap<Token, String>,
}

impl SubstitutionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry. Fails if the token is already mapped.
    pub fn insert(&mut self, token: Token, value: impl Into<String>) -> Result<(), DomainError> {
        if self.entries.contains_key(&token) {
            return Err(DomainError::InvalidTemplate(format!(
                "token '{token}' is mapped twice"
            )));
        }
        self.entries.insert(token, value.into());
        Ok(())
    }

    pub fn get(&self, token: Token) -> Option<&str> {
        self.entries.get(&token).map(String::as_str)
    }

    pub fn contains(&self, token: Token) -> bool {
        self.entries.contains_key(&token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Token, &str)> {
        self.entries.iter().map(|(t, v)| (*t, v.as_str()))
    }

    /// Replace every token in `input`.
    ///
    /// `template` names the source for error reporting only.
    ///
    /// # Errors
    ///
    /// [`DomainError::UnresolvedToken`] for the first token that is unknown or
    /// unmapped, and for any token left in the output.
    pub fn substitute(&self, input: &str, template: &str) -> Result<String, DomainError> {
        let occurrences = scan(input);
        if occurrences.is_empty() {
            return Ok(input.to_string());
        }

        let mut out = String::with_capacity(input.len());
        let mut cursor = 0;

        for occ in occurrences {
            let value = Token::from_name(occ.name)
                .and_then(|t| self.get(t))
                .ok_or_else(|| DomainError::UnresolvedToken {
                    token: occ.name.to_string(),
                    template: template.to_string(),
                })?;
            out.push_str(&input[cursor..occ.start]);
            out.push_str(value);
            cursor = occ.end;
        }
        out.push_str(&input[cursor..]);

        Self::ensure_resolved(&out, template)?;
        Ok(out)
    }

    /// Fail if `output` still matches the token pattern.
    pub fn ensure_resolved(output: &str, template: &str) -> Result<(), DomainError> {
        match scan(output).first() {
            Some(left) => Err(DomainError::UnresolvedToken {
                token: left.name.to_string(),
                template: template.to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> SubstitutionMap {
        let mut m = SubstitutionMap::new();
        m.insert(Token::ComponentPrefix, "Invoice").unwrap();
        m.insert(Token::ModuleNamespace, "Invoices").unwrap();
        m
    }

    #[test]
    fn scan_finds_tokens_embedded_in_identifiers() {
        let found = scan("I__ComponentPrefix__FormDataService");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "ComponentPrefix");
        assert_eq!(found[0].start, 1);
    }

    #[test]
    fn scan_handles_adjacent_tokens() {
        let names: Vec<_> = scan("__ComponentPrefix____moduleNamespace__")
            .into_iter()
            .map(|o| o.name)
            .collect();
        assert_eq!(names, vec!["ComponentPrefix", "moduleNamespace"]);
    }

    #[test]
    fn scan_ignores_non_token_underscores() {
        assert!(scan("a__b").is_empty());
        assert!(scan("____").is_empty());
        assert!(scan("__1abc__").is_empty());
        assert!(scan("snake_case_name").is_empty());
        assert_eq!(scan("___ComponentPrefix__").len(), 1);
    }

    #[test]
    fn substitutes_all_occurrences() {
        let out = map()
            .substitute(
                "namespace X.__moduleNamespace__;\nclass __ComponentPrefix__Form : I__ComponentPrefix__Form {}",
                "t.cs",
            )
            .unwrap();
        assert_eq!(
            out,
            "namespace X.Invoices;\nclass InvoiceForm : IInvoiceForm {}"
        );
    }

    #[test]
    fn unmapped_known_token_fails() {
        let err = map()
            .substitute("Task<__primaryKeyType__>", "Form/x.cs")
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::UnresolvedToken {
                token: "primaryKeyType".into(),
                template: "Form/x.cs".into()
            }
        );
    }

    #[test]
    fn unknown_token_fails() {
        let err = map().substitute("__Whatever__", "x").unwrap_err();
        assert!(matches!(err, DomainError::UnresolvedToken { token, .. } if token == "Whatever"));
    }

    #[test]
    fn token_names_are_case_sensitive() {
        assert_eq!(Token::from_name("moduleNamespace"), Some(Token::ModuleNamespace));
        assert_eq!(Token::from_name("ModuleNamespace"), None);
    }

    #[test]
    fn insert_rejects_duplicates() {
        let mut m = map();
        assert!(m.insert(Token::ComponentPrefix, "Other").is_err());
        assert_eq!(m.get(Token::ComponentPrefix), Some("Invoice"));
    }

    #[test]
    fn text_without_tokens_is_untouched() {
        let text = "public int Count { get; set; }";
        assert_eq!(SubstitutionMap::new().substitute(text, "x").unwrap(), text);
    }
}
