use crate::domain::error::DomainError;

/// C# keywords. Generated type names are built from the component prefix, so
/// the prefix itself must never be one of these.
const RESERVED_WORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Naming rules shared by [`Feature`](super::Feature) and
/// [`Project`](super::Project) validation.
pub struct DomainValidator;

impl DomainValidator {
    /// Check a single identifier against the naming rules of the generated code.
    pub fn validate_identifier(field: &'static str, value: &str) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidIdentifier {
            field,
            value: value.to_string(),
            reason: reason.to_string(),
        };

        let mut chars = value.chars();
        match chars.next() {
            None => return Err(invalid("must not be empty")),
            Some(c) if c.is_ascii_digit() => return Err(invalid("must not start with a digit")),
            Some(c) if !c.is_ascii_alphabetic() => {
                return Err(invalid("must start with an ASCII letter"));
            }
            Some(_) => {}
        }

        if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
            return Err(invalid(&format!("contains invalid character '{bad}'")));
        }

        if value.contains("__") {
            return Err(invalid("must not contain '__' (reserved for template tokens)"));
        }

        if RESERVED_WORDS.contains(&value) {
            return Err(invalid("is a reserved word"));
        }

        Ok(())
    }

    /// Check a dotted namespace such as `Invoices` or `Billing.Invoices`.
    pub fn validate_namespace(field: &'static str, value: &str) -> Result<(), DomainError> {
        if value.is_empty() {
            return Err(DomainError::InvalidIdentifier {
                field,
                value: value.to_string(),
                reason: "must not be empty".into(),
            });
        }
        for part in value.split('.') {
            Self::validate_identifier(field, part).map_err(|e| match e {
                DomainError::InvalidIdentifier { reason, .. } => DomainError::InvalidIdentifier {
                    field,
                    value: value.to_string(),
                    reason: format!("segment '{part}' {reason}"),
                },
                other => other,
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_pascal_case_identifiers() {
        for ok in ["Invoice", "ProductCategory", "Item2", "Line_Item"] {
            assert!(DomainValidator::validate_identifier("component prefix", ok).is_ok(), "{ok}");
        }
    }

    #[test]
    fn rejects_leading_digit() {
        let err = DomainValidator::validate_identifier("component prefix", "2Fast").unwrap_err();
        assert!(err.to_string().contains("digit"));
    }

    #[test]
    fn rejects_reserved_words_and_symbols() {
        assert!(DomainValidator::validate_identifier("component prefix", "class").is_err());
        assert!(DomainValidator::validate_identifier("component prefix", "Invoice-Line").is_err());
        assert!(DomainValidator::validate_identifier("component prefix", "").is_err());
        assert!(DomainValidator::validate_identifier("component prefix", "A__B").is_err());
    }

    #[test]
    fn namespace_allows_dotted_segments() {
        assert!(DomainValidator::validate_namespace("module namespace", "Billing.Invoices").is_ok());
        assert!(DomainValidator::validate_namespace("module namespace", "Billing..Invoices").is_err());
        assert!(DomainValidator::validate_namespace("module namespace", "Billing.namespace").is_err());
    }
}
