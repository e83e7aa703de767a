//! Load-time validation of literals against their declared type.
//!
//! Responsibilities:
//! - Decide whether a `ConfigValue` is well-formed for its tag before it is
//!   admitted into a store.
//!
//! Does NOT handle:
//! - Producing typed values (see `convert.rs`, which this module reuses).
//! - Attaching the offending key (the loader wraps `ValueError` in `ConfigError`).
//!
//! Invariants:
//! - `string` literals are always valid.
//! - `bool` literals must be `true` or `false`, case-insensitively.
//! - String arrays reject elements that parse as integers, so a numeric list
//!   cannot be declared `array[string]` by accident.

use thiserror::Error;

use crate::convert::{self, ConvertError};
use crate::value::{ConfigValue, ElementType, TypeTag};

/// Why a literal is not acceptable for its declared tag.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    #[error("unsupported array element type: {0}")]
    UnsupportedElementType(String),

    #[error("invalid integer value: {0}")]
    InvalidInteger(#[source] ConvertError),

    #[error("invalid bool value '{0}': expected true or false")]
    InvalidBool(String),

    #[error("invalid array format: '{0}' must be enclosed in [ and ]")]
    NotAnArray(String),

    #[error("invalid array element type: expected string, got integer '{0}'")]
    IntegerInStringArray(String),

    #[error("invalid array format: {0}")]
    InvalidArrayElement(#[source] ConvertError),
}

impl ValueError {
    /// True for failures caused by the tag itself rather than the literal.
    pub fn is_unsupported_type(&self) -> bool {
        matches!(
            self,
            ValueError::UnsupportedType(_) | ValueError::UnsupportedElementType(_)
        )
    }
}

/// Check `value.raw` against `value.type_tag`.
pub fn validate(value: &ConfigValue) -> Result<(), ValueError> {
    let raw = value.raw.as_str();

    match value.tag()? {
        TypeTag::String => Ok(()),
        TypeTag::Integer => convert::to_int64(raw)
            .map(|_| ())
            .map_err(ValueError::InvalidInteger),
        TypeTag::Bool => {
            if raw.eq_ignore_ascii_case("true") || raw.eq_ignore_ascii_case("false") {
                Ok(())
            } else {
                Err(ValueError::InvalidBool(raw.to_string()))
            }
        }
        TypeTag::Array(element) => validate_array(raw, element),
    }
}

fn validate_array(raw: &str, element: ElementType) -> Result<(), ValueError> {
    if !(raw.starts_with('[') && raw.ends_with(']')) {
        return Err(ValueError::NotAnArray(raw.to_string()));
    }

    match element {
        ElementType::String => {
            let numeric = convert::to_string_array(raw)
                .into_iter()
                .find(|e| convert::to_int64(e).is_ok());
            match numeric {
                Some(e) => Err(ValueError::IntegerInStringArray(e)),
                None => Ok(()),
            }
        }
        ElementType::Integer => convert::to_int_array(raw)
            .map(|_| ())
            .map_err(ValueError::InvalidArrayElement),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(raw: &str, tag: &str) -> Result<(), ValueError> {
        validate(&ConfigValue::new(raw, tag))
    }

    #[test]
    fn test_strings_always_valid() {
        assert!(check("", "string").is_ok());
        assert!(check("123", "string").is_ok());
        assert!(check("anything at all", "string").is_ok());
    }

    #[test]
    fn test_integers() {
        assert!(check("5432", "integer").is_ok());
        assert!(check("-1", "integer").is_ok());
        assert!(check("+1", "integer").is_ok());
        assert!(matches!(
            check("54x", "integer"),
            Err(ValueError::InvalidInteger(_))
        ));
        assert!(check("", "integer").is_err());
    }

    #[test]
    fn test_bools_are_canonical_literals() {
        assert!(check("true", "bool").is_ok());
        assert!(check("FALSE", "bool").is_ok());
        assert!(check("True", "bool").is_ok());
        assert!(matches!(check("yes", "bool"), Err(ValueError::InvalidBool(_))));
        assert!(check("1", "bool").is_err());
    }

    #[test]
    fn test_string_array_rejects_integer_elements() {
        assert!(check("[auth, billing, search]", "array[string]").is_ok());
        assert!(check("[auth, billing]", "array").is_ok());
        assert!(matches!(
            check("[1, 2]", "array[string]"),
            Err(ValueError::IntegerInStringArray(e)) if e == "1"
        ));
        assert!(check("[a, 2]", "array").is_err());
    }

    #[test]
    fn test_quoted_numbers_are_strings() {
        assert!(check(r#"["1", "2"]"#, "array[string]").is_ok());
        assert!(check(r#"["1", 2]"#, "array[string]").is_err());
    }

    #[test]
    fn test_integer_array() {
        assert!(check("[1, 2, 3]", "array[integer]").is_ok());
        assert!(matches!(
            check("[1, x, 3]", "array[integer]"),
            Err(ValueError::InvalidArrayElement(_))
        ));
    }

    #[test]
    fn test_array_requires_brackets() {
        assert!(matches!(
            check("a, b", "array"),
            Err(ValueError::NotAnArray(_))
        ));
        assert!(check("[1, 2", "array[integer]").is_err());
    }

    #[test]
    fn test_unsupported_tags() {
        let err = check("1.5", "float").unwrap_err();
        assert!(err.is_unsupported_type());
        assert_eq!(err.to_string(), "unsupported type: float");

        let err = check("[1.5]", "array[float]").unwrap_err();
        assert!(err.is_unsupported_type());
        assert_eq!(err.to_string(), "unsupported array element type: float");
    }
}
