//! Stored value representation.
//!
//! Responsibilities:
//! - Define `ConfigValue`, the raw literal plus its declared type tag.
//! - Parse declared type tags into `TypeTag` for validation and error reporting.
//!
//! Does NOT handle:
//! - Checking literals against their tag (see `validate.rs`).
//! - Converting literals into typed values (see `convert.rs`).
//!
//! Invariants:
//! - Values are kept as text; conversion happens at read time so the same key
//!   can be queried through different accessors.
//! - A `ConfigValue` admitted into a store has already passed validation.

use std::fmt;

use serde::Serialize;

use crate::constants::{TAG_ARRAY, TAG_BOOL, TAG_INTEGER, TAG_STRING};
use crate::validate::ValueError;

/// A literal from a `.tide` file together with its declared type tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigValue {
    /// Literal text after the `=`, trimmed; for `string` one enclosing pair of
    /// quotes is removed.
    pub raw: String,
    /// Declared type tag exactly as written, e.g. `integer` or `array[string]`.
    #[serde(rename = "type")]
    pub type_tag: String,
}

impl ConfigValue {
    pub fn new(raw: impl Into<String>, type_tag: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            type_tag: type_tag.into(),
        }
    }

    /// Build the value for an assignment line.
    ///
    /// String-typed literals lose one enclosing pair of double quotes; every
    /// other literal is stored verbatim.
    pub fn from_assignment(raw: &str, type_tag: &str) -> Self {
        let raw = raw.trim();
        let type_tag = type_tag.trim();
        let raw = if type_tag == TAG_STRING {
            strip_quotes(raw)
        } else {
            raw
        };
        Self::new(raw, type_tag)
    }

    /// Parse the declared tag.
    pub fn tag(&self) -> Result<TypeTag, ValueError> {
        TypeTag::parse(&self.type_tag)
    }
}

/// Remove one enclosing pair of `"` if present.
pub(crate) fn strip_quotes(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(s)
}

/// Element type of an array tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    String,
    Integer,
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementType::String => f.write_str(TAG_STRING),
            ElementType::Integer => f.write_str(TAG_INTEGER),
        }
    }
}

/// A recognized type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    String,
    Integer,
    Bool,
    /// `array` or `array[T]`; bare `array` means `array[string]`.
    Array(ElementType),
}

impl TypeTag {
    /// Parse a declared tag.
    ///
    /// # Errors
    ///
    /// `ValueError::UnsupportedType` for unknown tags and
    /// `ValueError::UnsupportedElementType` for `array[T]` with an unknown `T`.
    pub fn parse(tag: &str) -> Result<Self, ValueError> {
        match tag {
            TAG_STRING => return Ok(TypeTag::String),
            TAG_INTEGER => return Ok(TypeTag::Integer),
            TAG_BOOL => return Ok(TypeTag::Bool),
            TAG_ARRAY => return Ok(TypeTag::Array(ElementType::String)),
            _ => {}
        }

        let element = tag
            .strip_prefix(TAG_ARRAY)
            .and_then(|rest| rest.strip_prefix('['))
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(|| ValueError::UnsupportedType(tag.to_string()))?;

        match element.trim() {
            TAG_STRING => Ok(TypeTag::Array(ElementType::String)),
            TAG_INTEGER => Ok(TypeTag::Array(ElementType::Integer)),
            other => Err(ValueError::UnsupportedElementType(other.to_string())),
        }
    }

    pub fn is_array(self) -> bool {
        matches!(self, TypeTag::Array(_))
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::String => f.write_str(TAG_STRING),
            TypeTag::Integer => f.write_str(TAG_INTEGER),
            TypeTag::Bool => f.write_str(TAG_BOOL),
            TypeTag::Array(element) => write!(f, "{TAG_ARRAY}[{element}]"),
        }
    }
}
