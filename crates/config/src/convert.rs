//! Conversions from raw literals to typed values.
//!
//! Responsibilities:
//! - Turn a stored literal into `String`, `bool`, integers of several widths,
//!   a string list or an integer list.
//!
//! Does NOT handle:
//! - Deciding whether a literal matches its declared tag (see `validate.rs`).
//! - Attaching key names to failures (see `store.rs`).
//!
//! Invariants:
//! - Every function is pure and stateless.
//! - Integer parsing is base 10 with an optional sign and no surrounding whitespace.
//! - Array conversion strips at most one leading `[` and one trailing `]`.

use std::num::ParseIntError;

use thiserror::Error;

use crate::value::strip_quotes;

/// A literal that could not be converted to the requested type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("'{0}' is not a boolean")]
    InvalidBool(String),

    #[error("'{value}' is not a valid integer: {source}")]
    InvalidInteger {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("array element '{element}' is not an integer: {source}")]
    InvalidArrayElement {
        element: String,
        #[source]
        source: ParseIntError,
    },
}

pub fn to_string(raw: &str) -> String {
    raw.to_string()
}

/// Parse a boolean literal.
///
/// Accepts `true`/`false` in any case plus the short spellings `t`/`f` and
/// `1`/`0`.
pub fn to_bool(raw: &str) -> Result<bool, ConvertError> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "t" | "1" => Ok(true),
        "false" | "f" | "0" => Ok(false),
        _ => Err(ConvertError::InvalidBool(raw.to_string())),
    }
}

fn parse_int<T>(raw: &str) -> Result<T, ConvertError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    raw.parse::<T>().map_err(|source| ConvertError::InvalidInteger {
        value: raw.to_string(),
        source,
    })
}

pub fn to_int(raw: &str) -> Result<isize, ConvertError> {
    parse_int(raw)
}

pub fn to_int32(raw: &str) -> Result<i32, ConvertError> {
    parse_int(raw)
}

pub fn to_int64(raw: &str) -> Result<i64, ConvertError> {
    parse_int(raw)
}

/// Split an array literal into trimmed elements.
///
/// Elements keep any quotes they carry. `[]` yields an empty list.
pub fn to_string_array(raw: &str) -> Vec<String> {
    array_elements(raw).map(str::to_string).collect()
}

/// Like [`to_string_array`], but an element entirely wrapped in double quotes
/// loses that one pair.
pub fn to_unquoted_string_array(raw: &str) -> Vec<String> {
    array_elements(raw)
        .map(|element| strip_quotes(element).to_string())
        .collect()
}

/// Split an array literal and parse every element as an integer.
///
/// Fails on the first element that is not an integer.
pub fn to_int_array(raw: &str) -> Result<Vec<i64>, ConvertError> {
    array_elements(raw)
        .map(|element| {
            element
                .parse::<i64>()
                .map_err(|source| ConvertError::InvalidArrayElement {
                    element: element.to_string(),
                    source,
                })
        })
        .collect()
}

/// Iterate the trimmed, unconverted elements of an array literal.
pub(crate) fn array_elements(raw: &str) -> impl Iterator<Item = &str> {
    let inner = raw.trim();
    let inner = inner.strip_prefix('[').unwrap_or(inner);
    let inner = inner.strip_suffix(']').unwrap_or(inner);
    let empty = inner.trim().is_empty();

    inner
        .split(',')
        .map(str::trim)
        .filter(move |_| !empty)
}
