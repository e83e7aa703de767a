//! Error types for loading and reading configuration.
//!
//! Responsibilities:
//! - Define one error variant per failure kind of loading or querying a store.
//! - Wrap value-level errors (`ValueError`, `ConvertError`) with the offending key.
//!
//! Does NOT handle:
//! - Mapping errors to process exit codes (see the CLI crate).
//!
//! Invariants:
//! - Every variant names the key or path it concerns.
//! - Environment variable values and dotenv line contents never appear in messages.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use crate::convert::ConvertError;
use crate::validate::ValueError;

/// Errors that can occur while loading a `.tide` file or reading a key.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("circular import detected: {path}")]
    CircularImport { path: PathBuf },

    #[error("unsupported type '{type_tag}' for key {key}")]
    UnsupportedType { key: String, type_tag: String },

    #[error("validation error for key {key}: {source}")]
    Validation {
        key: String,
        #[source]
        source: ValueError,
    },

    #[error("cannot convert key {key} to {expected}: {source}")]
    Conversion {
        key: String,
        expected: &'static str,
        #[source]
        source: ConvertError,
    },

    #[error("key not found: {0}")]
    KeyNotFound(String),

    #[error("type mismatch for key {key}: expected {expected}, got {actual}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        actual: String,
    },

    /// A `}` without an open block, or end of input with blocks still open.
    ///
    /// Only raised when strict block checking is enabled.
    #[error("unbalanced block in {path} at line {line}")]
    UnbalancedBlock { path: PathBuf, line: usize },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Attach `key` to a validation failure, splitting out unsupported tags.
    pub(crate) fn invalid_value(key: &str, type_tag: &str, source: ValueError) -> Self {
        if source.is_unsupported_type() {
            Self::UnsupportedType {
                key: key.to_string(),
                type_tag: type_tag.to_string(),
            }
        } else {
            Self::Validation {
                key: key.to_string(),
                source,
            }
        }
    }
}
