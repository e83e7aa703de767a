//! The loaded key-value store and its typed accessors.
//!
//! Responsibilities:
//! - Hold the validated entries of one load.
//! - Serve typed reads, letting environment variables shadow stored values.
//!
//! Does NOT handle:
//! - Parsing files (see `loader`).
//! - The conversions themselves (see `convert.rs`).
//!
//! Invariants:
//! - Entries are never mutated after load; overrides apply per read only.
//! - A failed read does not affect the store or other keys.
//! - Conversion failures on a value whose tag matches the accessor are
//!   `Conversion` errors; all others are `TypeMismatch`.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use serde::{Serialize, Serializer};

use crate::convert::{self, ConvertError};
use crate::env::{ArrayOverride, EnvLookup, env_var_name, override_value};
use crate::loader::ConfigError;
use crate::value::{ConfigValue, ElementType, TypeTag};

/// Accessor families, used to label errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expected {
    String,
    Bool,
    Integer,
    Array,
    IntArray,
}

impl Expected {
    fn name(self) -> &'static str {
        match self {
            Expected::String => "string",
            Expected::Bool => "bool",
            Expected::Integer => "integer",
            Expected::Array => "array",
            Expected::IntArray => "array[integer]",
        }
    }

    fn matches(self, tag: Option<TypeTag>) -> bool {
        match (self, tag) {
            (Expected::String, Some(TypeTag::String)) => true,
            (Expected::Bool, Some(TypeTag::Bool)) => true,
            (Expected::Integer, Some(TypeTag::Integer)) => true,
            (Expected::Array, Some(TypeTag::Array(_))) => true,
            (Expected::IntArray, Some(TypeTag::Array(ElementType::Integer))) => true,
            _ => false,
        }
    }
}

/// Mapping from dotted key to value, produced by one load.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    entries: HashMap<String, ConfigValue>,
    env: EnvLookup,
    array_override: ArrayOverride,
}

impl ConfigStore {
    pub(crate) fn new(
        entries: HashMap<String, ConfigValue>,
        env: EnvLookup,
        array_override: ArrayOverride,
    ) -> Self {
        Self {
            entries,
            env,
            array_override,
        }
    }

    /// Build a store directly from entries, reading overrides from the process
    /// environment. Entries are not validated.
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, ConfigValue)>,
        K: Into<String>,
    {
        Self::new(
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            EnvLookup::process(),
            ArrayOverride::default(),
        )
    }

    /// Replace the environment lookup used by accessors.
    pub fn with_env_lookup(mut self, env: EnvLookup) -> Self {
        self.env = env;
        self
    }

    pub fn with_array_override(mut self, policy: ArrayOverride) -> Self {
        self.array_override = policy;
        self
    }

    /// Stored value for `key`, ignoring environment overrides.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value a read of `key` would see: the environment override if the
    /// variable is set, otherwise the stored value.
    pub fn resolve(&self, key: &str) -> Result<Cow<'_, ConfigValue>, ConfigError> {
        let stored = self.entries.get(key);
        let var = env_var_name(key);

        if let Some(text) = self.env.get(&var) {
            tracing::debug!(key, var = %var, "Environment override applied");
            return Ok(Cow::Owned(override_value(
                key,
                text,
                stored,
                self.array_override,
            )));
        }

        stored
            .map(Cow::Borrowed)
            .ok_or_else(|| ConfigError::KeyNotFound(key.to_string()))
    }

    fn read<T>(
        &self,
        key: &str,
        expected: Expected,
        convert: impl FnOnce(&str) -> Result<T, ConvertError>,
    ) -> Result<T, ConfigError> {
        let value = self.resolve(key)?;
        convert(&value.raw).map_err(|source| {
            if expected.matches(value.tag().ok()) {
                ConfigError::Conversion {
                    key: key.to_string(),
                    expected: expected.name(),
                    source,
                }
            } else {
                ConfigError::TypeMismatch {
                    key: key.to_string(),
                    expected: expected.name(),
                    actual: value.type_tag.clone(),
                }
            }
        })
    }

    pub fn get_string(&self, key: &str) -> Result<String, ConfigError> {
        self.read(key, Expected::String, |raw| Ok(convert::to_string(raw)))
    }

    pub fn get_bool(&self, key: &str) -> Result<bool, ConfigError> {
        self.read(key, Expected::Bool, convert::to_bool)
    }

    pub fn get_int(&self, key: &str) -> Result<isize, ConfigError> {
        self.read(key, Expected::Integer, convert::to_int)
    }

    /// # Errors
    ///
    /// Besides the usual lookup errors, values outside the `i32` range fail
    /// with `ConfigError::Conversion`.
    pub fn get_int32(&self, key: &str) -> Result<i32, ConfigError> {
        self.read(key, Expected::Integer, convert::to_int32)
    }

    pub fn get_int64(&self, key: &str) -> Result<i64, ConfigError> {
        self.read(key, Expected::Integer, convert::to_int64)
    }

    /// Read `key` as a list of strings.
    ///
    /// Any value can be read as an array: text without brackets is split on `,`.
    pub fn get_array(&self, key: &str) -> Result<Vec<String>, ConfigError> {
        self.read(key, Expected::Array, |raw| Ok(convert::to_string_array(raw)))
    }

    /// Read `key` as a list of strings, removing one pair of enclosing `"`
    /// from each fully quoted element.
    ///
    /// Array env overrides are stored quoted, so this reads `a,b` back as
    /// `a`, `b`.
    pub fn get_unquoted_array(&self, key: &str) -> Result<Vec<String>, ConfigError> {
        self.read(key, Expected::Array, |raw| {
            Ok(convert::to_unquoted_string_array(raw))
        })
    }

    pub fn get_int_array(&self, key: &str) -> Result<Vec<i64>, ConfigError> {
        self.read(key, Expected::IntArray, convert::to_int_array)
    }
}

impl Serialize for ConfigStore {
    /// Serializes stored entries (no overrides) as a key-sorted map.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let sorted: BTreeMap<&str, &ConfigValue> = self.iter().collect();
        sorted.serialize(serializer)
    }
}
