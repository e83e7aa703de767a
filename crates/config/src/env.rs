//! Environment overrides for stored values.
//!
//! Responsibilities:
//! - Map dotted keys to environment variable names.
//! - Provide the injectable lookup used by every accessor, defaulting to the
//!   process environment.
//! - Re-encode override text as a `ConfigValue` per the active `ArrayOverride` policy.
//!
//! Does NOT handle:
//! - Type conversion of the overridden text (see `store.rs`).
//! - `.env` file loading (see `TideLoader::load_dotenv`).
//!
//! Invariants:
//! - A variable set to the empty string is still an override.
//! - Override values are never logged.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::constants::{
    ARRAY_KEY_MARKER, ENV_ARRAY_SEPARATOR, KEY_SEPARATOR, TAG_STRING, TAG_STRING_ARRAY,
};
use crate::value::{ConfigValue, TypeTag};

/// Shared environment lookup: returns the value of a variable if it is set.
#[derive(Clone)]
pub struct EnvLookup(Arc<dyn Fn(&str) -> Option<String> + Send + Sync>);

impl EnvLookup {
    pub fn new<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self(Arc::new(lookup))
    }

    /// Lookup backed by the real process environment.
    ///
    /// Values that are not valid unicode are converted lossily rather than
    /// treated as unset.
    pub fn process() -> Self {
        Self::new(|name| std::env::var_os(name).map(|v| v.to_string_lossy().into_owned()))
    }

    /// Lookup backed by a fixed set of variables.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: HashMap<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::new(move |name| vars.get(name).cloned())
    }

    /// Lookup that never finds anything.
    pub fn empty() -> Self {
        Self::new(|_| None)
    }

    pub fn get(&self, name: &str) -> Option<String> {
        (self.0)(name)
    }
}

impl Default for EnvLookup {
    fn default() -> Self {
        Self::process()
    }
}

impl fmt::Debug for EnvLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EnvLookup(..)")
    }
}

/// How an environment override decides whether it stands for an array.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArrayOverride {
    /// The override is an array iff the dotted key contains `array`.
    #[default]
    KeyName,
    /// The override is an array iff the stored entry is declared with an array tag.
    DeclaredType,
}

/// Environment variable name for a dotted key: `a.b.c` becomes `A_B_C`.
pub fn env_var_name(key: &str) -> String {
    key.replace(KEY_SEPARATOR, "_").to_uppercase()
}

/// Encode override text as a value.
///
/// Array overrides are split on `,`, each element trimmed, and written back in
/// the array literal grammar (`["e1", "e2"]`) tagged `array[string]`. Anything
/// else is kept verbatim and tagged `string`.
pub(crate) fn override_value(
    key: &str,
    text: String,
    stored: Option<&ConfigValue>,
    policy: ArrayOverride,
) -> ConfigValue {
    let is_array = match policy {
        ArrayOverride::KeyName => key.contains(ARRAY_KEY_MARKER),
        ArrayOverride::DeclaredType => stored
            .and_then(|v| v.tag().ok())
            .is_some_and(TypeTag::is_array),
    };

    if !is_array {
        return ConfigValue::new(text, TAG_STRING);
    }

    let elements: Vec<String> = text
        .split(ENV_ARRAY_SEPARATOR)
        .map(|e| format!("\"{}\"", e.trim()))
        .collect();
    ConfigValue::new(format!("[{}]", elements.join(", ")), TAG_STRING_ARRAY)
}
