//! `tide get`: print one value through a typed accessor.
//!
//! Arrays print one element per line; scalars print on a single line.

use std::path::Path;

use anyhow::{Context, Result};
use tide_config::{ConfigStore, TideLoader};

use crate::args::ValueKind;

pub fn run(loader: &TideLoader, file: &Path, key: &str, kind: ValueKind) -> Result<()> {
    let store = super::load_store(loader, file)?;
    for line in render(&store, key, kind).with_context(|| format!("Failed to read {key}"))? {
        println!("{line}");
    }
    Ok(())
}

fn render(
    store: &ConfigStore,
    key: &str,
    kind: ValueKind,
) -> Result<Vec<String>, tide_config::ConfigError> {
    Ok(match kind {
        ValueKind::String => vec![store.get_string(key)?],
        ValueKind::Bool => vec![store.get_bool(key)?.to_string()],
        ValueKind::Int => vec![store.get_int(key)?.to_string()],
        ValueKind::Int32 => vec![store.get_int32(key)?.to_string()],
        ValueKind::Int64 => vec![store.get_int64(key)?.to_string()],
        ValueKind::Array => store.get_array(key)?,
        ValueKind::IntArray => store
            .get_int_array(key)?
            .into_iter()
            .map(|n| n.to_string())
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tide_config::{ConfigValue, EnvLookup};

    fn store() -> ConfigStore {
        ConfigStore::from_entries([
            ("port", ConfigValue::new("5432", "integer")),
            ("flags", ConfigValue::new("[a, b]", "array")),
            ("nums", ConfigValue::new("[1, 2]", "array[integer]")),
        ])
        .with_env_lookup(EnvLookup::empty())
    }

    #[test]
    fn test_render_scalars() {
        assert_eq!(render(&store(), "port", ValueKind::Int).unwrap(), vec!["5432"]);
        assert_eq!(
            render(&store(), "port", ValueKind::String).unwrap(),
            vec!["5432"]
        );
    }

    #[test]
    fn test_render_arrays_one_per_line() {
        assert_eq!(
            render(&store(), "flags", ValueKind::Array).unwrap(),
            vec!["a", "b"]
        );
        assert_eq!(
            render(&store(), "nums", ValueKind::IntArray).unwrap(),
            vec!["1", "2"]
        );
    }

    #[test]
    fn test_render_propagates_errors() {
        assert!(render(&store(), "port", ValueKind::Bool).is_err());
        assert!(render(&store(), "missing", ValueKind::String).is_err());
    }
}
