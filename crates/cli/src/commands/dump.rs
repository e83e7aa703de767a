//! `tide dump`: print every stored key.
//!
//! Output reflects the file contents only; environment overrides are not applied.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use tide_config::{ConfigStore, TideLoader};

use crate::args::DumpFormat;

pub fn run(loader: &TideLoader, file: &Path, format: DumpFormat) -> Result<()> {
    let store = super::load_store(loader, file)?;
    match format {
        DumpFormat::Text => {
            for line in text_lines(&store) {
                println!("{line}");
            }
        }
        DumpFormat::Json => println!("{}", serde_json::to_string_pretty(&store)?),
    }
    Ok(())
}

fn text_lines(store: &ConfigStore) -> Vec<String> {
    let sorted: BTreeMap<_, _> = store.iter().collect();
    sorted
        .into_iter()
        .map(|(key, value)| format!("{key}: {} = {}", value.type_tag, value.raw))
        .collect()
}
