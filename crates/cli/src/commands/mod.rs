//! CLI command implementations.

pub mod check;
pub mod dump;
pub mod get;

use std::path::Path;

use anyhow::{Context, Result};
use tide_config::{ConfigStore, TideLoader};

/// Load `file`, attaching the path to any error.
pub fn load_store(loader: &TideLoader, file: &Path) -> Result<ConfigStore> {
    tracing::debug!(
        file = %file.display(),
        strict_blocks = loader.strict_blocks(),
        array_override = ?loader.array_override(),
        "Loading config"
    );
    let store = loader
        .load(file)
        .with_context(|| format!("Failed to load {}", file.display()))?;
    tracing::debug!(keys = store.len(), "Config loaded");
    Ok(store)
}
