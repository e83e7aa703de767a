//! `tide check`: load a file and report success.

use std::path::Path;

use anyhow::Result;
use tide_config::TideLoader;

pub fn run(loader: &TideLoader, file: &Path) -> Result<()> {
    let store = super::load_store(loader, file)?;
    println!("OK: {} keys", store.len());
    Ok(())
}
