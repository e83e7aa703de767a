//! Scenario tests for loading files from disk.
//!
//! Responsibilities:
//! - Test imports, precedence and cycle detection against real files.
//! - Test environment overrides through loaded stores.
//! - Test `.env` loading and its `DOTENV_DISABLED` gate.
//!
//! Invariants:
//! - Tests that touch process-global state (env, cwd) are `#[serial]`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::fs;
use std::path::{Path, PathBuf};


/// Write `contents` to `dir/relative`, creating parent directories.
pub fn write_tide(dir: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}
