//! Shared test utilities for tide CLI integration tests.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;

/// Returns a hermetic `tide` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Variables the fixtures could be overridden by are cleared.
pub fn tide_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("tide");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("RUST_LOG")
        .env_remove("DATABASE_PORT")
        .env_remove("DATABASE_HOST")
        .env_remove("DATABASE_CREDENTIALS_PASSWORD")
        .env_remove("MYAPP_FEATURES")
        .env_remove("MYAPP_NUMBERS")
        .env_remove("MYAPP_DEBUG")
        .env_remove("LOGGING_LEVEL")
        .env_remove("LOGGING_TARGETS");

    cmd
}

/// Write `contents` to `dir/relative`, creating parent directories.
#[allow(dead_code)]
pub fn write_tide(dir: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}

/// Path to a sample file under `demos/`.
#[allow(dead_code)]
pub fn demo_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../demos")
        .join(name)
}
