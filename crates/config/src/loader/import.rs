//! Import directive resolution.
//!
//! Responsibilities:
//! - Turn an import argument into a file path relative to the importing file.
//! - Detect circular imports along the current import chain.
//! - Recursively load the imported file and hand back its entries for merging.
//!
//! Does NOT handle:
//! - Merging imported entries into the importer (see `document.rs`).
//!
//! Invariants:
//! - Paths are resolved against the directory of the importing file, never the
//!   process working directory.
//! - A path is tracked only while its load is in progress, so the same file may
//!   be imported from several places as long as no file imports itself.
//! - Tracking state belongs to one top-level load and is passed explicitly.

use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

use super::document::{DocumentLoader, Entries};
use super::error::ConfigError;
use crate::constants::FILE_EXTENSION;

/// Canonical paths of the files whose load is currently in progress.
#[derive(Debug, Default)]
pub struct ImportTracker {
    in_progress: HashSet<PathBuf>,
}

impl ImportTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `path` as being loaded.
    ///
    /// # Errors
    ///
    /// `ConfigError::CircularImport` if `path` is already being loaded.
    pub fn enter(&mut self, path: &Path) -> Result<(), ConfigError> {
        if !self.in_progress.insert(path.to_path_buf()) {
            return Err(ConfigError::CircularImport {
                path: path.to_path_buf(),
            });
        }
        Ok(())
    }

    pub fn leave(&mut self, path: &Path) {
        self.in_progress.remove(path);
    }

    #[cfg(test)]
    fn contains(&self, path: &Path) -> bool {
        self.in_progress.contains(path)
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.in_progress.is_empty()
    }
}

/// File name an import argument refers to.
///
/// Arguments already ending in `.tide` are used as-is; otherwise dots become
/// path separators and the extension is appended (`a.b` -> `a/b.tide`).
pub fn import_file_name(arg: &str) -> PathBuf {
    let suffix = format!(".{FILE_EXTENSION}");
    if arg.ends_with(&suffix) {
        PathBuf::from(arg)
    } else {
        PathBuf::from(format!("{}{suffix}", arg.replace('.', "/")))
    }
}

/// Path of the import target, before canonicalization.
///
/// The target always nests under the importer's directory: root and prefix
/// components of the file name are dropped before joining.
pub fn import_path(base_path: &Path, arg: &str) -> PathBuf {
    let dir = base_path.parent().unwrap_or_else(|| Path::new(""));
    let relative: PathBuf = import_file_name(arg)
        .components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
        .collect();
    dir.join(relative)
}

/// Resolve and load the file named by an import directive in `base_path`.
pub(crate) fn resolve_import(
    loader: &DocumentLoader,
    base_path: &Path,
    arg: &str,
    tracker: &mut ImportTracker,
) -> Result<Entries, ConfigError> {
    let target = import_path(base_path, arg);
    let target = fs::canonicalize(&target).map_err(|e| ConfigError::io(&target, e))?;

    tracing::debug!(
        importer = %base_path.display(),
        target = %target.display(),
        "Resolving import"
    );

    tracker.enter(&target)?;
    let result = loader.load_file(&target, tracker);
    tracker.leave(&target);
    result
}
