//! Loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `TideLoader` that configures how files are
//!   scanned and how the resulting store reads overrides.
//! - Start each top-level load with fresh nesting and import-tracking state.
//!
//! Does NOT handle:
//! - Line-level parsing (delegated to document.rs and scanner.rs).
//! - Import resolution (delegated to import.rs).
//!
//! Invariants / Assumptions:
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.
//! - The root file is tracked from the start, so any import chain leading back
//!   to it is circular.

use std::path::Path;

use super::document::DocumentLoader;
use super::error::ConfigError;
use super::import::ImportTracker;
use crate::constants::DOTENV_DISABLED_VAR;
use crate::env::{ArrayOverride, EnvLookup};
use crate::store::ConfigStore;

/// Loads `.tide` files into a [`ConfigStore`].
#[derive(Debug, Clone, Default)]
pub struct TideLoader {
    env: EnvLookup,
    strict_blocks: bool,
    array_override: ArrayOverride,
}

impl TideLoader {
    /// Create a loader with default settings: permissive block nesting,
    /// key-name array overrides and the process environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read overrides through `lookup` instead of the process environment.
    pub fn with_env_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.env = EnvLookup::new(lookup);
        self
    }

    /// Read overrides from a fixed set of variables.
    pub fn with_env_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env = EnvLookup::from_vars(vars);
        self
    }

    /// Fail on a `}` without an open block or a block left open at end of file.
    pub fn with_strict_blocks(mut self, strict: bool) -> Self {
        self.strict_blocks = strict;
        self
    }

    pub fn with_array_override(mut self, policy: ArrayOverride) -> Self {
        self.array_override = policy;
        self
    }

    pub fn strict_blocks(&self) -> bool {
        self.strict_blocks
    }

    pub fn array_override(&self) -> ArrayOverride {
        self.array_override
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// Variables from `.env` then act as overrides like any other process
    /// variable. Missing `.env` files are silently ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if e.not_found() => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Load the file at `path` and everything it imports.
    ///
    /// # Errors
    ///
    /// Any I/O, validation, unsupported-type, circular-import or (in strict
    /// mode) unbalanced-block failure aborts the whole load.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<ConfigStore, ConfigError> {
        let path = path.as_ref();
        let root = path
            .canonicalize()
            .map_err(|e| ConfigError::io(path, e))?;

        let mut tracker = ImportTracker::new();
        tracker.enter(&root)?;
        let entries = self.document_loader().load_file(&root, &mut tracker)?;

        Ok(self.store(entries))
    }

    /// Load in-memory text as if it were the file at `origin`.
    ///
    /// `origin` need not exist; imports resolve against its directory.
    pub fn load_str(
        &self,
        source: &str,
        origin: impl AsRef<Path>,
    ) -> Result<ConfigStore, ConfigError> {
        let origin = origin.as_ref();
        let origin = origin
            .canonicalize()
            .or_else(|_| std::path::absolute(origin))
            .map_err(|e| ConfigError::io(origin, e))?;

        let mut tracker = ImportTracker::new();
        tracker.enter(&origin)?;
        let entries = self
            .document_loader()
            .load_source(source, &origin, &mut tracker)?;

        Ok(self.store(entries))
    }

    fn document_loader(&self) -> DocumentLoader {
        DocumentLoader {
            strict_blocks: self.strict_blocks,
        }
    }

    fn store(&self, entries: super::document::Entries) -> ConfigStore {
        ConfigStore::new(entries, self.env.clone(), self.array_override)
    }
}
