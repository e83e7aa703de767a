//! Single-pass document loading.
//!
//! Responsibilities:
//! - Drive one pass over a file's lines and build its entries.
//! - Maintain block nesting, merge imports in place, validate assignments.
//!
//! Does NOT handle:
//! - Line classification rules (see `scanner.rs`).
//! - Import path resolution and cycle detection (see `import.rs`).
//! - Environment overrides (applied at read time by `ConfigStore`).
//!
//! Invariants:
//! - Textual order decides precedence: a later assignment or import overwrites
//!   earlier entries with the same key.
//! - Any failure aborts the whole load; no partial entries are returned.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::context::ContextStack;
use super::error::ConfigError;
use super::import::{ImportTracker, resolve_import};
use super::scanner::{Line, classify};
use crate::validate::validate;
use crate::value::ConfigValue;

/// Entries produced by one load, keyed by dotted key.
pub(crate) type Entries = HashMap<String, ConfigValue>;

/// Scan settings shared by a file and everything it imports.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct DocumentLoader {
    pub strict_blocks: bool,
}

impl DocumentLoader {
    /// Read and load the file at `path`.
    ///
    /// The caller has already registered `path` with `tracker`.
    pub fn load_file(
        &self,
        path: &Path,
        tracker: &mut ImportTracker,
    ) -> Result<Entries, ConfigError> {
        tracing::debug!(path = %path.display(), "Loading config file");
        let source = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        self.load_source(&source, path, tracker)
    }

    /// Load already-read text; `origin` locates imports and error reports.
    pub fn load_source(
        &self,
        source: &str,
        origin: &Path,
        tracker: &mut ImportTracker,
    ) -> Result<Entries, ConfigError> {
        let mut entries = Entries::new();
        let mut context = ContextStack::new();
        let mut last_line = 0;

        for (index, text) in source.lines().enumerate() {
            let line_no = index + 1;
            last_line = line_no;
            let line = classify(text);
            tracing::trace!(line = line_no, kind = ?line, "Classified line");

            match line {
                Line::Skip => {}
                Line::Import(arg) => {
                    let imported = resolve_import(self, origin, arg, tracker)?;
                    entries.extend(imported);
                }
                Line::BlockOpen(name) => context.push(name),
                Line::BlockClose => {
                    if !context.pop() {
                        self.unbalanced(origin, line_no)?;
                    }
                }
                Line::Assignment {
                    field,
                    type_tag,
                    raw,
                } => {
                    let key = context.qualify(field);
                    let value = ConfigValue::from_assignment(raw, type_tag);
                    validate(&value)
                        .map_err(|e| ConfigError::invalid_value(&key, &value.type_tag, e))?;
                    entries.insert(key, value);
                }
            }
        }

        if !context.is_empty() {
            self.unbalanced(origin, last_line)?;
        }

        tracing::debug!(
            path = %origin.display(),
            keys = entries.len(),
            "Loaded config file"
        );
        Ok(entries)
    }

    fn unbalanced(&self, origin: &Path, line: usize) -> Result<(), ConfigError> {
        if self.strict_blocks {
            return Err(ConfigError::UnbalancedBlock {
                path: origin.to_path_buf(),
                line,
            });
        }
        tracing::warn!(
            path = %origin.display(),
            line,
            "Ignoring unbalanced block"
        );
        Ok(())
    }
}
