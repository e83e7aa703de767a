//! Loading `.tide` files into a store.
//!
//! Responsibilities:
//! - Classify lines, track block nesting, resolve imports and validate
//!   assignments in a single pass per file.
//! - Provide a builder-pattern `TideLoader` for load settings.
//!
//! Does NOT handle:
//! - Typed reads and environment overrides (see `store.rs`).
//!
//! Invariants / Assumptions:
//! - The whole file is read before the store is returned; there is no partial store.
//! - Nesting and import-tracking state are created per top-level load and
//!   passed explicitly, never shared between loads.

mod builder;
mod context;
mod document;
mod error;
mod import;
mod scanner;

#[cfg(test)]
mod tests;

pub use builder::TideLoader;
pub use context::ContextStack;
pub use error::ConfigError;
pub use import::{ImportTracker, import_file_name, import_path};
pub use scanner::{Line, classify};
