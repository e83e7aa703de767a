//! Reader for the `.tide` configuration format.
//!
//! This crate loads a hierarchical, typed configuration file into a flat
//! store of dotted keys, resolving nested blocks and imports and validating
//! every literal against its declared type. Reads go through typed accessors
//! that let environment variables shadow file values.
//!
//! ```no_run
//! # fn main() -> Result<(), tide_config::ConfigError> {
//! let config = tide_config::load("config/app.tide")?;
//! let port = config.get_int("database.port")?;
//! let features = config.get_array("myApp.features")?;
//! # let _ = (port, features);
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod convert;
pub mod env;
mod loader;
mod store;
pub mod validate;
mod value;

use std::path::Path;

pub use convert::ConvertError;
pub use env::{ArrayOverride, EnvLookup, env_var_name};
pub use loader::{
    ConfigError, ContextStack, ImportTracker, Line, TideLoader, classify, import_file_name,
    import_path,
};
pub use store::ConfigStore;
pub use validate::{ValueError, validate};
pub use value::{ConfigValue, ElementType, TypeTag};

/// Load the file at `path` with default settings.
///
/// Shorthand for `TideLoader::new().load(path)`.
pub fn load(path: impl AsRef<Path>) -> Result<ConfigStore, ConfigError> {
    TideLoader::new().load(path)
}
