//! Command dispatch logic.
//!
//! Responsibilities:
//! - Build the loader from global flags.
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Logging setup and `.env` loading (see `main()`).

use anyhow::Result;
use tide_config::TideLoader;

use crate::args::{Cli, Commands};
use crate::commands;

/// Loader configured from the global CLI flags; reads the process environment.
pub(crate) fn build_loader(cli: &Cli) -> TideLoader {
    TideLoader::new()
        .with_strict_blocks(cli.strict_blocks)
        .with_array_override(cli.array_override.into())
}

pub(crate) fn run_command(cli: Cli, loader: &TideLoader) -> Result<()> {
    match cli.command {
        Commands::Check { file } => commands::check::run(loader, &file),
        Commands::Get { file, key, kind } => commands::get::run(loader, &file, &key, kind),
        Commands::Dump { file, format } => commands::dump::run(loader, &file, format),
    }
}
