//! Tide CLI - command-line reader for `.tide` configuration files.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Load a file through `tide-config` and print values or diagnostics.
//!
//! Does NOT handle:
//! - Parsing or validation logic (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE any file is loaded so `.env` entries act
//!   as overrides.
//! - Logs go to stderr; stdout carries only command output.

mod args;
mod commands;
mod dispatch;
mod error;

use args::Cli;
use clap::Parser;
use dispatch::{build_loader, run_command};
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let loader = match build_loader(&cli).load_dotenv() {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Failed to load environment: {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let exit_code = match run_command(cli, &loader) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
