//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Translate CLI enums into loader settings.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tide_config::ArrayOverride;

#[derive(Parser)]
#[command(name = "tide")]
#[command(about = "Read and check .tide configuration files", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  tide check config/app.tide\n  tide get config/app.tide database.port --as int\n  DATABASE_PORT=9999 tide get config/app.tide database.port\n  tide dump config/app.tide --format json\n"
)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Fail on unbalanced `}` lines and blocks left open at end of file
    #[arg(long, global = true)]
    pub strict_blocks: bool,

    /// How environment overrides decide whether they hold an array
    #[arg(long, global = true, value_enum, default_value_t = ArrayOverrideArg::KeyName)]
    pub array_override: ArrayOverrideArg,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load a file and its imports, reporting the first error
    Check {
        /// Path to the .tide file
        file: PathBuf,
    },

    /// Print one value, applying environment overrides
    Get {
        /// Path to the .tide file
        file: PathBuf,

        /// Dotted key, e.g. database.port
        key: String,

        /// Accessor used to read the value
        #[arg(long = "as", value_enum, default_value_t = ValueKind::String)]
        kind: ValueKind,
    },

    /// Print every stored key, sorted
    Dump {
        /// Path to the .tide file
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = DumpFormat::Text)]
        format: DumpFormat,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ArrayOverrideArg {
    /// Keys containing "array" take comma-separated overrides as arrays
    KeyName,
    /// Keys declared with an array type take comma-separated overrides as arrays
    DeclaredType,
}

impl From<ArrayOverrideArg> for ArrayOverride {
    fn from(arg: ArrayOverrideArg) -> Self {
        match arg {
            ArrayOverrideArg::KeyName => ArrayOverride::KeyName,
            ArrayOverrideArg::DeclaredType => ArrayOverride::DeclaredType,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ValueKind {
    String,
    Bool,
    Int,
    Int32,
    Int64,
    Array,
    IntArray,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DumpFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_get_defaults_to_string() {
        let cli = Cli::try_parse_from(["tide", "get", "a.tide", "k"]).unwrap();
        match cli.command {
            Commands::Get { kind, key, .. } => {
                assert_eq!(kind, ValueKind::String);
                assert_eq!(key, "k");
            }
            _ => panic!("expected get"),
        }
        assert_eq!(cli.array_override, ArrayOverrideArg::KeyName);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "tide",
            "get",
            "a.tide",
            "k",
            "--as",
            "int-array",
            "--strict-blocks",
            "--array-override",
            "declared-type",
        ])
        .unwrap();
        assert!(cli.strict_blocks);
        assert_eq!(
            ArrayOverride::from(cli.array_override),
            ArrayOverride::DeclaredType
        );
        assert!(matches!(
            cli.command,
            Commands::Get {
                kind: ValueKind::IntArray,
                ..
            }
        ));
    }
}
