//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ConfigError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-6 are reserved for specific error categories.

use tide_config::ConfigError;

/// Structured exit codes for the `tide` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// A file or import could not be read.
    IoError = 2,

    /// A literal does not match its declared type, the type is unknown, or
    /// blocks are unbalanced in strict mode.
    ///
    /// Scripts should fix the file and not retry.
    InvalidConfig = 3,

    /// An import chain leads back to a file already being loaded.
    CircularImport = 4,

    /// The key is in neither the environment nor the file.
    KeyNotFound = 5,

    /// The value cannot be read with the requested accessor.
    TypeMismatch = 6,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::Io { .. } => ExitCode::IoError,

            ConfigError::Validation { .. }
            | ConfigError::UnsupportedType { .. }
            | ConfigError::UnbalancedBlock { .. } => ExitCode::InvalidConfig,

            ConfigError::CircularImport { .. } => ExitCode::CircularImport,

            ConfigError::KeyNotFound(_) => ExitCode::KeyNotFound,

            ConfigError::TypeMismatch { .. } | ConfigError::Conversion { .. } => {
                ExitCode::TypeMismatch
            }

            ConfigError::DotenvParse { .. }
            | ConfigError::DotenvIo { .. }
            | ConfigError::DotenvUnknown => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no ConfigError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ConfigError>())
            .map_or(ExitCode::GeneralError, ExitCode::from)
    }
}
