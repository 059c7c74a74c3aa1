//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to tell failure modes apart.
//! - Map `ConfigError` and `CliError` variants to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1 and 3-6 are reserved for specific error categories.
//! - Exit code 2 belongs to clap usage errors and is never returned for a failed command.

use platformsh_config::ConfigError;
use thiserror::Error;

/// Failures detected by the CLI itself rather than the configuration library.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Variable '{0}' is not defined")]
    VariableNotFound(String),

    #[error("Unknown property '{0}'")]
    UnknownProperty(String),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Structured exit codes for platformsh-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// The requested value only exists at runtime and the build is still running.
    BuildTime = 3,

    /// Relationship, route, formatter, or variable not found.
    NotFound = 4,

    /// A structural variable is not valid base64-encoded JSON.
    DecodeError = 5,

    /// The environment is not a Platform.sh environment.
    NotAPlatform = 6,
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
            ConfigError::NotValidPlatform { .. } => ExitCode::NotAPlatform,
            ConfigError::BuildTimeVariableAccess { .. } => ExitCode::BuildTime,

            ConfigError::NoCredentialFormatterFound(_)
            | ConfigError::RelationshipNotFound(_)
            | ConfigError::RelationshipIndexOutOfRange { .. }
            | ConfigError::RouteNotFound(_)
            | ConfigError::PrimaryRouteNotFound => ExitCode::NotFound,

            ConfigError::Decode { .. } => ExitCode::DecodeError,

            ConfigError::InvalidCredentials { .. }
            | ConfigError::DotenvParse { .. }
            | ConfigError::DotenvIo { .. }
            | ConfigError::DotenvUnknown => ExitCode::GeneralError,
        }
    }
}

impl From<&CliError> for ExitCode {
    fn from(err: &CliError) -> Self {
        match err {
            CliError::VariableNotFound(_) => ExitCode::NotFound,
            CliError::UnknownProperty(_) | CliError::Output(_) => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(config_err);
            }
            if let Some(cli_err) = cause.downcast_ref::<CliError>() {
                return ExitCode::from(cli_err);
            }
        }

        ExitCode::GeneralError
    }
}
