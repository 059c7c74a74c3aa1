//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that assembles the environment snapshot.
//! - Select the variable prefix and the decode/route policies.
//! - Optionally merge a `.env` file into the snapshot.
//!
//! Does NOT handle:
//! - Decoding or gating (delegated to `PlatformConfig`).
//!
//! Invariants / Assumptions:
//! - Without `with_environment()`, the process environment is captured at the first
//!   step that needs it (`load_dotenv()` or `build()`).
//! - `.env` values never override variables already in the snapshot.
//! - `.env` loading never writes to the process environment.
//! - The `DOTENV_DISABLED` variable is read from the snapshot before any file is opened.

use std::path::{Path, PathBuf};

use crate::PlatformConfig;
use crate::constants::{DEFAULT_ENV_PREFIX, DOTENV_DISABLED};
use crate::environment::Environment;
use crate::error::ConfigError;
use crate::state::{DecodePolicy, RoutePolicy};

/// Builds a [`PlatformConfig`] from an environment snapshot.
#[derive(Debug)]
pub struct ConfigLoader {
    environment: Option<Environment>,
    prefix: String,
    decode_policy: DecodePolicy,
    route_policy: RoutePolicy,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a loader with the default prefix and strict policies.
    pub fn new() -> Self {
        Self {
            environment: None,
            prefix: DEFAULT_ENV_PREFIX.to_string(),
            decode_policy: DecodePolicy::default(),
            route_policy: RoutePolicy::default(),
        }
    }

    /// Read from `env` instead of the process environment.
    pub fn with_environment(mut self, env: impl Into<Environment>) -> Self {
        self.environment = Some(env.into());
        self
    }

    /// Override the prefix applied to platform variable names.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_decode_policy(mut self, policy: DecodePolicy) -> Self {
        self.decode_policy = policy;
        self
    }

    pub fn with_route_policy(mut self, policy: RoutePolicy) -> Self {
        self.route_policy = policy;
        self
    }

    fn dotenv_disabled(env: &Environment) -> bool {
        matches!(env.get(DOTENV_DISABLED), Some("true") | Some("1"))
    }

    /// Merge variables from a `.env` file found in the current directory or its parents.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1" in the snapshot, nothing is loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        self.merge_dotenv(None)
    }

    /// Merge variables from the `.env`-formatted file at `path`.
    ///
    /// Same semantics as [`ConfigLoader::load_dotenv`].
    pub fn load_dotenv_from(self, path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        self.merge_dotenv(Some(path.as_ref().to_path_buf()))
    }

    fn merge_dotenv(mut self, path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let env = self
            .environment
            .get_or_insert_with(Environment::from_process);
        if Self::dotenv_disabled(env) {
            tracing::debug!("DOTENV_DISABLED is set; skipping .env loading");
            return Ok(self);
        }

        let iter = match path {
            Some(path) => dotenvy::from_path_iter(path),
            None => dotenvy::dotenv_iter(),
        };
        let iter = match iter {
            Ok(iter) => iter,
            Err(e) if Self::is_not_found(&e) => return Ok(self),
            Err(e) => return Err(Self::map_dotenv_error(e)),
        };

        let mut merged = 0usize;
        for item in iter {
            let (key, value) = item.map_err(Self::map_dotenv_error)?;
            if env.insert_if_absent(key, value) {
                merged += 1;
            }
        }
        tracing::debug!(merged, "Merged .env variables into environment snapshot");

        Ok(self)
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    fn map_dotenv_error(err: dotenvy::Error) -> ConfigError {
        match err {
            dotenvy::Error::LineParse(_, idx) => ConfigError::DotenvParse { error_index: idx },
            dotenvy::Error::Io(io_err) => ConfigError::DotenvIo {
                kind: io_err.kind(),
            },
            _ => ConfigError::DotenvUnknown,
        }
    }

    /// Decode the snapshot and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Decode` if a structural variable that should be
    /// decoded is malformed and the decode policy is strict.
    pub fn build(self) -> Result<PlatformConfig, ConfigError> {
        let environment = self.environment.unwrap_or_else(Environment::from_process);
        PlatformConfig::load(
            environment,
            self.prefix,
            self.decode_policy,
            self.route_policy,
        )
    }
}
