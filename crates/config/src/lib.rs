//! Typed access to Platform.sh deployment metadata.
//!
//! The platform injects its configuration into the process environment: a handful of
//! scalar variables plus base64-encoded JSON documents for routes, relationships,
//! variables, and the application definition. This crate decodes that environment once
//! into a [`PlatformConfig`] and answers queries against it, refusing data that does
//! not exist yet (build time) or at all (not on the platform).
//!
//! ```no_run
//! let config = platformsh_config::config()?;
//! if config.in_runtime() {
//!     let database = config.credentials("database")?;
//!     println!("database host: {}", database["host"]);
//! }
//! # Ok::<(), platformsh_config::ConfigError>(())
//! ```

pub mod constants;
mod environment;
mod error;
pub mod formatter;
mod loader;
mod platform;
mod state;
pub mod types;

pub use environment::Environment;
pub use error::{ConfigError, DecodeError};
pub use formatter::{CredentialFormatter, FormatterRegistry};
pub use loader::{ConfigLoader, decode_base64_json};
pub use platform::{PROPERTY_NAMES, PlatformConfig};
pub use state::{DecodePolicy, PlatformState, RoutePolicy};
pub use types::{Application, Credentials, Relationships, Route, Routes, Variables};

/// Build a configuration from the live process environment with default settings.
///
/// # Errors
///
/// Returns `ConfigError::Decode` if a structural variable is malformed.
pub fn config() -> Result<PlatformConfig, ConfigError> {
    PlatformConfig::new()
}
