//! The `PlatformConfig` facade.
//!
//! Responsibilities:
//! - Decode the environment snapshot once, at construction.
//! - Derive the deployment state (not a platform, build, runtime).
//! - Gate every accessor on that state through two guard helpers.
//!
//! Does NOT handle:
//! - Assembling the snapshot or reading `.env` files (see `loader`).
//! - Client-specific credential shapes (see `formatter`).
//!
//! Invariants:
//! - Routes and relationships are decoded only when they are readable in the
//!   current state; variables and the application whenever the platform is valid.
//! - After construction only the formatter registry changes.

use std::fmt;

use crate::constants::{
    APPLICATION, APPLICATION_NAME, BRANCH, DEFAULT_ENV_PREFIX, ENVIRONMENT, MODE,
    MODE_ENTERPRISE, PRODUCTION_BRANCH_DEDICATED, PRODUCTION_BRANCH_STANDARD, RELATIONSHIPS,
    ROUTES, VARIABLES,
};
use crate::environment::Environment;
use crate::error::ConfigError;
use crate::formatter::FormatterRegistry;
use crate::loader::ConfigLoader;
use crate::loader::decode::decode_var;
use crate::state::{DecodePolicy, PlatformState, RoutePolicy};
use crate::types::{Application, Relationships, Routes, Variables};

mod data;
mod properties;
mod relationships;
mod routes;

pub use properties::PROPERTY_NAMES;

/// Typed access to the deployment metadata the platform injects into the environment.
#[derive(Clone)]
pub struct PlatformConfig {
    environment: Environment,
    prefix: String,
    route_policy: RoutePolicy,
    routes: Routes,
    relationships: Relationships,
    variables: Variables,
    application: Application,
    formatters: FormatterRegistry,
}

impl PlatformConfig {
    /// Read the live process environment with the default prefix.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Decode` if a structural variable is malformed.
    pub fn new() -> Result<Self, ConfigError> {
        ConfigLoader::new().build()
    }

    /// Read an injected environment with the given prefix.
    pub fn from_env(
        env: impl Into<Environment>,
        prefix: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        ConfigLoader::new()
            .with_environment(env)
            .with_prefix(prefix)
            .build()
    }

    pub(crate) fn load(
        environment: Environment,
        prefix: String,
        decode_policy: DecodePolicy,
        route_policy: RoutePolicy,
    ) -> Result<Self, ConfigError> {
        let mut config = Self {
            environment,
            prefix,
            route_policy,
            routes: Routes::default(),
            relationships: Relationships::default(),
            variables: Variables::default(),
            application: Application::default(),
            formatters: FormatterRegistry::with_builtins(),
        };

        if config.routes_readable() {
            config.routes = decode_var(&config.environment, &config.key(ROUTES), decode_policy)?;
            config.relationships =
                decode_var(&config.environment, &config.key(RELATIONSHIPS), decode_policy)?;
        }
        if config.is_valid_platform() {
            config.variables =
                decode_var(&config.environment, &config.key(VARIABLES), decode_policy)?;
            config.application =
                decode_var(&config.environment, &config.key(APPLICATION), decode_policy)?;
        }

        tracing::debug!(
            state = %config.state(),
            prefix = %config.prefix,
            routes = config.routes.len(),
            relationships = config.relationships.len(),
            variables = config.variables.len(),
            "Loaded platform configuration"
        );

        Ok(config)
    }

    /// The prefix applied to platform variable names.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn key(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }

    /// Read a prefixed variable, treating empty values as unset.
    fn value(&self, name: &str) -> Option<&str> {
        self.environment.var_or_none(&self.key(name))
    }

    // ========================================================================
    // State
    // ========================================================================

    pub fn state(&self) -> PlatformState {
        PlatformState::from_markers(
            self.value(APPLICATION_NAME).is_some(),
            self.value(ENVIRONMENT).is_some(),
        )
    }

    /// Whether the environment carries enough metadata to be a real deployment.
    pub fn is_valid_platform(&self) -> bool {
        self.state() != PlatformState::NotAPlatform
    }

    pub fn in_build(&self) -> bool {
        self.state() == PlatformState::Build
    }

    pub fn in_runtime(&self) -> bool {
        self.state() == PlatformState::Runtime
    }

    /// Whether this is a Dedicated (formerly Enterprise) cluster.
    pub fn on_enterprise(&self) -> bool {
        self.is_valid_platform() && self.value(MODE) == Some(MODE_ENTERPRISE)
    }

    /// Alias for [`PlatformConfig::on_enterprise`].
    pub fn on_dedicated(&self) -> bool {
        self.on_enterprise()
    }

    /// Whether this is the production environment.
    ///
    /// Returns `None` outside runtime, where there is no branch to compare.
    pub fn on_production(&self) -> Option<bool> {
        if !self.in_runtime() {
            return None;
        }
        let production_branch = if self.on_enterprise() {
            PRODUCTION_BRANCH_DEDICATED
        } else {
            PRODUCTION_BRANCH_STANDARD
        };
        Some(self.value(BRANCH) == Some(production_branch))
    }

    // ========================================================================
    // Guards
    // ========================================================================

    fn require_valid(&self, property: &str) -> Result<(), ConfigError> {
        if self.is_valid_platform() {
            Ok(())
        } else {
            Err(ConfigError::not_valid_platform(property))
        }
    }

    fn require_runtime(&self, property: &str) -> Result<(), ConfigError> {
        self.require_valid(property)?;
        if self.in_build() {
            return Err(ConfigError::build_time_access(property));
        }
        Ok(())
    }

    /// Runtime gate for routes and relationships, relaxed by `RoutePolicy::AllowLocal`.
    fn require_routes(&self, property: &str) -> Result<(), ConfigError> {
        match (self.state(), self.route_policy) {
            (PlatformState::NotAPlatform, RoutePolicy::AllowLocal) => Ok(()),
            _ => self.require_runtime(property),
        }
    }

    fn routes_readable(&self) -> bool {
        self.require_routes(ROUTES).is_ok()
    }
}

impl fmt::Debug for PlatformConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Credentials and variables are omitted; they routinely hold secrets.
        f.debug_struct("PlatformConfig")
            .field("state", &self.state())
            .field("prefix", &self.prefix)
            .field("route_policy", &self.route_policy)
            .field("routes", &self.routes.len())
            .field("relationships", &self.relationships.keys().collect::<Vec<_>>())
            .field("formatters", &self.formatters)
            .finish_non_exhaustive()
    }
}

impl Default for PlatformConfig {
    /// An empty, non-platform configuration.
    fn default() -> Self {
        Self {
            environment: Environment::new(),
            prefix: DEFAULT_ENV_PREFIX.to_string(),
            route_policy: RoutePolicy::default(),
            routes: Routes::default(),
            relationships: Relationships::default(),
            variables: Variables::default(),
            application: Application::default(),
            formatters: FormatterRegistry::with_builtins(),
        }
    }
}
