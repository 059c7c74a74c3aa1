//! Credential formatters.
//!
//! Responsibilities:
//! - Hold the open registry of named formatters, each turning a generic
//!   credential record into the shape a specific client library expects.
//! - Ship the built-in `solr-node` and `puppeteer` formatters.
//!
//! Does NOT handle:
//! - Looking up credentials (see `PlatformConfig::credentials`).
//!
//! Invariants:
//! - Registering under an existing name replaces the previous formatter.
//! - Formatters are `Send + Sync` so a built configuration can be shared across threads.

use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::constants::{FORMATTER_PUPPETEER, FORMATTER_SOLR_NODE};
use crate::error::ConfigError;
use crate::types::Credentials;

mod puppeteer;
mod solr;

pub use puppeteer::puppeteer;
pub use solr::solr_node;

/// A function adapting one credential record into a client-specific value.
pub type CredentialFormatter =
    dyn Fn(&Credentials) -> Result<Value, ConfigError> + Send + Sync + 'static;

/// Named credential formatters.
#[derive(Clone, Default)]
pub struct FormatterRegistry {
    formatters: HashMap<String, Arc<CredentialFormatter>>,
}

impl FormatterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in formatters.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(FORMATTER_SOLR_NODE, solr_node);
        registry.register(FORMATTER_PUPPETEER, puppeteer);
        registry
    }

    pub fn register<F>(&mut self, name: impl Into<String>, formatter: F)
    where
        F: Fn(&Credentials) -> Result<Value, ConfigError> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.formatters.insert(name.clone(), Arc::new(formatter)).is_some() {
            tracing::debug!(formatter = %name, "Replaced credential formatter");
        }
    }

    pub fn get(&self, name: &str) -> Option<&CredentialFormatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.formatters.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for FormatterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatterRegistry")
            .field("names", &self.names())
            .finish()
    }
}

/// Read a required field from a credential record.
pub(crate) fn required_field<'a>(
    credentials: &'a Credentials,
    formatter: &str,
    field: &str,
) -> Result<&'a Value, ConfigError> {
    credentials
        .get(field)
        .filter(|value| !value.is_null())
        .ok_or_else(|| ConfigError::InvalidCredentials {
            formatter: formatter.to_string(),
            message: format!("missing '{}' field", field),
        })
}
