//! Variable and application accessors.

use serde_json::Value;

use super::PlatformConfig;
use crate::error::ConfigError;
use crate::types::{Application, Variables};

impl PlatformConfig {
    /// A project or environment variable.
    ///
    /// Returns `None` when the variable is not defined or this is not a platform.
    pub fn variable(&self, name: &str) -> Option<&Value> {
        if !self.is_valid_platform() {
            return None;
        }
        self.variables.get(name)
    }

    /// A variable, or `default` when it is not defined or this is not a platform.
    pub fn variable_or(&self, name: &str, default: impl Into<Value>) -> Value {
        self.variable(name)
            .cloned()
            .unwrap_or_else(|| default.into())
    }

    /// All project and environment variables.
    pub fn variables(&self) -> Result<&Variables, ConfigError> {
        self.require_valid("variables")?;
        Ok(&self.variables)
    }

    /// The application definition.
    pub fn application(&self) -> Result<&Application, ConfigError> {
        self.require_valid("application")?;
        Ok(&self.application)
    }
}
