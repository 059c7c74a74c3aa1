//! Relationship accessors and the credential formatter hook.

use serde_json::Value;

use super::PlatformConfig;
use crate::error::ConfigError;
use crate::types::{Credentials, Relationships};

impl PlatformConfig {
    /// The first credential record of `relationship`.
    pub fn credentials(&self, relationship: &str) -> Result<&Credentials, ConfigError> {
        self.credentials_at(relationship, 0)
    }

    /// The credential record at `index` for `relationship`.
    ///
    /// # Errors
    ///
    /// - `NotValidPlatform` / `BuildTimeVariableAccess` when relationships are not readable.
    /// - `RelationshipNotFound` if the relationship has no records.
    /// - `RelationshipIndexOutOfRange` if `index` is past the last record.
    pub fn credentials_at(
        &self,
        relationship: &str,
        index: usize,
    ) -> Result<&Credentials, ConfigError> {
        self.require_routes("credentials")?;

        let records = self
            .relationships
            .get(relationship)
            .filter(|records| !records.is_empty())
            .ok_or_else(|| ConfigError::RelationshipNotFound(relationship.to_string()))?;

        records
            .get(index)
            .ok_or_else(|| ConfigError::RelationshipIndexOutOfRange {
                name: relationship.to_string(),
                index,
                len: records.len(),
            })
    }

    /// Every relationship and its records.
    pub fn relationships(&self) -> Result<&Relationships, ConfigError> {
        self.require_routes("relationships")?;
        Ok(&self.relationships)
    }

    /// Whether `relationship` is defined with at least one record.
    ///
    /// Never fails; outside runtime the answer is simply `false`.
    pub fn has_relationship(&self, relationship: &str) -> bool {
        self.relationships
            .get(relationship)
            .is_some_and(|records| !records.is_empty())
    }

    /// Register `formatter` under `name`, replacing any previous one.
    pub fn register_formatter<F>(&mut self, name: impl Into<String>, formatter: F) -> &mut Self
    where
        F: Fn(&Credentials) -> Result<Value, ConfigError> + Send + Sync + 'static,
    {
        self.formatters.register(name, formatter);
        self
    }

    /// Format the first record of `relationship` with the formatter named `formatter`.
    ///
    /// # Errors
    ///
    /// `NoCredentialFormatterFound` if no such formatter is registered; otherwise any
    /// error from [`PlatformConfig::credentials`] or from the formatter itself.
    pub fn formatted_credentials(
        &self,
        relationship: &str,
        formatter: &str,
    ) -> Result<Value, ConfigError> {
        let format = self
            .formatters
            .get(formatter)
            .ok_or_else(|| ConfigError::NoCredentialFormatterFound(formatter.to_string()))?;
        format(self.credentials(relationship)?)
    }

    /// Names of the registered credential formatters.
    pub fn formatter_names(&self) -> Vec<&str> {
        self.formatters.names()
    }
}
