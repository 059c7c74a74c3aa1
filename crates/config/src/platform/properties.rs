//! Raw scalar properties.
//!
//! Each property reads one variable after passing its guard. Build-time
//! properties need a valid platform; the rest also need runtime.
//! `port` and `socket` come from the process host and are never prefixed.

use super::PlatformConfig;
use crate::constants::{
    APP_DIR, APPLICATION_NAME, BRANCH, DOCUMENT_ROOT, ENVIRONMENT, PORT, PROJECT,
    PROJECT_ENTROPY, SMTP_HOST, SOCKET, TREE_ID,
};
use crate::error::ConfigError;

/// Every property name accepted by [`PlatformConfig::property`].
pub const PROPERTY_NAMES: &[&str] = &[
    "app_dir",
    "application_name",
    "project",
    "tree_id",
    "project_entropy",
    "branch",
    "environment",
    "document_root",
    "smtp_host",
    "port",
    "socket",
];

impl PlatformConfig {
    fn build_property(&self, property: &str, name: &str) -> Result<Option<&str>, ConfigError> {
        self.require_valid(property)?;
        Ok(self.value(name))
    }

    fn runtime_property(&self, property: &str, name: &str) -> Result<Option<&str>, ConfigError> {
        self.require_runtime(property)?;
        Ok(self.value(name))
    }

    /// Absolute path to the application directory.
    pub fn app_dir(&self) -> Result<Option<&str>, ConfigError> {
        self.build_property("app_dir", APP_DIR)
    }

    /// Name of the application, as set in `.platform.app.yaml`.
    pub fn application_name(&self) -> Result<&str, ConfigError> {
        self.value(APPLICATION_NAME)
            .ok_or_else(|| ConfigError::not_valid_platform("application_name"))
    }

    pub fn project(&self) -> Result<Option<&str>, ConfigError> {
        self.build_property("project", PROJECT)
    }

    /// ID of the tree the application was built from.
    pub fn tree_id(&self) -> Result<Option<&str>, ConfigError> {
        self.build_property("tree_id", TREE_ID)
    }

    /// Random value stable for the life of the project, for seeding hashes.
    pub fn project_entropy(&self) -> Result<Option<&str>, ConfigError> {
        self.build_property("project_entropy", PROJECT_ENTROPY)
    }

    pub fn branch(&self) -> Result<Option<&str>, ConfigError> {
        self.runtime_property("branch", BRANCH)
    }

    pub fn environment(&self) -> Result<Option<&str>, ConfigError> {
        self.runtime_property("environment", ENVIRONMENT)
    }

    /// Absolute path to the web document root.
    pub fn document_root(&self) -> Result<Option<&str>, ConfigError> {
        self.runtime_property("document_root", DOCUMENT_ROOT)
    }

    /// SMTP host to send mail through, if outgoing mail is enabled.
    pub fn smtp_host(&self) -> Result<Option<&str>, ConfigError> {
        self.runtime_property("smtp_host", SMTP_HOST)
    }

    pub fn port(&self) -> Result<Option<&str>, ConfigError> {
        self.require_runtime("port")?;
        Ok(self.environment.var_or_none(PORT))
    }

    pub fn socket(&self) -> Result<Option<&str>, ConfigError> {
        self.require_runtime("socket")?;
        Ok(self.environment.var_or_none(SOCKET))
    }

    /// Look up a property by its name (see [`PROPERTY_NAMES`]).
    ///
    /// Returns `None` for an unknown name.
    pub fn property(&self, name: &str) -> Option<Result<Option<&str>, ConfigError>> {
        let value = match name {
            "app_dir" => self.app_dir(),
            "application_name" => self.application_name().map(Some),
            "project" => self.project(),
            "tree_id" => self.tree_id(),
            "project_entropy" => self.project_entropy(),
            "branch" => self.branch(),
            "environment" => self.environment(),
            "document_root" => self.document_root(),
            "smtp_host" => self.smtp_host(),
            "port" => self.port(),
            "socket" => self.socket(),
            _ => return None,
        };
        Some(value)
    }
}
