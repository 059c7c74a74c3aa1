//! Deployment state and loading policies.
//!
//! The state is derived from two facts about the environment: whether an
//! application name is present, and whether an environment name is present.
//!
//! | application name | environment name | state          |
//! |------------------|------------------|----------------|
//! | absent           | any              | `NotAPlatform` |
//! | present          | absent           | `Build`        |
//! | present          | present          | `Runtime`      |

use serde::Serialize;
use std::fmt;

/// Where in its lifecycle the current process is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformState {
    /// Not running on the platform at all (plain local process).
    NotAPlatform,
    /// The application image is being built; no routes or relationships exist yet.
    Build,
    /// The application is serving traffic.
    Runtime,
}

impl PlatformState {
    pub fn from_markers(has_application_name: bool, has_environment: bool) -> Self {
        match (has_application_name, has_environment) {
            (false, _) => Self::NotAPlatform,
            (true, false) => Self::Build,
            (true, true) => Self::Runtime,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotAPlatform => "not_a_platform",
            Self::Build => "build",
            Self::Runtime => "runtime",
        }
    }
}

impl fmt::Display for PlatformState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to do when a structural variable is present but malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodePolicy {
    /// Fail construction with `ConfigError::Decode`.
    #[default]
    Strict,
    /// Log a warning and leave the field empty.
    Lenient,
}

/// Which states may read routes and relationships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoutePolicy {
    /// Routes and relationships exist only at runtime.
    #[default]
    Strict,
    /// Outside the platform (no application name), routes and relationships
    /// are served from whatever variables are present. Build state is still refused.
    AllowLocal,
}
