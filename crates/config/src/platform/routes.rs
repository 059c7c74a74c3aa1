//! Route accessors.

use super::PlatformConfig;
use crate::error::ConfigError;
use crate::types::{Route, Routes};

impl PlatformConfig {
    /// All routes, keyed by URL, in declaration order.
    ///
    /// # Errors
    ///
    /// - `NotValidPlatform` outside the platform (unless local routes are allowed).
    /// - `BuildTimeVariableAccess` during build.
    pub fn routes(&self) -> Result<&Routes, ConfigError> {
        self.require_routes("routes")?;
        Ok(&self.routes)
    }

    /// The first route whose `id` equals `id`.
    pub fn get_route(&self, id: &str) -> Result<&Route, ConfigError> {
        self.routes()?
            .iter()
            .find(|route| route.id() == Some(id))
            .ok_or_else(|| ConfigError::RouteNotFound(id.to_string()))
    }

    /// The route flagged as primary.
    pub fn get_primary_route(&self) -> Result<&Route, ConfigError> {
        self.routes()?
            .iter()
            .find(|route| route.primary())
            .ok_or(ConfigError::PrimaryRouteNotFound)
    }

    /// Routes that lead to an application rather than redirecting.
    ///
    /// With `app_name`, only routes served by that application are returned
    /// (matching both `app` and `app:http` upstream forms).
    pub fn get_upstream_routes(&self, app_name: Option<&str>) -> Result<Routes, ConfigError> {
        let routes = self.routes()?;
        Ok(match app_name {
            Some(app) => routes.filtered(|route| route.has_upstream(app)),
            None => routes.filtered(|route| route.upstream().is_some_and(|u| !u.is_empty())),
        })
    }
}
