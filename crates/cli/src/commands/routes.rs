//! Routes command implementation.

use anyhow::{Context, Result};
use platformsh_config::PlatformConfig;
use serde_json::Value;
use tracing::debug;

/// Which routes to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteSelection {
    All,
    Primary,
    Id(String),
    /// Upstream routes; `None` keeps every application.
    Upstream(Option<String>),
}

impl RouteSelection {
    pub fn from_flags(upstream: Option<Option<String>>, primary: bool, id: Option<String>) -> Self {
        if primary {
            RouteSelection::Primary
        } else if let Some(id) = id {
            RouteSelection::Id(id)
        } else if let Some(app) = upstream {
            RouteSelection::Upstream(app)
        } else {
            RouteSelection::All
        }
    }
}

pub fn run(config: &PlatformConfig, selection: RouteSelection) -> Result<Value> {
    debug!(?selection, "Selecting routes");

    let value = match selection {
        RouteSelection::All => serde_json::to_value(config.routes()?)?,
        RouteSelection::Primary => serde_json::to_value(config.get_primary_route()?)?,
        RouteSelection::Id(id) => serde_json::to_value(config.get_route(&id)?)?,
        RouteSelection::Upstream(app) => {
            let routes = config
                .get_upstream_routes(app.as_deref())
                .context("Failed to select upstream routes")?;
            serde_json::to_value(routes)?
        }
    };
    Ok(value)
}
