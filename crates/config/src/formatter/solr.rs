//! `solr-node` formatter: connection options for the `solr-node` client.

use serde_json::{Value, json};

use super::required_field;
use crate::constants::FORMATTER_SOLR_NODE;
use crate::error::ConfigError;
use crate::types::Credentials;

/// Produce `{host, port, protocol, core}` where `core` is the last segment of `path`.
pub fn solr_node(credentials: &Credentials) -> Result<Value, ConfigError> {
    let host = required_field(credentials, FORMATTER_SOLR_NODE, "host")?;
    let port = required_field(credentials, FORMATTER_SOLR_NODE, "port")?;
    let path = required_field(credentials, FORMATTER_SOLR_NODE, "path")?
        .as_str()
        .ok_or_else(|| ConfigError::InvalidCredentials {
            formatter: FORMATTER_SOLR_NODE.to_string(),
            message: "'path' must be a string".to_string(),
        })?;
    let core = path.rsplit('/').next().unwrap_or(path);

    Ok(json!({
        "host": host,
        "port": port,
        "protocol": "http",
        "core": core,
    }))
}
