//! `puppeteer` formatter: the browser URL for a headless Chrome relationship.

use serde_json::Value;

use super::required_field;
use crate::constants::FORMATTER_PUPPETEER;
use crate::error::ConfigError;
use crate::types::Credentials;

/// Produce `"http://<ip>:<port>"` as a JSON string.
pub fn puppeteer(credentials: &Credentials) -> Result<Value, ConfigError> {
    let ip = scalar(required_field(credentials, FORMATTER_PUPPETEER, "ip")?);
    let port = scalar(required_field(credentials, FORMATTER_PUPPETEER, "port")?);
    Ok(Value::String(format!("http://{}:{}", ip, port)))
}

// Ports arrive as numbers or strings depending on the service.
fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
