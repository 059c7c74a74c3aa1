//! Property command implementation.

use anyhow::Result;
use platformsh_config::PlatformConfig;
use serde_json::Value;

use crate::error::CliError;

/// Print a scalar property as a JSON string, or `null` when it is unset.
pub fn run(config: &PlatformConfig, name: &str) -> Result<Value> {
    let value = config
        .property(name)
        .ok_or_else(|| CliError::UnknownProperty(name.to_string()))??;
    Ok(value.map_or(Value::Null, |v| Value::String(v.to_string())))
}
