//! Credentials command implementation.

use anyhow::Result;
use platformsh_config::PlatformConfig;
use serde_json::Value;

/// Print one credential record, optionally adapted by a formatter.
///
/// Formatters always receive the first record of the relationship.
pub fn run(
    config: &PlatformConfig,
    relationship: &str,
    index: usize,
    formatter: Option<&str>,
) -> Result<Value> {
    if let Some(formatter) = formatter {
        return Ok(config.formatted_credentials(relationship, formatter)?);
    }
    let record = config.credentials_at(relationship, index)?;
    Ok(Value::Object(record.clone()))
}
