//! Variable, variables, and application command implementations.

use anyhow::Result;
use platformsh_config::PlatformConfig;
use serde_json::Value;

use crate::error::CliError;

/// Print one variable, falling back to `default` when it is not defined.
///
/// Off the platform every variable is undefined, so only the default can be printed.
pub fn run_variable(config: &PlatformConfig, name: &str, default: Option<&str>) -> Result<Value> {
    match (config.variable(name), default) {
        (Some(value), _) => Ok(value.clone()),
        (None, Some(default)) => Ok(Value::String(default.to_string())),
        (None, None) => Err(CliError::VariableNotFound(name.to_string()).into()),
    }
}

pub fn run_variables(config: &PlatformConfig) -> Result<Value> {
    Ok(Value::Object(config.variables()?.clone()))
}

pub fn run_application(config: &PlatformConfig) -> Result<Value> {
    Ok(Value::Object(config.application()?.clone()))
}
