//! Status command implementation.

use anyhow::Result;
use platformsh_config::{PlatformConfig, PlatformState};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
struct Status {
    state: PlatformState,
    valid: bool,
    build: bool,
    runtime: bool,
    enterprise: bool,
    production: Option<bool>,
}

/// Summarize the deployment state. Never fails on a readable environment.
pub fn run(config: &PlatformConfig) -> Result<Value> {
    let status = Status {
        state: config.state(),
        valid: config.is_valid_platform(),
        build: config.in_build(),
        runtime: config.in_runtime(),
        enterprise: config.on_enterprise(),
        production: config.on_production(),
    };
    Ok(serde_json::to_value(status)?)
}
