//! Shared test utilities for platformsh-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Provide build-time and runtime platform environments.
//!
//! Invariants / Assumptions:
//! - All integration tests using these helpers are hermetic by default.
//! - Host `PLATFORM_*`, `PORT`, and `SOCKET` variables never reach the child process.

#![allow(dead_code)]

use assert_cmd::Command;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Value, json};

pub fn encode(value: &Value) -> String {
    STANDARD.encode(serde_json::to_vec(value).expect("Failed to serialize"))
}

/// Returns a hermetic `platformsh-cli` command with no platform variables set.
pub fn platform_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("platformsh-cli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    for (key, _) in std::env::vars() {
        if key.starts_with("PLATFORM_") || key.starts_with("PLATFORMSH_CLI_") {
            cmd.env_remove(&key);
        }
    }
    cmd.env_remove("PORT").env_remove("SOCKET");

    cmd
}

pub fn routes() -> Value {
    json!({
        "https://www.example.com/": {
            "primary": true, "id": "main", "type": "upstream",
            "upstream": "app", "original_url": "https://www.{default}/"
        },
        "https://example.com/": {
            "primary": false, "id": null, "type": "redirect",
            "to": "https://www.example.com/", "original_url": "https://{default}/"
        },
        "https://admin.example.com/": {
            "primary": false, "id": "admin", "type": "upstream",
            "upstream": "admin", "original_url": "https://admin.{default}/"
        }
    })
}

pub fn relationships() -> Value {
    json!({
        "database": [{ "host": "database.internal", "port": 3306, "scheme": "mysql" }],
        "solr": [{ "host": "solr.internal", "port": 8080, "path": "solr/collection1" }],
        "headless": [{ "ip": "169.254.16.215", "port": 9222 }]
    })
}

/// A command seeing a platform environment during build.
pub fn build_cmd() -> Command {
    let mut cmd = platform_cmd();
    cmd.env("PLATFORM_APPLICATION_NAME", "app")
        .env("PLATFORM_APP_DIR", "/app")
        .env("PLATFORM_PROJECT", "test-project")
        .env("PLATFORM_TREE_ID", "abc123")
        .env(
            "PLATFORM_VARIABLES",
            encode(&json!({ "somevar": "someval", "env:DEBUG": "1" })),
        )
        .env("PLATFORM_APPLICATION", encode(&json!({ "type": "php:7.2" })));
    cmd
}

/// A command seeing a platform environment at runtime.
pub fn runtime_cmd() -> Command {
    let mut cmd = build_cmd();
    cmd.env("PLATFORM_BRANCH", "feature-x")
        .env("PLATFORM_ENVIRONMENT", "feature-x-hgi456")
        .env("PLATFORM_DOCUMENT_ROOT", "/app/web")
        .env("PLATFORM_ROUTES", encode(&routes()))
        .env("PLATFORM_RELATIONSHIPS", encode(&relationships()))
        .env("PORT", "8080")
        .env("SOCKET", "unix://tmp/blah.sock");
    cmd
}

/// Parse the stdout of a finished command as JSON.
pub fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}
