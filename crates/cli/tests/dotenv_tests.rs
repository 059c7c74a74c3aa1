//! Integration tests for `.env` handling in the CLI.
//!
//! Responsibilities:
//! - Prove that a `.env` file in the working directory feeds the snapshot.
//! - Prove that `DOTENV_DISABLED=1` and `--no-dotenv` skip it.
//! - Prove that invalid `.env` files fail without leaking their contents.
//!
//! Invariants:
//! - Tests clear `DOTENV_DISABLED` explicitly to enable dotenv loading.
//! - Tests use temp directories as the working directory to isolate `.env` effects.

mod common;

use common::{platform_cmd, stdout_json};
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn dotenv_cmd(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = platform_cmd();
    cmd.current_dir(dir.path());
    cmd.env_remove("DOTENV_DISABLED");
    cmd
}

fn write_dotenv(dir: &TempDir, contents: &str) {
    fs::write(dir.path().join(".env"), contents).unwrap();
}

#[test]
fn test_dotenv_feeds_snapshot() {
    let temp_dir = TempDir::new().unwrap();
    write_dotenv(
        &temp_dir,
        "PLATFORM_APPLICATION_NAME=app\nPLATFORM_PROJECT=from-dotenv\n",
    );

    let output = dotenv_cmd(&temp_dir)
        .args(["property", "project"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output), json!("from-dotenv"));
}

#[test]
fn test_process_environment_wins_over_dotenv() {
    let temp_dir = TempDir::new().unwrap();
    write_dotenv(
        &temp_dir,
        "PLATFORM_APPLICATION_NAME=app\nPLATFORM_PROJECT=from-dotenv\n",
    );

    let output = dotenv_cmd(&temp_dir)
        .env("PLATFORM_PROJECT", "from-process")
        .args(["property", "project"])
        .output()
        .unwrap();
    assert_eq!(stdout_json(&output), json!("from-process"));
}

#[test]
fn test_dotenv_disabled_ignores_file() {
    let temp_dir = TempDir::new().unwrap();
    write_dotenv(&temp_dir, "PLATFORM_APPLICATION_NAME=app\n");

    let output = dotenv_cmd(&temp_dir)
        .env("DOTENV_DISABLED", "1")
        .arg("status")
        .output()
        .unwrap();
    assert_eq!(stdout_json(&output)["state"], json!("not_a_platform"));
}

#[test]
fn test_no_dotenv_flag_ignores_file() {
    let temp_dir = TempDir::new().unwrap();
    write_dotenv(&temp_dir, "PLATFORM_APPLICATION_NAME=app\n");

    let output = dotenv_cmd(&temp_dir)
        .args(["--no-dotenv", "status"])
        .output()
        .unwrap();
    assert_eq!(stdout_json(&output)["state"], json!("not_a_platform"));
}

#[test]
fn test_invalid_dotenv_fails_without_leaking() {
    let temp_dir = TempDir::new().unwrap();
    write_dotenv(
        &temp_dir,
        "PLATFORM_PROJECT_ENTROPY=super-secret-value\nTHIS LINE IS INVALID\n",
    );

    dotenv_cmd(&temp_dir)
        .arg("status")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(".env"))
        .stderr(predicate::str::contains("super-secret-value").not());
}
