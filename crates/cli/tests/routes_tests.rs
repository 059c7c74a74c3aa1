//! Integration tests for the `routes` command.

mod common;

use common::{build_cmd, encode, platform_cmd, routes, runtime_cmd, stdout_json};
use predicates::prelude::*;
use serde_json::json;

#[test]
fn test_routes_lists_all_in_order() {
    let output = runtime_cmd().arg("routes").output().unwrap();
    assert!(output.status.success());

    let routes = stdout_json(&output);
    let urls: Vec<&String> = routes.as_object().unwrap().keys().collect();
    assert_eq!(
        urls,
        [
            "https://www.example.com/",
            "https://example.com/",
            "https://admin.example.com/"
        ]
    );
}

#[test]
fn test_routes_primary() {
    let output = runtime_cmd().args(["routes", "--primary"]).output().unwrap();
    assert_eq!(stdout_json(&output)["url"], json!("https://www.example.com/"));
}

#[test]
fn test_routes_by_id() {
    let output = runtime_cmd().args(["routes", "--id", "admin"]).output().unwrap();
    assert_eq!(stdout_json(&output)["upstream"], json!("admin"));
}

#[test]
fn test_routes_upstream_skips_redirects() {
    let output = runtime_cmd().args(["routes", "--upstream"]).output().unwrap();
    let routes = stdout_json(&output);
    assert_eq!(routes.as_object().unwrap().len(), 2);
    assert!(routes.get("https://example.com/").is_none());
}

#[test]
fn test_routes_upstream_for_app() {
    let output = runtime_cmd()
        .args(["routes", "--upstream", "admin"])
        .output()
        .unwrap();
    let routes = stdout_json(&output);
    assert_eq!(routes.as_object().unwrap().len(), 1);
    assert!(routes.get("https://admin.example.com/").is_some());
}

#[test]
fn test_routes_unknown_id() {
    runtime_cmd()
        .args(["routes", "--id", "nope"])
        .assert()
        .code(4)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("nope"));
}

#[test]
fn test_routes_during_build() {
    build_cmd()
        .arg("routes")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("build time"));
}

#[test]
fn test_routes_off_platform() {
    platform_cmd().arg("routes").assert().code(6);
}

#[test]
fn test_routes_local_policy() {
    let output = platform_cmd()
        .env("PLATFORM_ROUTES", encode(&routes()))
        .args(["--allow-local-routes", "routes", "--id", "main"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["url"], json!("https://www.example.com/"));
}
