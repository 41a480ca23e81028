//! Integration tests for the `dexly` CLI binary.
//!
//! Argument parsing, completions, and config handling run offline; the
//! catalog commands run against a wiremock server via `--base-url`.
#![allow(clippy::unwrap_used)]

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `dexly` binary with env isolation.
///
/// Clears all `DEXLY_*` env vars and points config directories at `home`
/// so tests never touch the user's real configuration.
fn dexly_cmd(home: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("dexly");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("DEXLY_BASE_URL")
        .env_remove("DEXLY_OUTPUT")
        .env_remove("DEXLY_CONCURRENCY")
        .env_remove("DEXLY_TIMEOUT")
        .env_remove("RUST_LOG");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn base_url(server: &MockServer) -> String {
    format!("{}/api/v2", server.uri())
}

fn pikachu() -> Value {
    json!({
        "id": 25,
        "name": "pikachu",
        "height": 4,
        "weight": 60,
        "sprites": { "front_default": "https://img.test/25.png", "back_default": null },
        "types": [{ "slot": 1, "type": { "name": "electric" } }],
        "stats": [
            { "base_stat": 35, "stat": { "name": "hp" } },
            { "base_stat": 90, "stat": { "name": "speed" } }
        ]
    })
}

async fn mount_listing(server: &MockServer, names: &[&str]) {
    let results: Vec<Value> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            json!({ "name": name, "url": format!("{}/pokemon/{}/", base_url(server), i + 1) })
        })
        .collect();

    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/"))
        .and(query_param("limit", names.len().to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": results })))
        .mount(server)
        .await;
}

async fn mount_summary(server: &MockServer, id: usize, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v2/pokemon/{id}/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let home = tempfile::tempdir().unwrap();
    let output = dexly_cmd(home.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    let home = tempfile::tempdir().unwrap();
    dexly_cmd(home.path()).arg("--help").assert().success().stdout(
        predicate::str::contains("PokeAPI")
            .and(predicate::str::contains("list"))
            .and(predicate::str::contains("show")),
    );
}

#[test]
fn test_version_flag() {
    let home = tempfile::tempdir().unwrap();
    dexly_cmd(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dexly"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    let home = tempfile::tempdir().unwrap();
    dexly_cmd(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    let home = tempfile::tempdir().unwrap();
    dexly_cmd(home.path())
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_path_uses_xdg_dir() {
    let home = tempfile::tempdir().unwrap();
    dexly_cmd(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dexly").and(predicate::str::contains("config.toml")));
}

#[test]
fn test_config_init_then_refuses_overwrite() {
    let home = tempfile::tempdir().unwrap();

    dexly_cmd(home.path()).args(["config", "init"]).assert().success();

    let output = dexly_cmd(home.path()).args(["config", "init"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("already exists"));

    dexly_cmd(home.path())
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_config_show_reflects_env_override() {
    let home = tempfile::tempdir().unwrap();
    dexly_cmd(home.path())
        .env("DEXLY_CATALOG__PAGE_SIZE", "7")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("page_size = 7")
                .and(predicate::str::contains("https://pokeapi.co/api/v2")),
        );
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let home = tempfile::tempdir().unwrap();
    let output = dexly_cmd(home.path()).arg("foobar").output().unwrap();
    assert!(!output.status.success(), "Expected failure for invalid subcommand");
    let text = combined_output(&output);
    assert!(
        text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_show_without_name_is_usage_error() {
    let home = tempfile::tempdir().unwrap();
    // Unroutable base URL: the command must fail before any request.
    let output = dexly_cmd(home.path())
        .args(["--base-url", "http://127.0.0.1:9/api/v2", "show"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("Missing pokemon name"));
}

#[test]
fn test_invalid_base_url() {
    let home = tempfile::tempdir().unwrap();
    let output = dexly_cmd(home.path())
        .args(["--base-url", "not a url", "list"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("base_url"));
}

#[test]
fn test_list_connection_refused() {
    let home = tempfile::tempdir().unwrap();
    let output = dexly_cmd(home.path())
        .args(["--base-url", "http://127.0.0.1:9/api/v2", "list"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(7));
}

// ── Against a mock catalog ──────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_show_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/pikachu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pikachu()))
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let output = dexly_cmd(home.path())
        .args(["--base-url", &base_url(&server), "-o", "json", "show", "pikachu"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", combined_output(&output));
    let record: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["id"], 25);
    assert_eq!(record["categories"], json!(["electric"]));
    assert_eq!(record["stats"][1]["value"], 90);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_show_table() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/pikachu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pikachu()))
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    dexly_cmd(home.path())
        .args(["--base-url", &base_url(&server), "show", "pikachu"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Pikachu  #25")
                .and(predicate::str::contains("Height  4"))
                .and(predicate::str::contains("Speed")),
        );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_show_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let output = dexly_cmd(home.path())
        .args(["--base-url", &base_url(&server), "show", "missingno"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(4));
    assert!(combined_output(&output).contains("missingno"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_plain_in_listing_order() {
    let server = MockServer::start().await;
    mount_listing(&server, &["bulbasaur", "charmander", "squirtle"]).await;
    for (id, kind) in [(1, "grass"), (2, "fire"), (3, "water")] {
        mount_summary(
            &server,
            id,
            json!({ "sprites": {}, "types": [{ "slot": 1, "type": { "name": kind } }] }),
        )
        .await;
    }

    let home = tempfile::tempdir().unwrap();
    dexly_cmd(home.path())
        .args(["--base-url", &base_url(&server), "-o", "plain", "list", "--limit", "3"])
        .assert()
        .success()
        .stdout("bulbasaur\ncharmander\nsquirtle\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_malformed_detail_is_decode_error() {
    let server = MockServer::start().await;
    mount_listing(&server, &["bulbasaur", "ivysaur"]).await;
    mount_summary(&server, 1, json!({ "sprites": {}, "types": [] })).await;
    mount_summary(&server, 2, json!({ "sprites": {} })).await;

    let home = tempfile::tempdir().unwrap();
    let output = dexly_cmd(home.path())
        .args(["--base-url", &base_url(&server), "list", "--limit", "2"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(8), "{}", combined_output(&output));
    assert!(output.stdout.is_empty(), "no partial listing expected");
}
