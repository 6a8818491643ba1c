//! CLI regression tests for the `specsheet` binary.
//!
//! These tests invoke the binary as a subprocess to catch regressions in flag
//! names, exit codes, and output formats — things the Rust API tests can't catch.
//!
//! Run with: `cargo test -p specsheet-test`
//! Requires the `specsheet` binary to be built first (`cargo build -p specsheet`).

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Returns an assert_cmd Command wrapping the `specsheet` binary.
fn specsheet() -> Command {
    // cargo_bin is deprecated for custom build-dir setups; fine for standard workspace use.
    #[allow(deprecated)]
    Command::cargo_bin("specsheet")
        .expect("specsheet binary not found — run `cargo build -p specsheet` first")
}

/// Absolute path to the shared test fixtures directory.
fn fixtures() -> PathBuf {
    // CARGO_MANIFEST_DIR = .../crates/specsheet-test
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("crates/")
        .parent()
        .expect("workspace root")
        .join("tests/fixtures")
}

// ---------------------------------------------------------------------------
// specsheet report
// ---------------------------------------------------------------------------

#[test]
fn report_renders_text_by_default() {
    specsheet()
        .args(["report", "--spec"])
        .arg(fixtures().join("petstore.yaml"))
        .assert()
        .success()
        .stdout(contains("Api Endpoint: /pets"))
        .stdout(contains("HTTP Verb: POST"))
        .stdout(contains("limit (query)"));
}

#[test]
fn report_inlines_nested_schemas() {
    // Pet's owner field is a $ref; the rendered cell must carry the
    // Owner body, not the pointer.
    specsheet()
        .args(["report", "--spec"])
        .arg(fixtures().join("petstore.yaml"))
        .assert()
        .success()
        .stdout(contains("\"owner\""))
        .stdout(contains("\"name\""));
}

#[test]
fn report_json_output_is_parseable() {
    let output = specsheet()
        .args(["report", "--format", "json", "--spec"])
        .arg(fixtures().join("petstore.yaml"))
        .output()
        .expect("failed to run specsheet");
    assert!(output.status.success());

    let rows: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    let rows = rows.as_array().expect("a row array");
    // petstore.yaml declares three (path, verb) pairs
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["path"], "/pets");
    assert_eq!(rows[0]["verb"], "GET");
}

#[test]
fn report_output_flag_writes_file() {
    let dir = TempDir::new().expect("tempdir");
    let out = dir.path().join("report.txt");

    specsheet()
        .args(["report", "--spec"])
        .arg(fixtures().join("petstore.yaml"))
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let written = std::fs::read_to_string(&out).expect("report file");
    assert!(written.contains("Api Endpoint: /pets/{petId}"));
}

#[test]
fn report_on_cyclic_schema_terminates() {
    // Node references itself; the report must finish and keep the
    // revisited pointer in the cell.
    specsheet()
        .args(["report", "--spec"])
        .arg(fixtures().join("cyclic.yaml"))
        .assert()
        .success()
        .stdout(contains("#/components/schemas/Node"));
}

#[test]
fn report_unknown_format_exits_two() {
    specsheet()
        .args(["report", "--format", "xlsx", "--spec"])
        .arg(fixtures().join("petstore.yaml"))
        .assert()
        .failure()
        .code(2)
        .stderr(contains("unknown format"));
}

#[test]
fn report_missing_file_exits_one() {
    specsheet()
        .args(["report", "--spec", "does-not-exist.yaml"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("error:"));
}

// ---------------------------------------------------------------------------
// specsheet validate
// ---------------------------------------------------------------------------

#[test]
fn validate_valid_spec_exits_zero() {
    specsheet()
        .args(["validate", "--spec"])
        .arg(fixtures().join("petstore.yaml"))
        .assert()
        .success()
        .stderr(contains("is valid OpenAPI 3.0.3"));
}

#[test]
fn validate_swagger_2_exits_one() {
    specsheet()
        .args(["validate", "--spec"])
        .arg(fixtures().join("invalid-swagger2.yaml"))
        .assert()
        .failure()
        .code(1)
        .stderr(contains("not an OpenAPI document"));
}

#[test]
fn validate_unparseable_file_exits_one() {
    specsheet()
        .args(["validate", "--spec"])
        .arg(fixtures().join("invalid-parse-error.yaml"))
        .assert()
        .failure()
        .code(1)
        .stderr(contains("parse error"));
}
