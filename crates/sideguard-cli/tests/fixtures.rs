//! End-to-end CLI integration tests using test fixtures.
//!
//! Each fixture in `tests/fixtures/` contains:
//! - A state.json snapshot and a sideguard.toml rule set
//! - An expected.report.json with expected output (timestamps use
//!   "__TIMESTAMP__" and tool.version uses "__VERSION__")
//!
//! These tests run the CLI against each fixture and verify:
//! 1. Exit code matches expected (0=allowed, 2=blocked)
//! 2. JSON output matches expected (after placeholder normalization)

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use sideguard_test_util::normalize_report;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper to get a Command for the sideguard binary.
#[allow(deprecated)]
fn sideguard_cmd() -> Command {
    Command::cargo_bin("sideguard").expect("sideguard binary not found - run `cargo build` first")
}

/// Get the path to the test fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("sideguard-cli crate should have a parent directory")
        .parent()
        .expect("crates directory should have a parent (repo root)")
        .join("tests")
        .join("fixtures")
}

fn run_fixture(name: &str, expected_exit: i32) -> Value {
    let fixture = fixtures_dir().join(name);
    let tmp = TempDir::new().expect("create temp dir");
    let report_out = tmp.path().join("report.json");

    let assert = sideguard_cmd()
        .arg("--config")
        .arg(fixture.join("sideguard.toml"))
        .arg("simulate")
        .arg("--state")
        .arg(fixture.join("state.json"))
        .arg("--report-out")
        .arg(&report_out)
        .assert();

    if expected_exit == 0 {
        assert.success();
    } else {
        assert.code(expected_exit);
    }

    let actual = read_report(&report_out);
    let expected = read_report(&fixture.join("expected.report.json"));
    assert_eq!(actual, expected, "fixture {name} report mismatch");

    actual
}

fn read_report(path: &Path) -> Value {
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("read {}: {err}", path.display()));
    let value: Value = serde_json::from_str(&text).expect("report should be JSON");
    normalize_report(value)
}

#[test]
fn allow_fixture_passes_with_exit_zero() {
    let report = run_fixture("allow", 0);
    assert_eq!(report["decision"]["success"], true);
}

#[test]
fn battery_low_fixture_is_blocked() {
    let report = run_fixture("battery_low", 2);
    assert_eq!(report["decision"]["success"], false);
}

#[test]
fn multi_violation_fixture_reports_both_constraints() {
    let report = run_fixture("multi_violation", 2);
    let reason = report["decision"]["reason"].as_str().expect("reason");
    assert!(reason.contains("10"));
    assert!(reason.contains("OFFLINE"));
}

#[test]
fn missing_key_fixture_names_the_key() {
    let report = run_fixture("missing_key", 2);
    let reason = report["decision"]["reason"].as_str().expect("reason");
    assert!(reason.contains("'battery'"));
}

#[test]
fn missing_state_file_exits_one_with_runtime_error_report() {
    let tmp = TempDir::new().expect("create temp dir");
    let report_out = tmp.path().join("report.json");

    sideguard_cmd()
        .arg("--config")
        .arg(tmp.path().join("no-config.toml"))
        .arg("simulate")
        .arg("--state")
        .arg(tmp.path().join("no-state.json"))
        .arg("--report-out")
        .arg(&report_out)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("sideguard error"));

    let report = read_report(&report_out);
    assert_eq!(report["decision"]["success"], false);
    assert!(report["decision"]["reason"]
        .as_str()
        .expect("reason")
        .contains("read state snapshot"));
}

#[test]
fn on_fail_override_is_rejected_when_unknown() {
    let fixture = fixtures_dir().join("allow");
    let tmp = TempDir::new().expect("create temp dir");

    sideguard_cmd()
        .arg("--config")
        .arg(fixture.join("sideguard.toml"))
        .arg("--on-fail")
        .arg("explode")
        .arg("simulate")
        .arg("--state")
        .arg(fixture.join("state.json"))
        .arg("--report-out")
        .arg(tmp.path().join("report.json"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown on_fail"));
}

#[test]
fn write_markdown_emits_a_comment_file() {
    let fixture = fixtures_dir().join("multi_violation");
    let tmp = TempDir::new().expect("create temp dir");
    let markdown_out = tmp.path().join("comment.md");

    sideguard_cmd()
        .arg("--config")
        .arg(fixture.join("sideguard.toml"))
        .arg("simulate")
        .arg("--state")
        .arg(fixture.join("state.json"))
        .arg("--report-out")
        .arg(tmp.path().join("report.json"))
        .arg("--write-markdown")
        .arg("--markdown-out")
        .arg(&markdown_out)
        .assert()
        .code(2);

    let markdown = std::fs::read_to_string(&markdown_out).expect("read markdown");
    assert!(markdown.contains("# Sideguard report"));
    assert!(markdown.contains("**BLOCKED**"));
}

#[test]
fn md_subcommand_renders_an_existing_report() {
    let fixture = fixtures_dir().join("allow");
    let tmp = TempDir::new().expect("create temp dir");
    let report_out = tmp.path().join("report.json");

    sideguard_cmd()
        .arg("--config")
        .arg(fixture.join("sideguard.toml"))
        .arg("simulate")
        .arg("--state")
        .arg(fixture.join("state.json"))
        .arg("--report-out")
        .arg(&report_out)
        .assert()
        .success();

    sideguard_cmd()
        .arg("md")
        .arg("--report")
        .arg(&report_out)
        .assert()
        .success()
        .stdout(predicate::str::contains("**ALLOWED**"));
}

#[test]
fn explain_known_identifier_prints_guidance() {
    sideguard_cmd()
        .arg("explain")
        .arg("state.battery_min")
        .assert()
        .success()
        .stdout(predicate::str::contains("Remediation"));
}

#[test]
fn explain_unknown_identifier_exits_one() {
    sideguard_cmd()
        .arg("explain")
        .arg("state.unknown")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown rule_id or code"));
}
