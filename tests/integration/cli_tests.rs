//! CLI integration tests
//!
//! These tests verify that the CLI works correctly with various options.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

/// Get the path to the test fixtures directory
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn deadweight() -> Command {
    Command::cargo_bin("deadweight").expect("binary builds")
}

#[test]
fn test_cli_help() {
    deadweight()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("deadweight"))
        .stdout(predicate::str::contains("--fail-on-findings"))
        .stdout(predicate::str::contains("--sequential"));
}

#[test]
fn test_cli_version() {
    deadweight()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("deadweight"));
}

#[test]
fn test_cli_analyzes_fixture() {
    deadweight()
        .arg(fixtures_path().join("webapp"))
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("lodash"))
        .stdout(predicate::str::contains("left-pad"))
        .stdout(predicate::str::contains("foo"))
        .stdout(predicate::str::contains("legacy.ts"));
}

#[test]
fn test_cli_json_format() {
    deadweight()
        .arg(fixtures_path().join("webapp"))
        .arg("--quiet")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"unused_dependencies\""))
        .stdout(predicate::str::contains("\"left-pad\""))
        .stdout(predicate::str::contains("\"dependency_analysis_skipped\": false"));
}

#[test]
fn test_cli_default_exit_code_ignores_findings() {
    // Baseline behavior: findings present, still exit 0
    deadweight()
        .arg(fixtures_path().join("webapp"))
        .arg("--quiet")
        .assert()
        .success();
}

#[test]
fn test_cli_fail_on_findings() {
    deadweight()
        .arg(fixtures_path().join("webapp"))
        .arg("--quiet")
        .arg("--fail-on-findings")
        .assert()
        .code(1);
}

#[test]
fn test_cli_clean_project_exits_zero_with_fail_flag() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    std::fs::create_dir_all(root.join("src/app")).unwrap();
    std::fs::write(
        root.join("package.json"),
        r#"{"name":"clean","dependencies":{"react":"^18.2.0"}}"#,
    )
    .unwrap();
    std::fs::write(
        root.join("src/app/page.tsx"),
        "import React from \"react\";\nexport default function () { return <div />; }\n",
    )
    .unwrap();

    deadweight()
        .arg(root)
        .arg("--quiet")
        .arg("--fail-on-findings")
        .assert()
        .success()
        .stdout(predicate::str::contains("No unused dependencies found."));
}

#[test]
fn test_cli_missing_manifest_reports_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    std::fs::create_dir_all(root.join("src")).unwrap();
    std::fs::write(root.join("src/a.ts"), "export const a = 1;\n").unwrap();

    deadweight()
        .arg(root)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dependency analysis skipped"));
}

#[test]
fn test_cli_sequential_mode_matches_parallel() {
    let parallel = deadweight()
        .arg(fixtures_path().join("webapp"))
        .arg("--quiet")
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();

    let sequential = deadweight()
        .arg(fixtures_path().join("webapp"))
        .arg("--quiet")
        .arg("--sequential")
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();

    assert_eq!(
        String::from_utf8_lossy(&parallel.stdout),
        String::from_utf8_lossy(&sequential.stdout)
    );
}
