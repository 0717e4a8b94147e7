//! CLI integration tests for the errgrain binary.
//!
//! These tests run the actual compiled binary and assert on its output.

use assert_cmd::Command;
use predicates::prelude::*;

/// Get a Command instance for the errgrain binary
fn errgrain_cmd() -> Command {
    Command::cargo_bin("errgrain").expect("Failed to find errgrain binary")
}

// ============================================================================
// list command
// ============================================================================

#[test]
fn test_list_shows_standard_categories() {
    errgrain_cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("file-not-found"))
        .stdout(predicate::str::contains("connection-error"))
        .stdout(predicate::str::contains("would-block"))
        .stdout(predicate::str::contains("timed-out"));
}

#[test]
fn test_list_json_is_parseable() {
    let output = errgrain_cmd()
        .args(["list", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value =
        serde_json::from_slice(&output).expect("list --json should emit valid JSON");
    let categories = parsed.as_array().expect("top level is an array");
    assert_eq!(categories.len(), 15);
    assert!(categories
        .iter()
        .any(|c| c["name"] == "file-not-found" && c["codes"][0] == libc::ENOENT));
}

// ============================================================================
// match command
// ============================================================================

#[test]
fn test_match_enoent_against_full_catalog() {
    errgrain_cmd()
        .args(["match", &libc::ENOENT.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("file-not-found"));
}

#[test]
fn test_match_respects_candidate_order() {
    // ECONNRESET listed against [connection-aborted, connection-error]
    // must fall through to the broad category.
    errgrain_cmd()
        .args([
            "match",
            &libc::ECONNRESET.to_string(),
            "connection-aborted",
            "connection-error",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("connection-error"));
}

#[test]
fn test_match_unmatched_code_fails() {
    // EXDEV belongs to no standard category.
    errgrain_cmd()
        .args(["match", &libc::EXDEV.to_string(), "file-not-found"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("matched no candidate category"));
}

#[test]
fn test_match_unknown_category_name_fails() {
    errgrain_cmd()
        .args(["match", "2", "no-such-category"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category"));
}

// ============================================================================
// probe command
// ============================================================================

#[test]
fn test_probe_missing_path_classifies_as_file_not_found() {
    errgrain_cmd()
        .args(["probe", "/I/sure/hope/this/does/not.exist"])
        .assert()
        .success()
        .stdout(predicate::str::contains("file-not-found"));
}

#[test]
fn test_probe_path_through_regular_file_is_not_a_directory() {
    // Cargo runs tests from the package root, so Cargo.toml is a regular
    // file here; statting a path beneath it raises ENOTDIR.
    errgrain_cmd()
        .args(["probe", "Cargo.toml/nope"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not-a-directory"));
}

#[test]
fn test_probe_existing_path_reports_no_error() {
    errgrain_cmd()
        .args(["probe", "Cargo.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("raised no error"));
}
