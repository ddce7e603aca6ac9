#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;

use gangway_client::boot::standard_initializers;
use gangway_client::page::Page;
use gangway_core::location::Location;

const TRACE_SEARCH: &str = "?_ui_performance_trace=1";

fn gangway() -> Command {
    Command::cargo_bin("gangway").unwrap()
}

/// Number of initializers in the shipped main sequence.
fn sequence_len() -> usize {
    standard_initializers(&Page::new(Location::default())).len()
}

// ---------------------------------------------------------------------------
// Plain mode
// ---------------------------------------------------------------------------

#[test]
fn plain_run_prints_only_the_summary() {
    gangway()
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "booted {} initializers in",
            sequence_len()
        )))
        .stdout(predicate::str::contains("duration (ms)").not())
        .stdout(predicate::str::contains("performance trace").not());
}

#[test]
fn plain_json_report_has_no_samples() {
    let assert = gangway().arg("--json").assert().success();
    let report: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();

    assert_eq!(report["count"], sequence_len());
    assert!(report["samples"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Trace mode
// ---------------------------------------------------------------------------

#[test]
fn trace_mode_prints_the_sample_table() {
    gangway()
        .args(["--search", TRACE_SEARCH])
        .assert()
        .success()
        .stdout(predicate::str::contains("duration (ms)"))
        .stdout(predicate::str::contains("init_global_tooltips"));
}

#[test]
fn trace_json_report_samples_every_initializer() {
    let assert = gangway()
        .args(["--search", TRACE_SEARCH, "--json"])
        .assert()
        .success();
    let report: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();

    let samples = report["samples"].as_array().unwrap();
    assert_eq!(samples.len(), sequence_len());
    assert!(samples
        .iter()
        .all(|s| s["duration_ms"].as_f64().unwrap() >= 0.0));
    assert_eq!(report["count"], sequence_len());
}

#[test]
fn trace_lines_reach_the_log_sink() {
    gangway()
        .args(["--search", TRACE_SEARCH])
        .env("RUST_LOG", "gangway_core=info")
        .assert()
        .success()
        .stdout(predicate::str::contains("performance trace: init_"));
}

// ---------------------------------------------------------------------------
// Flag plumbing
// ---------------------------------------------------------------------------

#[test]
fn search_can_come_from_the_environment() {
    let assert = gangway()
        .arg("--json")
        .env("GANGWAY_SEARCH", TRACE_SEARCH)
        .assert()
        .success();
    let report: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();

    assert!(!report["samples"].as_array().unwrap().is_empty());
}

#[test]
fn other_query_parameters_stay_in_plain_mode() {
    let assert = gangway()
        .args(["--search", "?lang=en&tab=stars", "--json"])
        .assert()
        .success();
    let report: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();

    assert!(report["samples"].as_array().unwrap().is_empty());
}
