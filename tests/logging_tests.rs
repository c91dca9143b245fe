//! Tests for log level selection

mod support;

use predicates::prelude::*;
use std::fs;
use support::{bidijkstra, LADDER};
use tempfile::tempdir;

#[test]
fn test_log_level_debug_shows_debug_messages() {
    bidijkstra()
        .args(["--log-level", "debug", "distance", "0", "5"])
        .args(LADDER)
        .assert()
        .success()
        .stdout("20\n")
        .stderr(predicate::str::contains("parse_args"))
        .stderr(predicate::str::contains("build_graph"));
}

#[test]
fn test_default_level_is_quiet() {
    bidijkstra()
        .args(["distance", "0", "5"])
        .args(LADDER)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_verbose_enables_debug() {
    bidijkstra()
        .args(["--verbose", "path", "0", "5"])
        .args(LADDER)
        .assert()
        .success()
        .stderr(predicate::str::contains("query"));
}

#[test]
fn test_log_json() {
    bidijkstra()
        .args(["--log-level", "debug", "--log-json", "distance", "0", "5"])
        .args(LADDER)
        .assert()
        .success()
        .stderr(predicate::str::contains("\"message\":\"parse_args\""));
}

#[test]
fn test_env_override() {
    bidijkstra()
        .env("BIDIJKSTRA_LOG", "bidijkstra=debug")
        .args(["distance", "0", "5"])
        .args(LADDER)
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_config_log_level() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("bidijkstra.toml"), "log_level = \"debug\"\n").unwrap();

    bidijkstra()
        .current_dir(dir.path())
        .args(["distance", "0", "5"])
        .args(LADDER)
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}
