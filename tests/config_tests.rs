//! Tests for `bidijkstra.toml` handling

mod support;

use predicates::prelude::*;
use std::fs;
use support::{bidijkstra, stdout_json, LADDER};
use tempfile::tempdir;

#[test]
fn test_config_discovered_in_working_directory() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("bidijkstra.toml"),
        "engine = \"dijkstra\"\nformat = \"json\"\n",
    )
    .unwrap();

    let output = bidijkstra()
        .current_dir(dir.path())
        .args(["distance", "0", "5"])
        .args(LADDER)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["engine"], "dijkstra");
    assert_eq!(json["distance"], 20);
}

#[test]
fn test_flags_override_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("bidijkstra.toml"),
        "engine = \"dijkstra\"\nformat = \"json\"\n",
    )
    .unwrap();

    bidijkstra()
        .current_dir(dir.path())
        .args(["--format", "human", "distance", "0", "5"])
        .args(LADDER)
        .assert()
        .success()
        .stdout("20\n");
}

#[test]
fn test_config_undirected() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("bidijkstra.toml"), "undirected = true\n").unwrap();

    bidijkstra()
        .current_dir(dir.path())
        .args(["distance", "5", "0"])
        .args(LADDER)
        .assert()
        .success()
        .stdout("20\n");
}

#[test]
fn test_explicit_config_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[bench]\niterations = 2\n").unwrap();

    let output = bidijkstra()
        .arg("--config")
        .arg(&path)
        .args(["--format", "json", "bench", "0", "5"])
        .args(LADDER)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)[0]["iterations"], 2);
}

#[test]
fn test_missing_explicit_config() {
    let dir = tempdir().unwrap();

    bidijkstra()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("demo")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config not found"));
}

#[test]
fn test_invalid_config_value() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("bidijkstra.toml"), "engine = \"astar\"\n").unwrap();

    bidijkstra()
        .current_dir(dir.path())
        .arg("demo")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}

#[test]
fn test_zero_bench_iterations_in_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("bidijkstra.toml"), "[bench]\niterations = 0\n").unwrap();

    bidijkstra()
        .current_dir(dir.path())
        .arg("demo")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("bench.iterations"));
}
