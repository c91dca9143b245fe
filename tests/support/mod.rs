use assert_cmd::{cargo::cargo_bin_cmd, Command};
use serde_json::Value;
use std::process::Output;

/// Get a Command for bidijkstra with ambient configuration cleared
pub fn bidijkstra() -> Command {
    let mut cmd = cargo_bin_cmd!("bidijkstra");
    cmd.env_remove("RUST_LOG")
        .env_remove("BIDIJKSTRA_LOG")
        .env_remove("BIDIJKSTRA_CONFIG");
    cmd
}

/// Directed seven-node ladder: 0->5 costs 20 via 0,1,3,4,5
pub const LADDER: &[&str] = &[
    "--nodes", "7", "--edge", "0,1,2", "--edge", "0,2,6", "--edge", "1,3,5", "--edge", "2,3,8",
    "--edge", "3,4,10", "--edge", "3,5,15", "--edge", "4,5,3", "--edge", "4,6,2", "--edge",
    "5,6,6",
];

/// Nine nodes where 0->8 takes the two-hop detour through 5 for 5
#[allow(dead_code)]
pub const DETOUR: &[&str] = &[
    "--nodes", "9", "--edge", "0,1,1", "--edge", "0,5,4", "--edge", "0,4,8", "--edge", "1,2,1",
    "--edge", "2,3,1", "--edge", "3,7,1", "--edge", "7,8,2", "--edge", "5,8,1", "--edge",
    "4,6,2", "--edge", "6,8,6",
];

/// Parse stdout as JSON
#[allow(dead_code)]
pub fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is valid JSON")
}

/// Parse stderr as JSON
#[allow(dead_code)]
pub fn stderr_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stderr).expect("stderr is valid JSON")
}
