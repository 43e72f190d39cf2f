use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for transit-paths with ambient overrides cleared
pub fn transit_paths() -> Command {
    let mut cmd = cargo_bin_cmd!("transit-paths");
    cmd.env_remove("TRANSIT_PATHS_NETWORK")
        .env_remove("TRANSIT_PATHS_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a network document into `dir` and return its path
#[allow(dead_code)]
pub fn write_network(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("network.toml");
    fs::write(&path, content).expect("failed to write network file");
    path
}

/// A-B-C chain with a shortcut, one valid path and walk endpoints
#[allow(dead_code)]
pub const SMALL_NETWORK: &str = r#"
[walk]
start = "A"
end = "C"

[report]
currency = "$"

[[edges]]
from = "A"
to = "B"
cost = 4
time = 4
distance = 3

[[edges]]
from = "B"
to = "C"
cost = 4
time = 6
distance = 5.1

[[edges]]
from = "A"
to = "C"
cost = 20
time = 30
distance = 9

[[paths]]
nodes = ["A", "B", "C"]

[[paths]]
name = "direct"
nodes = ["A", "C"]
"#;
