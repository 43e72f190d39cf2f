//! Integration tests for the transit-paths CLI
//!
//! These tests run the binary against the built-in network.

mod support;

use predicates::prelude::*;
use support::transit_paths;

const FINAL_PATH: &str = "Final Path: Meidaimae St -> Shimo-Kitazawa St -> Shinjuku St -> \
Kaminakazato St -> Oji St -> Urawa St -> Omiya St -> Okegawa St -> Okabe St -> Takasaki St";

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    transit_paths()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: transit-paths"))
        .stdout(predicate::str::contains("paths"))
        .stdout(predicate::str::contains("walk"));
}

#[test]
fn test_version_flag() {
    transit_paths()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("transit-paths"));
}

// ============================================================================
// Default report
// ============================================================================

#[test]
fn test_bare_invocation_prints_full_report() {
    transit_paths()
        .assert()
        .success()
        .stdout(predicate::str::contains("Path Details Calculation By Train"))
        .stdout(predicate::str::contains(
            "Path 1: Meidaimae St -> Shimo-Kitazawa St -> Shinjuku St",
        ))
        .stdout(predicate::str::contains("Shortest Pathfinding Process by Train"))
        .stdout(predicate::str::contains(
            "Starting Pathfinding from Meidaimae St to Takasaki St",
        ))
        .stdout(predicate::str::contains(FINAL_PATH));
}

#[test]
fn test_report_totals_for_every_path() {
    let assert = transit_paths().arg("report").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();

    let expected = [
        ("RM97.00", "148 mins", "115.70 km"),
        ("RM97.00", "170 mins", "126.30 km"),
        ("RM121.00", "255 mins", "187.30 km"),
        ("RM189.00", "401 mins", "263.70 km"),
        ("RM163.00", "234 mins", "137.00 km"),
    ];
    for (cost, time, distance) in expected {
        assert!(stdout.contains(&format!("  Total Cost: {}", cost)), "{cost}");
        assert!(stdout.contains(&format!("  Total Time: {}", time)), "{time}");
        assert!(stdout.contains(&format!("  Total Distance: {}", distance)), "{distance}");
    }
    assert!(stdout.contains("Path 5: Meidaimae St -> Tokyo St"));
}

#[test]
fn test_quiet_drops_banners() {
    transit_paths()
        .args(["--quiet", "paths"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path 1:"))
        .stdout(predicate::str::contains("=====").not());
}

// ============================================================================
// Walk
// ============================================================================

#[test]
fn test_walk_lists_candidates_and_selection() {
    transit_paths()
        .arg("walk")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "From Meidaimae St, checking possible routes:",
        ))
        .stdout(predicate::str::contains("Meidaimae St -> Shimo-Kitazawa St (3.0 km)"))
        .stdout(predicate::str::contains("Meidaimae St -> Tokyo St (4.0 km)"))
        .stdout(predicate::str::contains(
            "Selected Path: [Meidaimae St, Shimo-Kitazawa St]",
        ))
        .stdout(predicate::str::contains(FINAL_PATH));
}

#[test]
fn test_walk_with_custom_endpoints() {
    transit_paths()
        .args(["walk", "--from", "Kiryu St", "--to", "Takasaki St"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Final Path: Kiryu St -> Midori, Gunma St -> Takasaki St",
        ));
}

#[test]
fn test_walk_dead_end_is_not_an_error() {
    transit_paths()
        .args(["walk", "--from", "Takasaki St", "--to", "Meidaimae St"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No unvisited paths available from Takasaki St",
        ))
        .stdout(predicate::str::contains("Final Path: Takasaki St"));
}

// ============================================================================
// JSON output
// ============================================================================

#[test]
fn test_paths_json() {
    let assert = transit_paths()
        .args(["--format", "json", "paths"])
        .assert()
        .success();
    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();

    let paths = json["paths"].as_array().unwrap();
    assert_eq!(paths.len(), 5);
    assert_eq!(paths[0]["index"], 1);
    assert_eq!(paths[0]["cost"], 97.0);
    assert_eq!(paths[0]["time"], 148.0);
    assert_eq!(paths[4]["nodes"].as_array().unwrap().len(), 9);
}

#[test]
fn test_walk_json() {
    let assert = transit_paths()
        .args(["walk", "--format", "json"])
        .assert()
        .success();
    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();

    assert_eq!(json["outcome"]["status"], "reached");
    assert_eq!(json["path"].as_array().unwrap().len(), 10);
    assert_eq!(json["steps"][0]["candidates"].as_array().unwrap().len(), 4);
    assert_eq!(
        json["steps"][0]["selected"]["destination"],
        "Shimo-Kitazawa St"
    );
}

#[test]
fn test_report_json_has_both_sections() {
    let assert = transit_paths()
        .args(["--format", "json"])
        .assert()
        .success();
    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();

    assert!(json["paths"].is_array());
    assert_eq!(json["walk"]["start"], "Meidaimae St");
    assert_eq!(json["walk"]["end"], "Takasaki St");
}

#[test]
fn test_unknown_format_is_usage_error() {
    transit_paths()
        .args(["--format", "xml", "paths"])
        .assert()
        .code(2);
}

#[test]
fn test_parse_error_with_json_format_prints_envelope() {
    let assert = transit_paths()
        .args(["--format=json", "walk", "--bogus"])
        .assert()
        .code(2);
    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stderr).unwrap();

    assert_eq!(json["error"]["type"], "usage_error");
    assert_eq!(json["error"]["code"], 2);
}

#[test]
fn test_quiet_suppresses_human_error_text() {
    transit_paths()
        .args(["--quiet", "--network", "/nonexistent/network.toml", "check"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_walk_finished_is_logged() {
    transit_paths()
        .args(["--verbose", "walk"])
        .assert()
        .success()
        .stderr(predicate::str::contains("walk_finished"))
        .stderr(predicate::str::contains("reached=true"));
}

// ============================================================================
// Edges and check
// ============================================================================

#[test]
fn test_edges_lists_sorted_sources() {
    transit_paths()
        .arg("edges")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Akabane St\n"))
        .stdout(predicate::str::contains(
            "  -> Koga St (cost RM35.0, time 56.0 mins, distance 66.0 km)",
        ));
}

#[test]
fn test_check_builtin() {
    transit_paths()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "39 edges (5 duplicates collapsed), 5 paths",
        ));
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn test_log_level_debug_shows_debug_messages() {
    transit_paths()
        .args(["--log-level", "debug", "check"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stderr(predicate::str::contains("graph_built"));
}

#[test]
fn test_default_log_level_is_quiet() {
    transit_paths()
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_log_json_produces_json_lines() {
    transit_paths()
        .args(["--log-json", "--verbose", "check"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"level\""))
        .stderr(predicate::str::contains("\"fields\""));
}

#[test]
fn test_env_filter_overrides_cli_level() {
    transit_paths()
        .env("TRANSIT_PATHS_LOG", "transit_paths_core=debug")
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains("graph_built"))
        .stderr(predicate::str::contains("parse_args").not());

    transit_paths()
        .env("RUST_LOG", "off")
        .env("TRANSIT_PATHS_LOG", "debug")
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
