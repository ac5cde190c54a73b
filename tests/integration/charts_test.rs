//! Integration tests for the charts command (CLI)

use tempfile::TempDir;

use crate::helpers::{run_webmem, write_log, SAMPLE_LOG};

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn charts_help_exits_0_and_shows_usage() {
    let (stdout, _stderr, exit_code) = run_webmem(&["charts", "--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("chart"));
    assert!(stdout.contains("--limit"));
}

// ============================================================================
// Output Tests
// ============================================================================

#[test]
fn charts_empty_log_prints_empty_distributions() {
    let temp_dir = TempDir::new().unwrap();
    let log = write_log(temp_dir.path(), "events.jsonl", "");

    let (stdout, _stderr, exit_code) = run_webmem(&["charts", log.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    let charts: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(charts["by_type"].as_array().unwrap().len(), 0);
    assert_eq!(charts["by_host"].as_array().unwrap().len(), 0);
    assert_eq!(charts["over_time"].as_array().unwrap().len(), 0);
}

#[test]
fn charts_counts_cover_every_event() {
    let temp_dir = TempDir::new().unwrap();
    let log = write_log(temp_dir.path(), "events.jsonl", SAMPLE_LOG);

    let (stdout, _stderr, exit_code) = run_webmem(&["charts", log.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    let charts: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let type_total: u64 = charts["by_type"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["count"].as_u64().unwrap())
        .sum();
    let host_total: u64 = charts["by_host"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["count"].as_u64().unwrap())
        .sum();
    assert_eq!(type_total, 3);
    assert_eq!(host_total, 3);
}

#[test]
fn charts_by_type_sorted_descending() {
    let temp_dir = TempDir::new().unwrap();
    let log = write_log(temp_dir.path(), "events.jsonl", SAMPLE_LOG);

    let (stdout, _stderr, _exit_code) = run_webmem(&["charts", log.to_str().unwrap()]);

    let charts: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let by_type = charts["by_type"].as_array().unwrap();
    assert_eq!(by_type[0]["type"], "click");
    assert_eq!(by_type[0]["count"], 2);
    assert_eq!(by_type[1]["type"], "view");
}

#[test]
fn charts_over_time_buckets_by_day() {
    let temp_dir = TempDir::new().unwrap();
    let log = write_log(temp_dir.path(), "events.jsonl", SAMPLE_LOG);

    let (stdout, _stderr, _exit_code) = run_webmem(&["charts", log.to_str().unwrap()]);

    let charts: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let over_time = charts["over_time"].as_array().unwrap();
    assert_eq!(over_time.len(), 1);
    assert_eq!(over_time[0]["date"], "2024-01-01");
    assert_eq!(over_time[0]["count"], 3);
}

#[test]
fn charts_limit_caps_considered_events() {
    let temp_dir = TempDir::new().unwrap();
    let log = write_log(temp_dir.path(), "events.jsonl", SAMPLE_LOG);

    let (stdout, _stderr, exit_code) =
        run_webmem(&["charts", log.to_str().unwrap(), "--limit", "1"]);

    assert_eq!(exit_code, 0);
    let charts: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let type_total: u64 = charts["by_type"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["count"].as_u64().unwrap())
        .sum();
    assert_eq!(type_total, 1);
    // Most recent event survives the cut
    assert_eq!(charts["by_host"][0]["host"], "a.com");
}

#[test]
fn charts_limit_out_of_range_is_a_usage_error() {
    let temp_dir = TempDir::new().unwrap();
    let log = write_log(temp_dir.path(), "events.jsonl", SAMPLE_LOG);

    let (_stdout, stderr, exit_code) =
        run_webmem(&["charts", log.to_str().unwrap(), "--limit", "0"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("--limit"));
}
