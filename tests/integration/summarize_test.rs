//! Integration tests for the summarize command (CLI)

use tempfile::TempDir;

use crate::helpers::{run_webmem, write_log, SAMPLE_LOG};

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn summarize_help_exits_0_and_shows_usage() {
    let (stdout, _stderr, exit_code) = run_webmem(&["summarize", "--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Summarize"));
    assert!(stdout.contains("<FILE>"));
    assert!(stdout.contains("--since"));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn summarize_no_arguments_shows_error() {
    let (_stdout, stderr, exit_code) = run_webmem(&["summarize"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("required arguments"));
    assert!(stderr.contains("<FILE>"));
}

#[test]
fn summarize_nonexistent_file_exits_nonzero_with_helpful_error() {
    let (_stdout, stderr, exit_code) = run_webmem(&["summarize", "nonexistent.jsonl"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("nonexistent.jsonl"));
}

#[test]
fn summarize_invalid_since_exits_nonzero() {
    let temp_dir = TempDir::new().unwrap();
    let log = write_log(temp_dir.path(), "events.jsonl", SAMPLE_LOG);

    let (_stdout, stderr, exit_code) = run_webmem(&[
        "summarize",
        log.to_str().unwrap(),
        "--since",
        "not-a-timestamp",
    ]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("not-a-timestamp"));
}

#[test]
fn summarize_malformed_log_reports_line_number() {
    let temp_dir = TempDir::new().unwrap();
    let log = write_log(
        temp_dir.path(),
        "events.jsonl",
        "{\"type\":\"click\"}\nnot json\n",
    );

    let (_stdout, stderr, exit_code) = run_webmem(&["summarize", log.to_str().unwrap()]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("line 2"));
}

// ============================================================================
// Output Tests
// ============================================================================

#[test]
fn summarize_empty_log_prints_empty_array() {
    let temp_dir = TempDir::new().unwrap();
    let log = write_log(temp_dir.path(), "events.jsonl", "");

    let (stdout, _stderr, exit_code) = run_webmem(&["summarize", log.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "[]");
}

#[test]
fn summarize_emits_one_record_per_host() {
    let temp_dir = TempDir::new().unwrap();
    let log = write_log(temp_dir.path(), "events.jsonl", SAMPLE_LOG);

    let (stdout, stderr, exit_code) = run_webmem(&["summarize", log.to_str().unwrap()]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    let records: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["url_host"], "a.com");
    assert_eq!(records[1]["url_host"], "b.com");

    let summary = records[0]["summary_text"].as_str().unwrap();
    assert!(summary.contains("Domain: a.com"));
    assert!(summary.contains("Activity:"));
    assert!(summary.contains("Top pages: Alpha"));
}

#[test]
fn summarize_records_share_the_batch_window() {
    let temp_dir = TempDir::new().unwrap();
    let log = write_log(temp_dir.path(), "events.jsonl", SAMPLE_LOG);

    let (stdout, _stderr, _exit_code) = run_webmem(&["summarize", log.to_str().unwrap()]);

    let records: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    for record in records.as_array().unwrap() {
        assert_eq!(record["window_start"], "2024-01-01T00:00:00Z");
        assert_eq!(record["window_end"], "2024-01-01T00:02:00Z");
    }
}

#[test]
fn summarize_since_filters_older_events() {
    let temp_dir = TempDir::new().unwrap();
    let log = write_log(temp_dir.path(), "events.jsonl", SAMPLE_LOG);

    let (stdout, _stderr, exit_code) = run_webmem(&[
        "summarize",
        log.to_str().unwrap(),
        "--since",
        "2024-01-01T00:01:00Z",
    ]);

    assert_eq!(exit_code, 0);
    let records: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let hosts: Vec<&str> = records
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["url_host"].as_str().unwrap())
        .collect();
    // The first a.com event falls outside the window; b.com now comes first
    assert_eq!(hosts, vec!["b.com", "a.com"]);
}

#[test]
fn summarize_since_beyond_all_events_yields_empty_array() {
    let temp_dir = TempDir::new().unwrap();
    let log = write_log(temp_dir.path(), "events.jsonl", SAMPLE_LOG);

    let (stdout, _stderr, exit_code) = run_webmem(&[
        "summarize",
        log.to_str().unwrap(),
        "--since",
        "2030-01-01T00:00:00Z",
    ]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "[]");
}

#[test]
fn summarize_pretty_prints_multiline_json() {
    let temp_dir = TempDir::new().unwrap();
    let log = write_log(temp_dir.path(), "events.jsonl", SAMPLE_LOG);

    let (stdout, _stderr, exit_code) =
        run_webmem(&["summarize", log.to_str().unwrap(), "--pretty"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.lines().count() > 1);
    serde_json::from_str::<serde_json::Value>(&stdout).unwrap();
}
