//! Integration tests for config and completions commands (CLI)

use crate::helpers::run_webmem;

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn config_help_exits_0() {
    let (stdout, _stderr, exit_code) = run_webmem(&["config", "--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("show"));
    assert!(stdout.contains("migrate"));
}

#[test]
fn config_show_prints_toml_sections() {
    let (stdout, stderr, exit_code) = run_webmem(&["config", "show"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("[output]"));
    assert!(stdout.contains("pretty"));
    assert!(stdout.contains("default_limit"));
}

#[test]
fn config_migrate_is_safe_non_interactively() {
    // stdin is not a TTY here, so migrate must never write anything
    let (stdout, stderr, exit_code) = run_webmem(&["config", "migrate"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(
        stdout.contains("up to date")
            || stdout.contains("Non-interactive")
            || stdout.contains("No changes made"),
        "unexpected output: {}",
        stdout
    );
}

// ============================================================================
// Completions Tests
// ============================================================================

#[test]
fn completions_bash_mentions_subcommands() {
    let (stdout, _stderr, exit_code) = run_webmem(&["completions", "bash"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("webmem"));
    assert!(stdout.contains("summarize"));
}

#[test]
fn completions_zsh_exits_0() {
    let (stdout, _stderr, exit_code) = run_webmem(&["completions", "zsh"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("webmem"));
}

// ============================================================================
// Version Tests
// ============================================================================

#[test]
fn version_flag_prints_semver() {
    let (stdout, _stderr, exit_code) = run_webmem(&["--version"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}
