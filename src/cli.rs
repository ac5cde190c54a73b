//! Command-line definitions.
//!
//! Lives in the library so the `xtask` workspace member can reuse it for
//! man-page generation.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Version string: `<semver> (<git sha> <build date>)` for dev builds,
/// `<semver> (<build date>)` for official `release`-feature builds.
pub fn long_version() -> String {
    let date = env!("WEBMEM_BUILD_DATE");
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) => {
            let short = &sha[..sha.len().min(7)];
            format!("{} ({} {})", env!("CARGO_PKG_VERSION"), short, date)
        }
        None => format!("{} ({})", env!("CARGO_PKG_VERSION"), date),
    }
}

/// Derive memories, usage charts, and workflow graphs from captured
/// browsing events.
#[derive(Debug, Parser)]
#[command(name = "webmem", version, long_version = long_version())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Summarize events into per-site memories
    Summarize {
        /// Event log to read (JSON Lines, or a JSON array export)
        file: PathBuf,
        /// Only include events from the last N minutes
        #[arg(long, value_name = "N", conflicts_with = "since")]
        minutes: Option<i64>,
        /// Only include events at or after this RFC 3339 instant
        #[arg(long, value_name = "TIMESTAMP")]
        since: Option<String>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Aggregate events into chart data (by type, by site, over time)
    Charts {
        /// Event log to read
        file: PathBuf,
        /// Cap on events considered, most recent first
        #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..=5000))]
        limit: Option<u32>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Build the site-to-site workflow graph
    Graph {
        /// Event log to read
        file: PathBuf,
        /// Cap on events considered, most recent first
        #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..=2000))]
        limit: Option<u32>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// List recent events, newest first
    Events {
        /// Event log to read
        file: PathBuf,
        /// Only events on this host (exact match on the extracted host)
        #[arg(long)]
        host: Option<String>,
        /// Cap on events listed
        #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..=500))]
        limit: Option<u32>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration as TOML
    Show,
    /// Open the config file in $EDITOR
    Edit,
    /// Add missing fields to the config file
    Migrate,
}
