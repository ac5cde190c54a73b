//! CLI subcommand handlers.

pub mod charts;
pub mod completions;
pub mod config;
pub mod events;
pub mod graph;
pub mod summarize;

use anyhow::Result;
use serde::Serialize;

/// Print a derived artifact as JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}
