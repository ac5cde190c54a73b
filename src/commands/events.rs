//! Events subcommand handler

use std::path::Path;

use anyhow::Result;

use webmem::eventlog::EventLog;
use webmem::Config;

/// List recent events from a log, newest first, as a JSON array.
pub fn handle(file: &Path, host: Option<&str>, limit: Option<u32>) -> Result<()> {
    let config = Config::load()?;
    let limit = limit
        .map(|n| n as usize)
        .unwrap_or(config.events.default_limit)
        .min(500);

    let mut log = EventLog::parse(file)?;
    if let Some(host) = host {
        log.filter_host(host);
    }
    // Files are not guaranteed to be in chronological order
    log.sort_chronological();
    log.truncate_recent(limit);
    log.events.reverse();

    tracing::info!(events = log.len(), "listed events");
    super::print_json(&log.events, config.output.pretty)
}
