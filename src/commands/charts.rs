//! Charts subcommand handler

use std::path::Path;

use anyhow::Result;

use webmem::eventlog::EventLog;
use webmem::insight;
use webmem::Config;

/// Aggregate an event log into chart distributions and print them as JSON.
pub fn handle(file: &Path, limit: Option<u32>, pretty: bool) -> Result<()> {
    let config = Config::load()?;
    let limit = limit
        .map(|n| n as usize)
        .unwrap_or(config.charts.default_limit)
        .min(5000);

    let mut log = EventLog::parse(file)?;
    log.truncate_recent(limit);

    let charts = insight::build_charts(&log.events);
    tracing::info!(events = log.len(), "built chart data");
    super::print_json(&charts, pretty || config.output.pretty)
}
