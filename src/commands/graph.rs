//! Graph subcommand handler

use std::path::Path;

use anyhow::Result;

use webmem::eventlog::EventLog;
use webmem::insight;
use webmem::Config;

/// Build the workflow graph for an event log and print it as JSON.
pub fn handle(file: &Path, limit: Option<u32>, pretty: bool) -> Result<()> {
    let config = Config::load()?;
    let limit = limit
        .map(|n| n as usize)
        .unwrap_or(config.graph.default_limit)
        .min(2000);

    let mut log = EventLog::parse(file)?;
    log.truncate_recent(limit);

    let graph = insight::build_graph(&log.events);
    tracing::info!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "built workflow graph"
    );
    super::print_json(&graph, pretty || config.output.pretty)
}
