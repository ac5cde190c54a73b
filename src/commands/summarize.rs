//! Summarize subcommand handler

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};

use webmem::eventlog::EventLog;
use webmem::insight;
use webmem::Config;

/// Summarize an event log into per-site memory records and print them as
/// a JSON array.
pub fn handle(file: &Path, minutes: Option<i64>, since: Option<&str>, pretty: bool) -> Result<()> {
    let config = Config::load()?;
    let mut log = EventLog::parse(file)?;

    // Time window: explicit --since wins; --minutes is resolved against the
    // wall clock here so the engine itself stays clock-free
    let cutoff: Option<DateTime<Utc>> = match (since, minutes) {
        (Some(raw), _) => Some(
            DateTime::parse_from_rfc3339(raw)
                .map(|dt| dt.with_timezone(&Utc))
                .with_context(|| format!("Invalid --since timestamp: {}", raw))?,
        ),
        (None, Some(m)) => Some(Utc::now() - Duration::minutes(m)),
        (None, None) => None,
    };
    if let Some(cutoff) = cutoff {
        log.filter_since(cutoff);
    }

    let memories = insight::summarize(&log.events);
    tracing::info!(
        events = log.len(),
        memories = memories.len(),
        "summarized event log"
    );
    super::print_json(&memories, pretty || config.output.pretty)
}
