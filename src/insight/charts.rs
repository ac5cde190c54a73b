//! Aggregate usage distributions for charting.
//!
//! One pass over the batch accumulates three independent counters: events
//! by type, by host, and by calendar day (UTC). Events with a missing or
//! unparseable timestamp are silently skipped from the daily buckets only.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::eventlog::EventRecord;
use crate::host::host_or_unknown;

use super::Tally;

/// Hosts kept in `by_host` after the descending-count cut.
pub const TOP_HOSTS: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeCount {
    #[serde(rename = "type")]
    pub kind: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostCount {
    pub host: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateCount {
    /// Calendar date, `YYYY-MM-DD` (UTC).
    pub date: String,
    pub count: u64,
}

/// Chart-ready distributions over one event batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// Sorted by descending count; ties keep first-seen order.
    pub by_type: Vec<TypeCount>,
    /// Sorted by descending count, truncated to the top [`TOP_HOSTS`].
    pub by_host: Vec<HostCount>,
    /// Sorted ascending by date.
    pub over_time: Vec<DateCount>,
}

/// Build the three chart distributions for a batch of events.
pub fn build_charts(events: &[EventRecord]) -> ChartData {
    let mut by_type = Tally::new();
    let mut by_host = Tally::new();
    let mut by_date: BTreeMap<String, u64> = BTreeMap::new();

    for event in events {
        by_type.add(event.type_or_unknown());
        by_host.add(&host_or_unknown(event.url.as_deref()));
        if let Some(ts) = event.timestamp() {
            *by_date.entry(ts.format("%Y-%m-%d").to_string()).or_insert(0) += 1;
        }
    }

    let mut top_hosts: Vec<HostCount> = by_host
        .sorted_desc()
        .into_iter()
        .map(|(host, count)| HostCount { host, count })
        .collect();
    top_hosts.truncate(TOP_HOSTS);

    ChartData {
        by_type: by_type
            .sorted_desc()
            .into_iter()
            .map(|(kind, count)| TypeCount { kind, count })
            .collect(),
        by_host: top_hosts,
        // BTreeMap iteration is ascending by key, which for YYYY-MM-DD is
        // chronological order
        over_time: by_date
            .into_iter()
            .map(|(date, count)| DateCount { date, count })
            .collect(),
    }
}
