//! Per-site memory summarization.
//!
//! Converts a batch of events into one textual "memory" per distinct host,
//! suitable for later full-text search and human review. All records in a
//! batch share the same time window: the [earliest, latest] parseable
//! timestamp across the whole batch.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Tally;
use crate::eventlog::EventRecord;
use crate::host::host_or_unknown;

/// Distinct page titles kept per host summary.
pub const TITLE_CAP: usize = 3;
/// Distinct UI text snippets kept per host summary.
pub const SNIPPET_CAP: usize = 5;

/// One textual summary of activity on a single host within a time window.
///
/// Constructed fresh per call and never mutated afterwards; persisting it
/// (with an ownership key) is the caller's business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryRecord {
    /// Earliest parseable timestamp in the batch; absent when no event in
    /// the batch carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_start: Option<DateTime<Utc>>,
    /// Latest parseable timestamp in the batch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_end: Option<DateTime<Utc>>,
    pub url_host: String,
    pub summary_text: String,
}

/// Summarize a batch of events into one [`MemoryRecord`] per distinct host.
///
/// An empty batch yields an empty result set. Events with no extractable
/// host are grouped under the `"unknown"` sentinel. Events whose timestamp
/// fails to parse are excluded from the window computation but still
/// participate in grouping and content extraction.
pub fn summarize(events: &[EventRecord]) -> Vec<MemoryRecord> {
    if events.is_empty() {
        return Vec::new();
    }

    let times: Vec<DateTime<Utc>> = events.iter().filter_map(|e| e.timestamp()).collect();
    let window_start = times.iter().min().copied();
    let window_end = times.iter().max().copied();

    // Group by host, first-seen order
    let mut groups: Vec<(String, Vec<&EventRecord>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for event in events {
        let host = host_or_unknown(event.url.as_deref());
        match index.get(&host) {
            Some(&i) => groups[i].1.push(event),
            None => {
                index.insert(host.clone(), groups.len());
                groups.push((host, vec![event]));
            }
        }
    }

    groups
        .into_iter()
        .map(|(host, host_events)| {
            let summary_text = render_summary(&host, &host_events);
            MemoryRecord {
                window_start,
                window_end,
                url_host: host,
                summary_text,
            }
        })
        .collect()
}

/// Render the fixed-format summary text for one host group.
fn render_summary(host: &str, events: &[&EventRecord]) -> String {
    let mut activity = Tally::new();
    let mut titles: Vec<&str> = Vec::new();
    let mut snippets: Vec<&str> = Vec::new();

    for event in events {
        activity.add(event.type_or_unknown());

        if let Some(title) = event.title.as_deref() {
            if !title.is_empty() && !titles.contains(&title) {
                titles.push(title);
            }
        }

        if let Some(text) = event.text_content.as_deref() {
            let text = text.trim();
            if !text.is_empty() && snippets.len() < SNIPPET_CAP && !snippets.contains(&text) {
                snippets.push(text);
            }
        }
    }
    titles.truncate(TITLE_CAP);

    let mut lines = vec![format!("Domain: {}", host), "Activity:".to_string()];
    for (kind, count) in activity.sorted_desc() {
        lines.push(format!("- {}: {}", kind, count));
    }
    if !titles.is_empty() {
        lines.push(format!("Top pages: {}", titles.join(", ")));
    }
    if !snippets.is_empty() {
        lines.push(format!("UI context: {}", snippets.join(", ")));
    }
    lines.join("\n")
}
