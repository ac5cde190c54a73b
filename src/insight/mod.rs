//! Derived insight views over a batch of captured events.
//!
//! Three independent read-only transforms share the host extractor and
//! nothing else:
//!
//! - [`summarize`] - per-site textual memory summaries
//! - [`build_charts`] - frequency distributions for charting
//! - [`build_graph`] - site-to-site transition graph
//!
//! All three are pure functions over a caller-supplied slice: no shared
//! mutable state, no clock reads, no I/O. Each is O(n log n) at worst; the
//! caller is responsible for bounding batch size before invoking them.

mod charts;
mod memory;
mod workflow;

pub use charts::{build_charts, ChartData, DateCount, HostCount, TypeCount};
pub use memory::{summarize, MemoryRecord};
pub use workflow::{build_graph, GraphEdge, GraphNode, WorkflowGraph};

use std::collections::HashMap;

/// Insertion-ordered counter.
///
/// Every descending-count ordering in the derived views breaks ties by
/// first-seen order, implemented once here: keys keep the order they were
/// first added, and [`Tally::sorted_desc`] stable-sorts over that order.
#[derive(Debug, Clone, Default)]
pub(crate) struct Tally {
    keys: Vec<String>,
    counts: HashMap<String, u64>,
}

impl Tally {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Increment the count for `key`, registering it on first sight.
    pub(crate) fn add(&mut self, key: &str) {
        match self.counts.get_mut(key) {
            Some(count) => *count += 1,
            None => {
                self.keys.push(key.to_string());
                self.counts.insert(key.to_string(), 1);
            }
        }
    }

    /// Entries in first-seen order.
    pub(crate) fn ordered(&self) -> Vec<(String, u64)> {
        self.keys
            .iter()
            .map(|k| (k.clone(), self.counts[k]))
            .collect()
    }

    /// Entries by descending count; equal counts keep first-seen order.
    pub(crate) fn sorted_desc(&self) -> Vec<(String, u64)> {
        let mut entries = self.ordered();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    /// Sum of all counts.
    pub(crate) fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
