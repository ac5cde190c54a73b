//! Site-to-site workflow graph.
//!
//! Reconstructs how the user moved between websites: one node per distinct
//! host, one directed edge per ordered host pair that is chronologically
//! adjacent at least once. Adjacent events on the same host never produce
//! an edge, so the graph has no self-loops.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::Tally;
use crate::eventlog::EventRecord;
use crate::host::host_or_unknown;

/// Event types shown in a node label.
const LABEL_TYPES: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// The host string doubles as the node id.
    pub id: String,
    /// Host plus its top event types, e.g. `"a.com (click:4, pageview:2)"`.
    pub label: String,
    pub host: String,
    /// Full per-type event counts for this host.
    pub stats: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// `"{source}->{target}"`.
    pub id: String,
    pub source: String,
    pub target: String,
    /// Number of chronological adjacencies between the two hosts.
    pub count: u64,
    /// The count as a string, only when it exceeds 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// Build the workflow graph for a batch of events.
///
/// The batch is stable-sorted ascending by `created_at` (missing
/// timestamps sort first); a single forward pass then accumulates per-host
/// type counts and transition counts between consecutive distinct hosts.
/// Nodes and edges come out in first-appearance order, so re-runs are
/// byte-identical.
pub fn build_graph(events: &[EventRecord]) -> WorkflowGraph {
    if events.is_empty() {
        return WorkflowGraph {
            nodes: Vec::new(),
            edges: Vec::new(),
        };
    }

    let mut ordered: Vec<&EventRecord> = events.iter().collect();
    ordered.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));

    // Per-host type stats, first-appearance order
    let mut hosts: Vec<String> = Vec::new();
    let mut stats: HashMap<String, Tally> = HashMap::new();
    // Transition counts keyed by ordered host pair, first-appearance order
    let mut edge_keys: Vec<(String, String)> = Vec::new();
    let mut edge_counts: HashMap<(String, String), u64> = HashMap::new();

    let mut prev_host: Option<String> = None;
    for event in ordered {
        let host = host_or_unknown(event.url.as_deref());

        match stats.get_mut(&host) {
            Some(tally) => tally.add(event.type_or_unknown()),
            None => {
                let mut tally = Tally::new();
                tally.add(event.type_or_unknown());
                stats.insert(host.clone(), tally);
                hosts.push(host.clone());
            }
        }

        if let Some(prev) = &prev_host {
            if *prev != host {
                let key = (prev.clone(), host.clone());
                match edge_counts.get_mut(&key) {
                    Some(count) => *count += 1,
                    None => {
                        edge_counts.insert(key.clone(), 1);
                        edge_keys.push(key);
                    }
                }
            }
        }
        prev_host = Some(host);
    }

    let nodes = hosts
        .into_iter()
        .map(|host| {
            let tally = &stats[&host];
            let parts: Vec<String> = tally
                .sorted_desc()
                .into_iter()
                .take(LABEL_TYPES)
                .map(|(kind, count)| format!("{}:{}", kind, count))
                .collect();
            let label = if parts.is_empty() {
                host.clone()
            } else {
                format!("{} ({})", host, parts.join(", "))
            };
            GraphNode {
                id: host.clone(),
                label,
                stats: tally.ordered().into_iter().collect(),
                host,
            }
        })
        .collect();

    let edges = edge_keys
        .into_iter()
        .map(|key| {
            let count = edge_counts[&key];
            let (source, target) = key;
            GraphEdge {
                id: format!("{}->{}", source, target),
                label: (count > 1).then(|| count.to_string()),
                source,
                target,
                count,
            }
        })
        .collect();

    WorkflowGraph { nodes, edges }
}
