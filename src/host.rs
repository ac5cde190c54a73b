//! Host extraction from captured URLs.
//!
//! The host (network domain) is the grouping key for every derived view:
//! memory summaries, chart buckets, and workflow graph nodes all key on it.

use url::Url;

/// Sentinel for events whose host or type cannot be determined.
///
/// Shared by all derived views so that ungroupable events land in one
/// well-known bucket instead of scattering magic strings around.
pub const UNKNOWN: &str = "unknown";

/// Extract the network host from a URL, if any.
///
/// Missing, empty, or malformed input yields `None`. Never panics.
pub fn extract_host(url: Option<&str>) -> Option<String> {
    let raw = url?.trim();
    if raw.is_empty() {
        return None;
    }
    Url::parse(raw).ok()?.host_str().map(|h| h.to_string())
}

/// Extract the host, falling back to the shared [`UNKNOWN`] sentinel.
pub fn host_or_unknown(url: Option<&str>) -> String {
    extract_host(url).unwrap_or_else(|| UNKNOWN.to_string())
}
