//! Captured browsing-event log format.
//!
//! The browser extension exports interaction events as JSON Lines: one
//! [`EventRecord`] object per line, blank lines ignored. Batch exports may
//! instead ship a single JSON array of records; [`EventLog::parse_str`]
//! accepts both shapes.
//!
//! Every field except `type` is optional - capture is best-effort and the
//! derived views degrade gracefully around whatever is missing.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::host::{extract_host, UNKNOWN};

fn default_type() -> String {
    UNKNOWN.to_string()
}

/// A single captured user interaction.
///
/// Records are immutable inputs to the insight engine; derived structures
/// are always freshly constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    /// Interaction kind, e.g. `"click"` or `"pageview"`.
    #[serde(rename = "type", default = "default_type")]
    pub kind: String,
    /// Page URL; absent for non-navigational events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Page title at capture time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Free text associated with the interaction (clicked element's text).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,
    /// CSS selector of the interacted element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    /// Capture timestamp, ISO-8601 UTC.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Opaque capture metadata, not interpreted by the engine.
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

impl EventRecord {
    /// Create a record of the given kind with all optional fields absent.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            url: None,
            title: None,
            text_content: None,
            selector: None,
            created_at: None,
            metadata: serde_json::Map::new(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text_content = Some(text.into());
        self
    }

    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = Some(created_at.into());
        self
    }

    /// The event type, with absent/empty values mapped to the shared
    /// `"unknown"` sentinel.
    pub fn type_or_unknown(&self) -> &str {
        if self.kind.is_empty() {
            UNKNOWN
        } else {
            &self.kind
        }
    }

    /// Parse `created_at`, or `None` if it is missing or unparseable.
    ///
    /// Unparseable timestamps never abort a transform; the event is simply
    /// excluded from time-based computations.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(self.created_at.as_deref()?)
    }

    /// Sort key for chronological ordering: missing timestamps sort as the
    /// empty string, i.e. first.
    pub(crate) fn sort_key(&self) -> &str {
        self.created_at.as_deref().unwrap_or("")
    }

    /// Parse an event from a JSON line.
    pub fn from_json(line: &str) -> Result<Self> {
        serde_json::from_str(line).context("Failed to parse event JSON")
    }

    /// Convert the event to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize event")
    }
}

/// Parse an ISO-8601 timestamp as UTC.
///
/// Accepts RFC 3339 (including a trailing `Z`) and, as a fallback, a naive
/// `YYYY-MM-DDTHH:MM:SS[.f]` read as UTC. Returns `None` on failure.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// A batch of captured events, as read from an export file.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    pub events: Vec<EventRecord>,
}

impl EventLog {
    pub fn new(events: Vec<EventRecord>) -> Self {
        Self { events }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Parse an event log from a path.
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = fs::File::open(path)
            .with_context(|| format!("Failed to open event log: {}", path.display()))?;
        Self::parse_reader(BufReader::new(file))
    }

    /// Parse an event log from a reader.
    pub fn parse_reader<R: BufRead>(mut reader: R) -> Result<Self> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .context("Failed to read event log")?;
        Self::parse_str(&content)
    }

    /// Parse an event log from a string.
    ///
    /// JSON Lines by default; a leading `[` switches to the extension's
    /// batch-export shape (one JSON array of records).
    pub fn parse_str(content: &str) -> Result<Self> {
        if content.trim_start().starts_with('[') {
            let events: Vec<EventRecord> =
                serde_json::from_str(content).context("Failed to parse event array")?;
            tracing::debug!(count = events.len(), "parsed array-shaped event log");
            return Ok(Self { events });
        }

        let mut events = Vec::new();
        for (line_num, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let event = EventRecord::from_json(line)
                .with_context(|| format!("Failed to parse event on line {}", line_num + 1))?;
            events.push(event);
        }
        tracing::debug!(count = events.len(), "parsed event log");
        Ok(Self { events })
    }

    /// Write the log to a path as JSON Lines.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut file = fs::File::create(path)
            .with_context(|| format!("Failed to create file: {}", path.display()))?;
        self.write_to(&mut file)
    }

    /// Write the log to a writer as JSON Lines.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        for event in &self.events {
            writeln!(writer, "{}", event.to_json()?)?;
        }
        Ok(())
    }

    /// Stable-sort events ascending by `created_at`; missing timestamps
    /// sort first.
    pub fn sort_chronological(&mut self) {
        self.events.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));
    }

    /// Keep only events captured at or after `cutoff`.
    ///
    /// Events without a parseable timestamp are dropped, matching the
    /// time-bounded fetch the storage layer would perform.
    pub fn filter_since(&mut self, cutoff: DateTime<Utc>) {
        self.events
            .retain(|e| e.timestamp().is_some_and(|ts| ts >= cutoff));
    }

    /// Keep only events whose extracted host matches exactly.
    ///
    /// Events with no extractable host never match.
    pub fn filter_host(&mut self, host: &str) {
        self.events
            .retain(|e| extract_host(e.url.as_deref()).as_deref() == Some(host));
    }

    /// Keep the `limit` most recent events, preserving chronological order.
    pub fn truncate_recent(&mut self, limit: usize) {
        if self.events.len() <= limit {
            return;
        }
        self.sort_chronological();
        let excess = self.events.len() - limit;
        self.events.drain(..excess);
    }
}
