//! webmem - Browser Memory engine.
//!
//! Turns a captured log of browsing events (page visits, clicks, form
//! entries) into three derived artifacts:
//!
//! - [`insight::summarize`] - per-site textual "memory" summaries over the
//!   batch's time window
//! - [`insight::build_charts`] - aggregate usage distributions (by event
//!   type, by site, over time)
//! - [`insight::build_graph`] - a directed graph of site-to-site transitions
//!
//! The engine is pure: it never mutates its input, never reads the clock,
//! and keeps no state between calls. Re-running any transform on the same
//! log yields byte-identical output.
//!
//! # Module Structure
//!
//! - [`eventlog`] - the captured event log format (JSON Lines) and batch
//!   shaping helpers
//! - [`host`] - host extraction from captured URLs
//! - [`insight`] - the three derived views
//! - [`config`] - user configuration (TOML)
//! - [`cli`] - command-line definitions (shared with xtask for man pages)

pub mod cli;
pub mod config;
pub mod eventlog;
pub mod host;
pub mod insight;

pub use config::Config;
