//! Timestamped record of completed calculations.

use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Default number of entries surfaced to the user.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Default timestamp pattern for rendered history lines.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%H:%M:%S";

/// One completed calculation.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    expression: String,
    result: f64,
    timestamp: DateTime<Local>,
}

impl HistoryEntry {
    pub fn new(expression: String, result: f64, timestamp: DateTime<Local>) -> Self {
        Self {
            expression,
            result,
            timestamp,
        }
    }

    /// The calculation as text, e.g. `5.0 + 3.0 = 8.0`.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The numeric result of the calculation.
    pub fn result(&self) -> f64 {
        self.result
    }

    /// Wall-clock time the calculation completed.
    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// Render as `<timestamp> - <expression>` using a strftime pattern.
    ///
    /// The pattern is expected to be valid; see [`crate::config::Config`].
    pub fn render(&self, timestamp_format: &str) -> String {
        format!(
            "{} - {}",
            self.timestamp.format(timestamp_format),
            self.expression
        )
    }
}

/// Calculation history, newest first.
#[derive(Clone, Debug, Default)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entry ahead of all existing ones.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
    }

    /// Entry at `index`, where `0` is the newest.
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Iterate over at most `limit` entries, newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().take(limit)
    }

    /// Iterate over every entry, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Number of stored entries, including ones not surfaced.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
