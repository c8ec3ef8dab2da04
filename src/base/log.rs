//! Per-conversion audit trail.
//!
//! A [`ConversionLog`] belongs to exactly one conversion call. Every entry is
//! also mirrored as a `tracing` debug event so hosts with a subscriber see the
//! same decisions in their own logs.

use chrono::{DateTime, Utc};
use std::fmt;

/// One timestamped log line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.timestamp.format("%H:%M:%S"), self.message)
    }
}

/// Ordered, append-only record of conversion decisions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConversionLog {
    entries: Vec<LogEntry>,
}

impl ConversionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message stamped with the current time.
    pub fn push(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(target: "pacontrol::conversion", "{message}");
        self.entries.push(LogEntry {
            timestamp: Utc::now(),
            message,
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Messages in order, without timestamps.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.message.as_str())
    }

    /// `true` if any message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.messages().any(|m| m.contains(needle))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn into_entries(self) -> Vec<LogEntry> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a ConversionLog {
    type Item = &'a LogEntry;
    type IntoIter = std::slice::Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
