//! The guild ledger: a bounded, append-only activity log.
//!
//! Entries are session-local and never persisted; the save blob carries
//! game state, not its narration.

use std::collections::VecDeque;

use crate::core::constants::ACTIVITY_LOG_CAPACITY;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Epoch milliseconds at which the event was recorded.
    pub at_ms: i64,
    pub message: String,
}

/// Chronological log with a fixed capacity; the oldest entry falls off
/// once the cap is reached.
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: VecDeque<LogEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, at_ms: i64, message: impl Into<String>) {
        if self.entries.len() == ACTIVITY_LOG_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            at_ms,
            message: message.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// The most recent `n` entries, oldest of those first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &LogEntry> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.iter().skip(skip)
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }
}
