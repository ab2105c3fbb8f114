//! Agent History
//!
//! Bounded, in-memory log of the records an agent has produced. Oldest
//! records are evicted once the capacity is reached.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};

/// Default number of records retained per agent
pub const DEFAULT_HISTORY_CAPACITY: usize = 1_000;

/// A record that can be kept in an agent history
pub trait HistoryRecord {
    /// When the record was produced
    fn timestamp(&self) -> DateTime<Utc>;
}

/// Bounded agent history
#[derive(Clone, Debug)]
pub struct AgentHistory<T> {
    records: VecDeque<T>,
    capacity: usize,
    evicted: u64,
}

impl<T: HistoryRecord> Default for AgentHistory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HistoryRecord> AgentHistory<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create with a specific capacity (at least one record is always kept)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: VecDeque::with_capacity(capacity.min(64)),
            capacity,
            evicted: 0,
        }
    }

    /// Timestamp for the next record.
    ///
    /// Never earlier than the most recent record, so timestamps stay
    /// non-decreasing even if the wall clock steps back.
    pub fn next_timestamp(&self) -> DateTime<Utc> {
        let now = Utc::now();
        self.records
            .back()
            .map_or(now, |last| now.max(last.timestamp()))
    }

    /// Append a record, evicting the oldest one if full
    pub fn push(&mut self, record: T) {
        if self.records.len() == self.capacity {
            self.records.pop_front();
            self.evicted += 1;
            tracing::debug!(capacity = self.capacity, evicted = self.evicted, "History full, evicted oldest record");
        }
        self.records.push_back(record);
    }

    /// Most recent record
    pub fn latest(&self) -> Option<&T> {
        self.records.back()
    }

    /// Records from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of records dropped to stay within capacity
    pub fn evicted(&self) -> u64 {
        self.evicted
    }
}

impl<T: HistoryRecord + Clone> AgentHistory<T> {
    /// Copy of all retained records, oldest first
    pub fn to_vec(&self) -> Vec<T> {
        self.records.iter().cloned().collect()
    }
}
