//! Append-only log of recorded calls.

use serde::{Deserialize, Serialize};

/// How much call history a recorder keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Retention {
    /// Every call is kept in insertion order.
    Full,
    /// Only the most recent call is kept.
    LatestOnly,
}

/// Records one entry per call.
///
/// The backing storage is a `Vec`, so appends are amortized O(1) and
/// [`clear`](Self::clear) keeps the allocation for reuse.
#[derive(Debug, Clone)]
pub struct CallRecorder<R> {
    calls: Vec<R>,
    retention: Retention,
}

impl<R> CallRecorder<R> {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new(retention: Retention) -> Self {
        Self {
            calls: Vec::new(),
            retention,
        }
    }

    /// Creates an empty recorder with preallocated storage.
    #[must_use]
    pub fn with_capacity(retention: Retention, capacity: usize) -> Self {
        Self {
            calls: Vec::with_capacity(capacity),
            retention,
        }
    }

    /// Returns the retention policy.
    #[must_use]
    pub fn retention(&self) -> Retention {
        self.retention
    }

    /// Records a call.
    pub fn record(&mut self, call: R) {
        if self.retention == Retention::LatestOnly {
            self.calls.clear();
        }
        self.calls.push(call);
    }

    /// Returns the call at `index` in insertion order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&R> {
        self.calls.get(index)
    }

    /// Returns the most recent call.
    #[must_use]
    pub fn latest(&self) -> Option<&R> {
        self.calls.last()
    }

    /// Returns every retained call.
    #[must_use]
    pub fn as_slice(&self) -> &[R] {
        &self.calls
    }

    /// Number of retained calls.
    #[must_use]
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    /// Returns true if nothing is retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Drops every retained call but keeps the storage allocated.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Allocated capacity of the backing storage.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.calls.capacity()
    }
}
