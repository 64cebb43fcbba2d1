//! Scripted value sequences handed back on successive calls.

use serde::{Deserialize, Serialize};

use super::Arg;

/// What happens once a sequence runs past its last value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequencePolicy {
    /// Values are used in order, then the last one repeats.
    ClampToLast,
    /// Values wrap around to the first one.
    Cycle,
}

/// An ordered, possibly empty list of values plus a lookup policy.
#[derive(Debug, Clone)]
pub struct ValueSequence {
    values: Vec<Arg>,
    policy: SequencePolicy,
}

impl ValueSequence {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new(policy: SequencePolicy) -> Self {
        Self {
            values: Vec::new(),
            policy,
        }
    }

    /// Returns the lookup policy.
    #[must_use]
    pub fn policy(&self) -> SequencePolicy {
        self.policy
    }

    /// Replaces every value.
    pub fn replace(&mut self, values: impl IntoIterator<Item = Arg>) {
        self.values = values.into_iter().collect();
    }

    /// Number of configured values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no values are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the configured values.
    #[must_use]
    pub fn values(&self) -> &[Arg] {
        &self.values
    }

    /// Returns the value for the `call_number`-th call (1-based).
    ///
    /// Yields `None` when the sequence is empty or `call_number` is zero.
    #[must_use]
    pub fn value_for_call(&self, call_number: usize) -> Option<Arg> {
        if self.values.is_empty() || call_number == 0 {
            return None;
        }
        let last = self.values.len() - 1;
        let index = match self.policy {
            SequencePolicy::ClampToLast => (call_number - 1).min(last),
            SequencePolicy::Cycle => (call_number - 1) % self.values.len(),
        };
        self.values.get(index).cloned()
    }
}
