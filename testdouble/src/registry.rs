//! Caller-held grouping of doubles by name.
//!
//! Doubles never know about the registry that holds them; it exists so a
//! test can keep several doubles of one variant together and reset, verify
//! or erase them as a group.

use std::collections::HashMap;

use crate::core::{DoubleReport, TestDouble};
use crate::errors::DoubleError;

/// A map from function name to a double of one variant.
#[derive(Debug)]
pub struct DoubleRegistry<D> {
    doubles: HashMap<String, D>,
}

impl<D> Default for DoubleRegistry<D> {
    fn default() -> Self {
        Self {
            doubles: HashMap::new(),
        }
    }
}

impl<D: TestDouble> DoubleRegistry<D> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a double under its own name.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateDouble` if the name is taken; the registry keeps the
    /// existing double and `double` is dropped.
    pub fn register(&mut self, double: D) -> Result<(), DoubleError> {
        let name = double.name().to_string();
        if self.doubles.contains_key(&name) {
            return Err(DoubleError::DuplicateDouble(name));
        }
        self.doubles.insert(name, double);
        Ok(())
    }

    /// Registers a double, returning any double it replaced.
    pub fn replace(&mut self, double: D) -> Option<D> {
        self.doubles.insert(double.name().to_string(), double)
    }

    /// Gets a double by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&D> {
        self.doubles.get(name)
    }

    /// Gets a double by name for invocation or configuration.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut D> {
        self.doubles.get_mut(name)
    }

    /// Gets a double by name, failing if it is missing.
    ///
    /// # Errors
    ///
    /// Returns `UnknownDouble` if no double has that name.
    pub fn require_mut(&mut self, name: &str) -> Result<&mut D, DoubleError> {
        self.doubles
            .get_mut(name)
            .ok_or_else(|| DoubleError::UnknownDouble(name.to_string()))
    }

    /// Removes a double and hands it back to the caller.
    pub fn remove(&mut self, name: &str) -> Option<D> {
        self.doubles.remove(name)
    }

    /// Checks if a double is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.doubles.contains_key(name)
    }

    /// Lists registered names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.doubles.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered doubles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.doubles.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.doubles.is_empty()
    }

    /// Resets every registered double.
    pub fn reset_all(&mut self) {
        for double in self.doubles.values_mut() {
            double.reset();
        }
    }

    /// Verifies call counts for several doubles at once.
    ///
    /// Every check runs, so each mismatch gets its own diagnostic. A name
    /// that is not registered counts as a failure.
    pub fn verify_call_counts(&self, expected: &[(&str, usize)]) -> bool {
        expected.iter().fold(true, |ok, (name, count)| {
            let matched = self
                .doubles
                .get(*name)
                .is_some_and(|d| d.verify_call_count(*count));
            ok && matched
        })
    }

    /// Summaries of every registered double, sorted by name.
    #[must_use]
    pub fn reports(&self) -> Vec<DoubleReport> {
        let mut reports: Vec<DoubleReport> = self.doubles.values().map(TestDouble::report).collect();
        reports.sort_by(|a, b| a.name.cmp(&b.name));
        reports
    }

    /// Erases every registered double.
    pub fn erase_all(&mut self) {
        for (_, double) in self.doubles.drain() {
            double.erase();
        }
    }
}
