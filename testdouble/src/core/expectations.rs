//! Expected arguments and their comparators.

use super::{Arg, Comparator, ComparatorRegistry};
use crate::errors::DoubleError;

/// Why a set of actual arguments failed to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mismatch {
    /// No expected arguments were configured.
    NotConfigured,
    /// The actual argument count differs from the arity.
    ArityMismatch {
        /// Declared arity.
        expected: usize,
        /// Number of actual arguments.
        actual: usize,
    },
    /// The comparator at `position` reported a difference.
    Argument {
        /// Zero-based argument position.
        position: usize,
    },
}

/// Expected arguments for a fixed arity plus per-position comparators.
#[derive(Debug, Clone)]
pub struct Expectations {
    arity: usize,
    expected: Option<Vec<Arg>>,
    comparators: ComparatorRegistry,
}

impl Expectations {
    /// Creates an empty store for `arity` arguments.
    #[must_use]
    pub fn new(arity: usize) -> Self {
        Self {
            arity,
            expected: None,
            comparators: ComparatorRegistry::new(arity),
        }
    }

    /// Declared arity.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Returns the expected arguments, if configured.
    #[must_use]
    pub fn expected(&self) -> Option<&[Arg]> {
        self.expected.as_deref()
    }

    /// Returns the comparator registry.
    #[must_use]
    pub fn comparators(&self) -> &ComparatorRegistry {
        &self.comparators
    }

    /// Replaces the expected arguments.
    ///
    /// # Errors
    ///
    /// Returns `ArityMismatch` unless exactly `arity` values are supplied.
    /// Prior expectations are kept in that case.
    pub fn set_expected(&mut self, function: &str, values: Vec<Arg>) -> Result<(), DoubleError> {
        if values.len() != self.arity {
            return Err(DoubleError::ArityMismatch {
                function: function.to_string(),
                expected: self.arity,
                actual: values.len(),
            });
        }
        self.expected = Some(values);
        Ok(())
    }

    /// Installs a comparator for one argument position.
    ///
    /// # Errors
    ///
    /// Returns `ComparatorIndexOutOfRange` if `index >= arity`.
    pub fn set_comparator(
        &mut self,
        function: &str,
        index: usize,
        comparator: Comparator,
    ) -> Result<(), DoubleError> {
        self.comparators.set(function, index, comparator)
    }

    /// Checks `actual` against the expected arguments, position by position.
    ///
    /// # Errors
    ///
    /// Returns the first [`Mismatch`] found.
    pub fn check(&self, actual: &[Arg]) -> Result<(), Mismatch> {
        let expected = self.expected.as_ref().ok_or(Mismatch::NotConfigured)?;
        if actual.len() != self.arity {
            return Err(Mismatch::ArityMismatch {
                expected: self.arity,
                actual: actual.len(),
            });
        }
        expected
            .iter()
            .zip(actual)
            .enumerate()
            .find(|(i, (e, a))| !self.comparators.compare(*i, e, a))
            .map_or(Ok(()), |(position, _)| Err(Mismatch::Argument { position }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{i32_eq, text_eq};
    use std::sync::Arc;

    #[test]
    fn test_unconfigured_never_matches() {
        let store = Expectations::new(0);
        assert_eq!(store.check(&[]), Err(Mismatch::NotConfigured));
    }

    #[test]
    fn test_set_expected_enforces_arity() {
        let mut store = Expectations::new(2);
        let err = store.set_expected("f", vec![Arg::i32(1)]).unwrap_err();
        assert!(matches!(err, DoubleError::ArityMismatch { expected: 2, actual: 1, .. }));
        assert!(store.expected().is_none());
    }

    #[test]
    fn test_check_with_comparators() {
        let mut store = Expectations::new(2);
        store
            .set_expected("f", vec![Arg::i32(1), Arg::text("a")])
            .unwrap();
        store.set_comparator("f", 0, Arc::new(i32_eq)).unwrap();
        store.set_comparator("f", 1, Arc::new(text_eq)).unwrap();
        assert_eq!(store.comparators().arity(), 2);
        assert!(store.comparators().is_custom(0));
        assert!(store.comparators().is_custom(1));

        assert_eq!(store.check(&[Arg::i32(1), Arg::text("a")]), Ok(()));
        assert_eq!(
            store.check(&[Arg::i32(1), Arg::text("b")]),
            Err(Mismatch::Argument { position: 1 })
        );
        assert_eq!(
            store.check(&[Arg::i32(1)]),
            Err(Mismatch::ArityMismatch { expected: 2, actual: 1 })
        );
    }

    #[test]
    fn test_zero_arity_matches_empty_call() {
        let mut store = Expectations::new(0);
        store.set_expected("f", Vec::new()).unwrap();
        assert_eq!(store.check(&[]), Ok(()));
    }
}
