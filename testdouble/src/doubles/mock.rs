//! Mock: checks the arguments of the latest call against expectations.

use std::sync::Arc;

use crate::core::{
    Arg, CallRecorder, Comparator, DoubleCore, DoubleKind, Expectations, Mismatch, RecordsCalls,
    Retention, SequencePolicy, TestDouble, ValueSequence,
};
use crate::diagnostics::{DiagnosticCode, DiagnosticSink};
use crate::errors::DoubleError;

/// A double that verifies how it was called and returns scripted values.
///
/// Only the most recent call's arguments are retained, so [`verify`](Self::verify)
/// checks the latest invocation. Use a [`Spy`](super::Spy) to inspect every
/// call.
#[derive(Debug, Clone)]
pub struct Mock {
    core: DoubleCore,
    expectations: Expectations,
    latest: CallRecorder<Vec<Arg>>,
    returns: ValueSequence,
}

impl Mock {
    /// Creates a mock of `name` taking `arity` arguments.
    #[must_use]
    pub fn new(name: &str, arity: usize) -> Self {
        Self {
            core: DoubleCore::new(name, DoubleKind::Mock),
            expectations: Expectations::new(arity),
            latest: CallRecorder::with_capacity(Retention::LatestOnly, 1),
            returns: ValueSequence::new(SequencePolicy::ClampToLast),
        }
    }

    /// Routes diagnostics to `sink`.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.core.set_sink(sink);
        self
    }

    /// Declared number of arguments.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.expectations.arity()
    }

    /// Replaces the expected arguments.
    ///
    /// # Errors
    ///
    /// Returns `ArityMismatch` unless exactly `arity` values are given; the
    /// previous expectations stay in place.
    pub fn set_expected_arguments(
        &mut self,
        values: impl IntoIterator<Item = Arg>,
    ) -> Result<(), DoubleError> {
        let values: Vec<Arg> = values.into_iter().collect();
        let supplied = values.len();
        let result = self.expectations.set_expected(self.core.name(), values);
        if result.is_err() {
            self.core.report(DiagnosticCode::ArityMismatch {
                expected: self.arity(),
                actual: supplied,
            });
        }
        result
    }

    /// Installs a comparator for argument `index`, overriding identity.
    ///
    /// # Errors
    ///
    /// Returns `ComparatorIndexOutOfRange` if `index >= arity`; nothing
    /// changes in that case.
    pub fn set_comparator<F>(&mut self, index: usize, comparator: F) -> Result<(), DoubleError>
    where
        F: Fn(&Arg, &Arg) -> bool + Send + Sync + 'static,
    {
        self.set_shared_comparator(index, Arc::new(comparator))
    }

    /// Installs an already shared comparator for argument `index`.
    ///
    /// # Errors
    ///
    /// Returns `ComparatorIndexOutOfRange` if `index >= arity`.
    pub fn set_shared_comparator(
        &mut self,
        index: usize,
        comparator: Comparator,
    ) -> Result<(), DoubleError> {
        let result = self
            .expectations
            .set_comparator(self.core.name(), index, comparator);
        if result.is_err() {
            self.core.report(DiagnosticCode::ComparatorIndexOutOfRange {
                index,
                arity: self.arity(),
            });
        }
        result
    }

    /// Replaces the return-value sequence. An empty sequence is allowed.
    pub fn set_return_values(&mut self, values: impl IntoIterator<Item = Arg>) {
        self.returns.replace(values);
    }

    /// Records an invocation and returns the scripted value for it.
    ///
    /// The call is counted whether or not `args` match the expectations.
    /// Return values are used in order, then the last one repeats; with no
    /// return values configured the call yields `None`.
    pub fn call(&mut self, args: impl IntoIterator<Item = Arg>) -> Option<Arg> {
        let args: Vec<Arg> = args.into_iter().collect();
        let call_number = self.core.tick();
        self.latest.record(args);
        self.returns.value_for_call(call_number)
    }

    /// Returns true iff the latest call matched the expected arguments under
    /// each position's comparator.
    ///
    /// Fails when nothing was called yet or no expectations were set.
    pub fn verify(&self) -> bool {
        let Some(actual) = self.latest.latest() else {
            self.core.report(DiagnosticCode::NotCalled);
            return false;
        };
        match self.expectations.check(actual) {
            Ok(()) => true,
            Err(mismatch) => {
                self.core.report(match mismatch {
                    Mismatch::NotConfigured => DiagnosticCode::NoExpectations,
                    Mismatch::ArityMismatch { expected, actual } => {
                        DiagnosticCode::ArityMismatch { expected, actual }
                    }
                    Mismatch::Argument { position } => {
                        DiagnosticCode::ArgumentMismatch { position }
                    }
                });
                false
            }
        }
    }

    /// Returns true once the mock has been called since creation or reset.
    #[must_use]
    pub fn was_called(&self) -> bool {
        !self.latest.is_empty()
    }

    /// Returns the expected arguments, if configured.
    #[must_use]
    pub fn expected_arguments(&self) -> Option<&[Arg]> {
        self.expectations.expected()
    }

    /// Returns the arguments of the latest call.
    #[must_use]
    pub fn actual_arguments(&self) -> Option<&[Arg]> {
        self.latest.latest().map(Vec::as_slice)
    }

    /// Number of configured return values.
    #[must_use]
    pub fn return_count(&self) -> usize {
        self.returns.len()
    }
}

impl TestDouble for Mock {
    fn name(&self) -> &str {
        self.core.name()
    }

    fn kind(&self) -> DoubleKind {
        self.core.kind()
    }

    fn call_count(&self) -> usize {
        self.core.call_count()
    }

    fn verify_call_count(&self, expected: usize) -> bool {
        self.core.verify_call_count(expected)
    }

    fn reset(&mut self) {
        self.core.reset();
        self.latest.clear();
    }
}

impl RecordsCalls for Mock {
    type Record = Vec<Arg>;

    fn recorded_calls(&self) -> &[Vec<Arg>] {
        self.latest.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{i32_eq, text_eq};
    use crate::diagnostics::CollectingDiagnosticSink;
    use pretty_assertions::assert_eq;

    fn add_mock() -> Mock {
        let mut mock = Mock::new("add", 2).with_sink(Arc::new(CollectingDiagnosticSink::new()));
        mock.set_comparator(0, i32_eq).unwrap();
        mock.set_comparator(1, i32_eq).unwrap();
        mock.set_expected_arguments([Arg::i32(2), Arg::i32(3)])
            .unwrap();
        mock
    }

    #[test]
    fn test_create() {
        let mock = Mock::new("test_function", 2);
        assert_eq!(mock.name(), "test_function");
        assert_eq!(mock.arity(), 2);
        assert_eq!(mock.call_count(), 0);
        assert_eq!(mock.return_count(), 0);
        assert!(mock.expected_arguments().is_none());
        assert!(!mock.was_called());
    }

    #[test]
    fn test_verify_matching_call() {
        let mut mock = add_mock();
        mock.call([Arg::i32(2), Arg::i32(3)]);
        assert!(mock.verify());
        assert!(mock.verify_call_count(1));
    }

    #[test]
    fn test_verify_mismatching_call() {
        let sink = Arc::new(CollectingDiagnosticSink::new());
        let mut mock = add_mock().with_sink(sink.clone());
        mock.call([Arg::i32(2), Arg::i32(4)]);
        assert!(!mock.verify());
        assert_eq!(
            sink.diagnostics()[0].code,
            DiagnosticCode::ArgumentMismatch { position: 1 }
        );
    }

    #[test]
    fn test_verify_before_any_call() {
        let mock = add_mock();
        assert!(!mock.verify());
    }

    #[test]
    fn test_verify_without_expectations() {
        let mut mock = Mock::new("f", 0).with_sink(Arc::new(CollectingDiagnosticSink::new()));
        mock.call([]);
        assert!(!mock.verify());
    }

    #[test]
    fn test_verify_checks_only_latest_call() {
        let mut mock = add_mock();
        mock.call([Arg::i32(9), Arg::i32(9)]);
        mock.call([Arg::i32(2), Arg::i32(3)]);
        assert!(mock.verify());
        assert_eq!(mock.recorded_calls().len(), 1);

        mock.call([Arg::i32(9), Arg::i32(9)]);
        assert!(!mock.verify());
        assert_eq!(mock.call_count(), 3);
    }

    #[test]
    fn test_default_comparator_is_identity() {
        let mut mock = Mock::new("f", 1).with_sink(Arc::new(CollectingDiagnosticSink::new()));
        let expected = Arg::text("value");
        mock.set_expected_arguments([expected.clone()]).unwrap();

        mock.call([Arg::text("value")]);
        assert!(!mock.verify());

        mock.call([expected]);
        assert!(mock.verify());
    }

    #[test]
    fn test_set_comparator_out_of_range_is_noop() {
        let sink = Arc::new(CollectingDiagnosticSink::new());
        let mut mock = Mock::new("f", 1).with_sink(sink.clone());
        let err = mock.set_comparator(1, text_eq).unwrap_err();
        assert!(matches!(err, DoubleError::ComparatorIndexOutOfRange { index: 1, arity: 1, .. }));
        assert_eq!(sink.len(), 1);

        let expected = Arg::text("x");
        mock.set_expected_arguments([expected.clone()]).unwrap();
        mock.call([Arg::text("x")]);
        // position 0 still uses identity
        assert!(!mock.verify());
    }

    #[test]
    fn test_set_expected_wrong_arity_keeps_previous() {
        let mut mock = add_mock();
        assert!(mock.set_expected_arguments([Arg::i32(1)]).is_err());
        assert_eq!(mock.expected_arguments().map(<[Arg]>::len), Some(2));
        mock.call([Arg::i32(2), Arg::i32(3)]);
        assert!(mock.verify());
    }

    #[test]
    fn test_return_values_clamp_to_last() {
        let mut mock = Mock::new("f", 0);
        mock.set_return_values([Arg::i32(10), Arg::i32(20)]);
        let results: Vec<Option<i32>> = (0..4)
            .map(|_| mock.call([]).and_then(|v| v.as_i32()))
            .collect();
        assert_eq!(results, vec![Some(10), Some(20), Some(20), Some(20)]);
    }

    #[test]
    fn test_no_return_values_yields_none() {
        let mut mock = Mock::new("f", 1);
        assert!(mock.call([Arg::i32(1)]).is_none());
        assert_eq!(mock.call_count(), 1);
    }

    #[test]
    fn test_reset_keeps_configuration() {
        let mut mock = add_mock();
        mock.set_return_values([Arg::i32(5)]);
        mock.call([Arg::i32(2), Arg::i32(3)]);

        mock.reset();
        assert_eq!(mock.call_count(), 0);
        assert!(!mock.was_called());
        assert!(mock.actual_arguments().is_none());
        assert_eq!(mock.return_count(), 1);
        assert!(mock.expected_arguments().is_some());

        assert_eq!(mock.call([Arg::i32(2), Arg::i32(3)]).and_then(|v| v.as_i32()), Some(5));
        assert!(mock.verify());
    }

    #[test]
    fn test_erase_releases_arguments() {
        let expected = Arg::i32(1);
        let actual = Arg::i32(1);
        let ret = Arg::i32(2);
        let mut mock = Mock::new("f", 1);
        mock.set_expected_arguments([expected.clone()]).unwrap();
        mock.set_return_values([ret.clone()]);
        let returned = mock.call([actual.clone()]);
        drop(returned);

        mock.erase();
        assert_eq!(expected.handle_count(), 1);
        assert_eq!(actual.handle_count(), 1);
        assert_eq!(ret.handle_count(), 1);
    }
}
