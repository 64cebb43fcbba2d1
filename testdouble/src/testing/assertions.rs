//! Panicking assertions over doubles.

use crate::core::{Arg, TestDouble};
use crate::doubles::{Mock, OutputDouble, Spy};

/// Asserts that a double was called exactly `expected` times.
pub fn assert_call_count<D: TestDouble>(double: &D, expected: usize) {
    assert!(
        double.verify_call_count(expected),
        "{} '{}' was called {} times, expected {}",
        double.kind(),
        double.name(),
        double.call_count(),
        expected
    );
}

/// Asserts that a mock's latest call matched its expectations.
pub fn assert_mock_verified(mock: &Mock) {
    assert!(
        mock.verify(),
        "Mock '{}' did not match: expected {:?}, got {:?}",
        mock.name(),
        mock.expected_arguments(),
        mock.actual_arguments()
    );
}

/// Asserts that an output double captured `expected` at `call_index`.
pub fn assert_captured(output: &OutputDouble, call_index: usize, expected: &str) {
    assert!(
        output.verify(expected, call_index),
        "Output '{}' call {}: expected {:?}, captured {:?}",
        output.name(),
        call_index,
        expected,
        output.captured_outputs().get(call_index)
    );
}

/// Asserts that a spy's call `call_index` received `expected` under `eq`.
pub fn assert_call_args<F>(spy: &Spy, call_index: usize, expected: &[Arg], eq: F)
where
    F: Fn(&Arg, &Arg) -> bool,
{
    let actual = match spy.call_args(call_index) {
        Ok(args) => args,
        Err(err) => panic!("{err}"),
    };
    assert!(
        actual.len() == expected.len() && expected.iter().zip(actual).all(|(e, a)| eq(e, a)),
        "Spy '{}' call {}: expected {:?}, got {:?}",
        spy.name(),
        call_index,
        expected,
        actual
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{i32_eq, text_eq};
    use crate::diagnostics::NoOpDiagnosticSink;
    use std::sync::Arc;

    #[test]
    fn test_assert_call_count() {
        let mut spy = Spy::new("f", 0);
        spy.record_call([]).unwrap();
        assert_call_count(&spy, 1);
    }

    #[test]
    #[should_panic(expected = "Spy 'f' was called 0 times, expected 1")]
    fn test_assert_call_count_fails() {
        let spy = Spy::new("f", 0).with_sink(Arc::new(NoOpDiagnosticSink));
        assert_call_count(&spy, 1);
    }

    #[test]
    fn test_assert_mock_verified() {
        let mut mock = Mock::new("f", 1);
        mock.set_comparator(0, text_eq).unwrap();
        mock.set_expected_arguments([Arg::text("a")]).unwrap();
        mock.call([Arg::text("a")]);
        assert_mock_verified(&mock);
    }

    #[test]
    #[should_panic(expected = "Mock 'f' did not match")]
    fn test_assert_mock_verified_fails() {
        let mock = Mock::new("f", 0).with_sink(Arc::new(NoOpDiagnosticSink));
        assert_mock_verified(&mock);
    }

    #[test]
    fn test_assert_captured() {
        let mut output = OutputDouble::new("print");
        output.capture("hello");
        assert_captured(&output, 0, "hello");
    }

    #[test]
    #[should_panic(expected = "Output 'print' call 1")]
    fn test_assert_captured_out_of_range() {
        let output = OutputDouble::new("print").with_sink(Arc::new(NoOpDiagnosticSink));
        assert_captured(&output, 1, "hello");
    }

    #[test]
    fn test_assert_call_args() {
        let mut spy = Spy::new("add", 2);
        spy.record_call([Arg::i32(1), Arg::i32(2)]).unwrap();
        assert_call_args(&spy, 0, &[Arg::i32(1), Arg::i32(2)], i32_eq);
    }

    #[test]
    #[should_panic(expected = "Invalid call index 3")]
    fn test_assert_call_args_missing_call() {
        let spy = Spy::new("add", 2).with_sink(Arc::new(NoOpDiagnosticSink));
        assert_call_args(&spy, 3, &[], i32_eq);
    }
}
