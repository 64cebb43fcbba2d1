//! Input double: scripted inputs that cycle.

use std::sync::Arc;

use crate::core::{
    Arg, DoubleCore, DoubleKind, SequencePolicy, SuppliesValues, TestDouble, ValueSequence,
};
use crate::diagnostics::DiagnosticSink;

/// A double that feeds pre-scripted inputs to the code under test.
///
/// Reads wrap around once the inputs run out, unlike a [`Stub`](super::Stub)
/// which repeats its last value.
#[derive(Debug, Clone)]
pub struct InputDouble {
    core: DoubleCore,
    inputs: ValueSequence,
}

impl InputDouble {
    /// Creates an input double for `name`.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            core: DoubleCore::new(name, DoubleKind::Input),
            inputs: ValueSequence::new(SequencePolicy::Cycle),
        }
    }

    /// Routes diagnostics to `sink`.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.core.set_sink(sink);
        self
    }

    /// Replaces the input sequence. An empty sequence is allowed.
    pub fn set_inputs(&mut self, values: impl IntoIterator<Item = Arg>) {
        self.inputs.replace(values);
    }

    /// Returns the next input.
    ///
    /// With no inputs configured this yields `None` and the read is not
    /// counted.
    pub fn get(&mut self) -> Option<Arg> {
        if self.inputs.is_empty() {
            return None;
        }
        let call_number = self.core.tick();
        self.inputs.value_for_call(call_number)
    }

    /// Number of configured inputs.
    #[must_use]
    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }
}

impl TestDouble for InputDouble {
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
    }
}

impl SuppliesValues for InputDouble {
    fn supply(&mut self) -> Option<Arg> {
        self.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycles_through_inputs() {
        let mut input = InputDouble::new("read_line");
        input.set_inputs([Arg::from("a"), Arg::from("b"), Arg::from("c")]);
        let seen: Vec<String> = (0..5)
            .filter_map(|_| input.get()?.as_text().map(str::to_string))
            .collect();
        assert_eq!(seen, vec!["a", "b", "c", "a", "b"]);
        assert!(input.verify_call_count(5));
    }

    #[test]
    fn test_empty_inputs_not_counted() {
        let mut input = InputDouble::new("read_line");
        assert!(input.get().is_none());
        assert_eq!(input.call_count(), 0);
    }

    #[test]
    fn test_reset_restarts_cycle() {
        let mut input = InputDouble::new("read_line");
        input.set_inputs([Arg::i32(1), Arg::i32(2)]);
        input.get();
        input.reset();
        assert_eq!(input.call_count(), 0);
        assert_eq!(input.input_count(), 2);
        assert_eq!(input.supply().and_then(|v| v.as_i32()), Some(1));
    }

    #[test]
    fn test_set_inputs_replaces() {
        let mut input = InputDouble::new("read_line");
        input.set_inputs([Arg::i32(1), Arg::i32(2)]);
        input.set_inputs([Arg::i32(9)]);
        assert_eq!(input.get().and_then(|v| v.as_i32()), Some(9));
        assert_eq!(input.get().and_then(|v| v.as_i32()), Some(9));
        input.set_inputs([]);
        assert!(input.get().is_none());
        assert_eq!(input.call_count(), 2);
    }
}
