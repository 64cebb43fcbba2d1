//! Stub: canned answers, counted calls.

use std::sync::Arc;

use crate::core::{
    Arg, DoubleCore, DoubleKind, SequencePolicy, SuppliesValues, TestDouble, ValueSequence,
};
use crate::diagnostics::DiagnosticSink;

/// A double that takes no arguments and returns scripted values.
#[derive(Debug, Clone)]
pub struct Stub {
    core: DoubleCore,
    returns: ValueSequence,
}

impl Stub {
    /// Creates a stub of `name`.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            core: DoubleCore::new(name, DoubleKind::Stub),
            returns: ValueSequence::new(SequencePolicy::ClampToLast),
        }
    }

    /// Routes diagnostics to `sink`.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.core.set_sink(sink);
        self
    }

    /// Replaces the return-value sequence. An empty sequence is allowed.
    pub fn set_return_values(&mut self, values: impl IntoIterator<Item = Arg>) {
        self.returns.replace(values);
    }

    /// Counts a call and returns its scripted value.
    ///
    /// Values are used in order, then the last one repeats.
    pub fn call(&mut self) -> Option<Arg> {
        let call_number = self.core.tick();
        self.returns.value_for_call(call_number)
    }

    /// Number of configured return values.
    #[must_use]
    pub fn return_count(&self) -> usize {
        self.returns.len()
    }
}

impl TestDouble for Stub {
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

impl SuppliesValues for Stub {
    fn supply(&mut self) -> Option<Arg> {
        self.call()
    }
}
