//! Spy: full-history call recorder.

use std::sync::Arc;

use crate::core::{Arg, CallRecorder, DoubleCore, DoubleKind, RecordsCalls, Retention, TestDouble};
use crate::diagnostics::{DiagnosticCode, DiagnosticSink};
use crate::errors::DoubleError;

/// A double that records the arguments of every call, in order.
#[derive(Debug, Clone)]
pub struct Spy {
    core: DoubleCore,
    arity: usize,
    calls: CallRecorder<Vec<Arg>>,
}

impl Spy {
    /// Creates a spy of `name` taking `arity` arguments.
    #[must_use]
    pub fn new(name: &str, arity: usize) -> Self {
        Self {
            core: DoubleCore::new(name, DoubleKind::Spy),
            arity,
            calls: CallRecorder::new(Retention::Full),
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
        self.arity
    }

    /// Appends a call record.
    ///
    /// # Errors
    ///
    /// Returns `ArityMismatch` unless exactly `arity` arguments are given.
    /// Nothing is recorded in that case.
    pub fn record_call(&mut self, args: impl IntoIterator<Item = Arg>) -> Result<(), DoubleError> {
        let args: Vec<Arg> = args.into_iter().collect();
        if args.len() != self.arity {
            self.core.report(DiagnosticCode::ArityMismatch {
                expected: self.arity,
                actual: args.len(),
            });
            return Err(DoubleError::ArityMismatch {
                function: self.core.name().to_string(),
                expected: self.arity,
                actual: args.len(),
            });
        }
        self.core.tick();
        self.calls.record(args);
        debug_assert_eq!(self.core.call_count(), self.calls.len());
        Ok(())
    }

    /// Returns the arguments of call `call_index` (0-based, insertion order).
    ///
    /// # Errors
    ///
    /// Returns `CallIndexOutOfRange` if `call_index >= call_count`.
    pub fn call_args(&self, call_index: usize) -> Result<&[Arg], DoubleError> {
        self.calls
            .get(call_index)
            .map(Vec::as_slice)
            .ok_or_else(|| {
                self.core.report(DiagnosticCode::CallIndexOutOfRange {
                    index: call_index,
                    count: self.calls.len(),
                });
                DoubleError::CallIndexOutOfRange {
                    function: self.core.name().to_string(),
                    index: call_index,
                    count: self.calls.len(),
                }
            })
    }
}

impl TestDouble for Spy {
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

    /// Clears the counter and the whole history. The record storage stays
    /// allocated.
    fn reset(&mut self) {
        self.core.reset();
        self.calls.clear();
    }
}

impl RecordsCalls for Spy {
    type Record = Vec<Arg>;

    fn recorded_calls(&self) -> &[Vec<Arg>] {
        self.calls.as_slice()
    }
}
