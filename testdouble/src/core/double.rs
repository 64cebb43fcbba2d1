//! Capability traits shared by every double, and the bookkeeping behind them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use super::Arg;
use crate::diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink, LoggingDiagnosticSink};

/// The variant of a double.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoubleKind {
    /// Expectation-checking double.
    Mock,
    /// Full-history call recorder.
    Spy,
    /// Canned-answer double.
    Stub,
    /// Scripted input source.
    Input,
    /// Captured output sink.
    Output,
    /// Replacement for an injected dependency.
    Inject,
}

impl DoubleKind {
    /// Human-readable label used in diagnostics.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Mock => "Mock",
            Self::Spy => "Spy",
            Self::Stub => "Stub",
            Self::Input => "Input",
            Self::Output => "Output",
            Self::Inject => "Inject",
        }
    }
}

impl fmt::Display for DoubleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A point-in-time summary of a double.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoubleReport {
    /// The doubled function or dependency.
    pub name: String,
    /// The double variant.
    pub kind: DoubleKind,
    /// Number of recorded invocations.
    pub call_count: usize,
}

/// Operations every double supports.
pub trait TestDouble {
    /// The doubled function or dependency.
    fn name(&self) -> &str;

    /// The double variant.
    fn kind(&self) -> DoubleKind;

    /// Number of recorded invocations.
    fn call_count(&self) -> usize;

    /// Returns true iff the double was invoked exactly `expected` times.
    ///
    /// A mismatch emits a diagnostic but is never fatal.
    fn verify_call_count(&self, expected: usize) -> bool;

    /// Clears counters and recorded calls. Configuration is kept.
    fn reset(&mut self);

    /// Releases the double and everything it owns.
    fn erase(self)
    where
        Self: Sized,
    {
        tracing::debug!(function = %self.name(), kind = %self.kind(), "Erasing double");
        drop(self);
    }

    /// Summarizes the double.
    fn report(&self) -> DoubleReport {
        DoubleReport {
            name: self.name().to_string(),
            kind: self.kind(),
            call_count: self.call_count(),
        }
    }
}

/// Doubles that keep a log of what they were called with.
pub trait RecordsCalls: TestDouble {
    /// What one logged call holds.
    type Record;

    /// Every retained call record, oldest first.
    fn recorded_calls(&self) -> &[Self::Record];
}

/// Doubles that hand values back to the code under test.
pub trait SuppliesValues: TestDouble {
    /// Produces the next value, counting the invocation where the variant
    /// does so.
    fn supply(&mut self) -> Option<Arg>;
}

/// Name, kind, call counter and diagnostic sink shared by every double.
#[derive(Clone)]
pub(crate) struct DoubleCore {
    name: String,
    kind: DoubleKind,
    call_count: usize,
    sink: Arc<dyn DiagnosticSink>,
}

impl DoubleCore {
    pub(crate) fn new(name: &str, kind: DoubleKind) -> Self {
        tracing::debug!(function = %name, kind = %kind, "Creating double");
        Self {
            name: name.to_owned(),
            kind,
            call_count: 0,
            sink: Arc::new(LoggingDiagnosticSink::default()),
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn kind(&self) -> DoubleKind {
        self.kind
    }

    pub(crate) fn call_count(&self) -> usize {
        self.call_count
    }

    pub(crate) fn set_sink(&mut self, sink: Arc<dyn DiagnosticSink>) {
        self.sink = sink;
    }

    /// Counts one invocation and returns the new total.
    pub(crate) fn tick(&mut self) -> usize {
        self.call_count += 1;
        tracing::trace!(function = %self.name, call_count = self.call_count, "Recorded call");
        self.call_count
    }

    pub(crate) fn reset(&mut self) {
        self.call_count = 0;
        tracing::debug!(function = %self.name, kind = %self.kind, "Reset double");
    }

    pub(crate) fn report(&self, code: DiagnosticCode) {
        self.sink
            .emit(&Diagnostic::new(&self.name, self.kind, code));
    }

    pub(crate) fn verify_call_count(&self, expected: usize) -> bool {
        if self.call_count == expected {
            return true;
        }
        self.report(DiagnosticCode::CallCountMismatch {
            actual: self.call_count,
            expected,
        });
        false
    }
}

impl fmt::Debug for DoubleCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoubleCore")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("call_count", &self.call_count)
            .finish_non_exhaustive()
    }
}
