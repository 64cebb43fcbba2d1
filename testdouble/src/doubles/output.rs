//! Output double: captures text produced by the code under test.

use std::sync::Arc;

use crate::core::{CallRecorder, DoubleCore, DoubleKind, RecordsCalls, Retention, TestDouble};
use crate::diagnostics::{DiagnosticCode, DiagnosticSink};
use crate::errors::DoubleError;

/// A double that keeps an owned copy of every captured output.
#[derive(Debug, Clone)]
pub struct OutputDouble {
    core: DoubleCore,
    captured: CallRecorder<String>,
}

impl OutputDouble {
    /// Creates an output double for `name`.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            core: DoubleCore::new(name, DoubleKind::Output),
            captured: CallRecorder::new(Retention::Full),
        }
    }

    /// Routes diagnostics to `sink`.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.core.set_sink(sink);
        self
    }

    /// Appends a copy of `text` to the capture log.
    pub fn capture(&mut self, text: &str) {
        self.core.tick();
        self.captured.record(text.to_owned());
        debug_assert_eq!(self.core.call_count(), self.captured.len());
    }

    /// Returns true iff the output captured at `call_index` equals
    /// `expected` exactly.
    ///
    /// An out-of-range index fails with a diagnostic.
    pub fn verify(&self, expected: &str, call_index: usize) -> bool {
        let Some(actual) = self.captured.get(call_index) else {
            self.core.report(DiagnosticCode::CallIndexOutOfRange {
                index: call_index,
                count: self.captured.len(),
            });
            return false;
        };
        if actual == expected {
            return true;
        }
        self.core
            .report(DiagnosticCode::OutputMismatch { index: call_index });
        false
    }

    /// Returns the output captured at `call_index`.
    ///
    /// # Errors
    ///
    /// Returns `CallIndexOutOfRange` if nothing was captured at that index.
    pub fn captured(&self, call_index: usize) -> Result<&str, DoubleError> {
        self.captured
            .get(call_index)
            .map(String::as_str)
            .ok_or_else(|| DoubleError::CallIndexOutOfRange {
                function: self.core.name().to_string(),
                index: call_index,
                count: self.captured.len(),
            })
    }

    /// Every captured output, oldest first.
    #[must_use]
    pub fn captured_outputs(&self) -> &[String] {
        self.captured.as_slice()
    }

    /// Number of captured outputs.
    #[must_use]
    pub fn output_count(&self) -> usize {
        self.captured.len()
    }
}

impl TestDouble for OutputDouble {
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
        self.captured.clear();
    }
}

impl RecordsCalls for OutputDouble {
    type Record = String;

    fn recorded_calls(&self) -> &[String] {
        self.captured.as_slice()
    }
}
