//! Diagnostic records emitted by failed verifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::DoubleKind;

/// What went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum DiagnosticCode {
    /// The double was called a different number of times than expected.
    CallCountMismatch {
        /// Recorded calls.
        actual: usize,
        /// Expected calls.
        expected: usize,
    },
    /// A recorded call was requested that does not exist.
    CallIndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Recorded calls.
        count: usize,
    },
    /// A comparator was addressed outside the declared arity.
    ComparatorIndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Declared arity.
        arity: usize,
    },
    /// An argument list did not match the declared arity.
    ArityMismatch {
        /// Declared arity.
        expected: usize,
        /// Supplied arguments.
        actual: usize,
    },
    /// An argument differed from its expectation.
    ArgumentMismatch {
        /// Zero-based position.
        position: usize,
    },
    /// Verification ran before any call was recorded.
    NotCalled,
    /// Verification ran before expectations were configured.
    NoExpectations,
    /// Captured output differed from the expected text.
    OutputMismatch {
        /// Index of the captured call.
        index: usize,
    },
}

/// A single non-fatal verification failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The doubled function.
    pub function: String,
    /// The double variant.
    pub kind: DoubleKind,
    /// Structured failure details.
    #[serde(flatten)]
    pub code: DiagnosticCode,
    /// Rendered message.
    pub message: String,
    /// When the diagnostic was produced.
    pub emitted_at: DateTime<Utc>,
}

impl Diagnostic {
    /// Creates a diagnostic, rendering its message from `code`.
    #[must_use]
    pub fn new(function: impl Into<String>, kind: DoubleKind, code: DiagnosticCode) -> Self {
        let function = function.into();
        let message = render(&function, kind, code);
        Self {
            function,
            kind,
            code,
            message,
            emitted_at: Utc::now(),
        }
    }

    /// Converts to a JSON value.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

fn render(function: &str, kind: DoubleKind, code: DiagnosticCode) -> String {
    match code {
        DiagnosticCode::CallCountMismatch { actual, expected } => format!(
            "{kind} function '{function}' was called {actual} times, expected {expected} times"
        ),
        DiagnosticCode::CallIndexOutOfRange { index, count } => format!(
            "Invalid call index {index} for function '{function}' ({count} calls recorded)"
        ),
        DiagnosticCode::ComparatorIndexOutOfRange { index, arity } => format!(
            "Invalid comparator index {index} for function '{function}' with arity {arity}"
        ),
        DiagnosticCode::ArityMismatch { expected, actual } => {
            format!("{kind} function '{function}' takes {expected} arguments, got {actual}")
        }
        DiagnosticCode::ArgumentMismatch { position } => {
            format!("{kind} function '{function}' argument {position} did not match")
        }
        DiagnosticCode::NotCalled => format!("{kind} function '{function}' was never called"),
        DiagnosticCode::NoExpectations => {
            format!("{kind} function '{function}' has no expected arguments")
        }
        DiagnosticCode::OutputMismatch { index } => {
            format!("{kind} function '{function}' captured unexpected output at call {index}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let d = Diagnostic::new(
            "print",
            DoubleKind::Output,
            DiagnosticCode::CallCountMismatch {
                actual: 2,
                expected: 3,
            },
        );
        assert_eq!(
            d.message,
            "Output function 'print' was called 2 times, expected 3 times"
        );

        let d = Diagnostic::new(
            "print",
            DoubleKind::Output,
            DiagnosticCode::CallIndexOutOfRange { index: 5, count: 2 },
        );
        assert!(d.message.starts_with("Invalid call index 5 for function 'print'"));
    }

    #[test]
    fn test_json_shape() {
        let d = Diagnostic::new(
            "add",
            DoubleKind::Mock,
            DiagnosticCode::ArgumentMismatch { position: 1 },
        );
        let json = d.to_json();
        assert_eq!(json["function"], "add");
        assert_eq!(json["kind"], "mock");
        assert_eq!(json["code"], "argument_mismatch");
        assert_eq!(json["position"], 1);
        assert!(json["emitted_at"].is_string());
    }
}
