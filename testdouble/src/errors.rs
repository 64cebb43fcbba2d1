//! Error types for the testdouble engine.
//!
//! Configuration and lookup operations return [`DoubleError`]. Verification
//! operations never return errors: they report a boolean and emit a
//! [`Diagnostic`](crate::diagnostics::Diagnostic) instead.

use thiserror::Error;

/// The main error type for testdouble operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DoubleError {
    /// A recorded call was requested that does not exist.
    #[error("Invalid call index {index} for function '{function}' ({count} calls recorded)")]
    CallIndexOutOfRange {
        /// The doubled function.
        function: String,
        /// The requested index.
        index: usize,
        /// Number of recorded calls.
        count: usize,
    },

    /// A comparator was addressed at a position outside the declared arity.
    #[error("Comparator index {index} out of range for function '{function}' with arity {arity}")]
    ComparatorIndexOutOfRange {
        /// The doubled function.
        function: String,
        /// The requested argument position.
        index: usize,
        /// Declared arity.
        arity: usize,
    },

    /// An argument list did not match the declared arity.
    #[error("Function '{function}' takes {expected} arguments, got {actual}")]
    ArityMismatch {
        /// The doubled function.
        function: String,
        /// Declared arity.
        expected: usize,
        /// Number of arguments supplied.
        actual: usize,
    },

    /// A double with the same name is already registered.
    #[error("A double named '{0}' is already registered")]
    DuplicateDouble(String),

    /// No double with the given name is registered.
    #[error("No double named '{0}' is registered")]
    UnknownDouble(String),

    /// Configuration could not be deserialized.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(String),
}

impl DoubleError {
    /// Returns the doubled function the error refers to, if any.
    #[must_use]
    pub fn function(&self) -> Option<&str> {
        match self {
            Self::CallIndexOutOfRange { function, .. }
            | Self::ComparatorIndexOutOfRange { function, .. }
            | Self::ArityMismatch { function, .. } => Some(function),
            Self::DuplicateDouble(name) | Self::UnknownDouble(name) => Some(name),
            Self::Serialization(_) | Self::Logging(_) => None,
        }
    }
}
