//! # Testdouble
//!
//! Test doubles for functions and dependencies that the test routes calls to
//! by hand.
//!
//! Testdouble provides:
//!
//! - **Mocks**: check the arguments of the latest call with pluggable comparators
//! - **Spies**: keep the full argument history of every call
//! - **Stubs**: return canned values, repeating the last one
//! - **Input doubles**: feed scripted inputs that wrap around
//! - **Output doubles**: capture text for later assertions
//! - **Inject doubles**: stand in for a named dependency
//!
//! ## Quick Start
//!
//! ```rust
//! use testdouble::prelude::*;
//!
//! let mut mock = Mock::new("add", 2);
//! mock.set_comparator(0, i32_eq).unwrap();
//! mock.set_comparator(1, i32_eq).unwrap();
//! mock.set_expected_arguments([Arg::i32(2), Arg::i32(3)]).unwrap();
//! mock.set_return_values([Arg::i32(5)]);
//!
//! // The code under test calls the double instead of the real function.
//! let sum = mock.call([Arg::i32(2), Arg::i32(3)]);
//!
//! assert_eq!(sum.and_then(|v| v.as_i32()), Some(5));
//! assert!(mock.verify());
//! assert!(mock.verify_call_count(1));
//! mock.erase();
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod config;
pub mod core;
pub mod diagnostics;
pub mod doubles;
pub mod errors;
pub mod registry;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{DiagnosticsConfig, LogFormat};
    pub use crate::core::{
        eq_as, i32_eq, json_eq, ptr_eq, text_eq, Arg, Comparator, DoubleKind, DoubleReport,
        RecordsCalls, SuppliesValues, TestDouble,
    };
    pub use crate::diagnostics::{
        CollectingDiagnosticSink, Diagnostic, DiagnosticCode, DiagnosticSink,
        LoggingDiagnosticSink, NoOpDiagnosticSink,
    };
    pub use crate::doubles::{InjectDouble, InputDouble, Mock, OutputDouble, Spy, Stub};
    pub use crate::errors::DoubleError;
    pub use crate::registry::DoubleRegistry;
}
