//! Verification diagnostics.
//!
//! Failed verifications return `false` and describe the failure to the
//! double's [`DiagnosticSink`]. The default sink logs through `tracing`.

mod diagnostic;
mod sink;

pub use diagnostic::{Diagnostic, DiagnosticCode};
pub use sink::{
    CollectingDiagnosticSink, DiagnosticSink, LoggingDiagnosticSink, NoOpDiagnosticSink,
};
