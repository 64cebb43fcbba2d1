//! Diagnostic sink trait and implementations.

use parking_lot::RwLock;
use tracing::{debug, error, info, trace, warn, Level};

use super::{Diagnostic, DiagnosticCode};

/// Trait for sinks that receive verification diagnostics.
///
/// Emission is best-effort: implementations must never panic or report
/// failures back to the double.
pub trait DiagnosticSink: Send + Sync {
    /// Emits a diagnostic.
    fn emit(&self, diagnostic: &Diagnostic);
}

/// A sink that discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpDiagnosticSink;

impl DiagnosticSink for NoOpDiagnosticSink {
    fn emit(&self, _diagnostic: &Diagnostic) {}
}

/// A sink that logs diagnostics through `tracing`.
///
/// This is the sink every double starts with.
#[derive(Debug, Clone)]
pub struct LoggingDiagnosticSink {
    level: Level,
}

impl Default for LoggingDiagnosticSink {
    fn default() -> Self {
        Self { level: Level::WARN }
    }
}

impl LoggingDiagnosticSink {
    /// Creates a logging sink with the specified level.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    /// Returns the log level.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }
}

impl DiagnosticSink for LoggingDiagnosticSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        let function = diagnostic.function.as_str();
        let kind = diagnostic.kind.label();
        let message = diagnostic.message.as_str();
        match self.level {
            Level::ERROR => error!(function, kind, "{}", message),
            Level::WARN => warn!(function, kind, "{}", message),
            Level::INFO => info!(function, kind, "{}", message),
            Level::DEBUG => debug!(function, kind, "{}", message),
            _ => trace!(function, kind, "{}", message),
        }
    }
}

/// A sink that keeps every diagnostic in memory, for tests.
#[derive(Debug, Default)]
pub struct CollectingDiagnosticSink {
    diagnostics: RwLock<Vec<Diagnostic>>,
}

impl CollectingDiagnosticSink {
    /// Creates an empty collecting sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every collected diagnostic.
    #[must_use]
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.read().clone()
    }

    /// Returns the collected messages.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics
            .read()
            .iter()
            .map(|d| d.message.clone())
            .collect()
    }

    /// Returns diagnostics matching a predicate on their code.
    #[must_use]
    pub fn with_code(&self, predicate: impl Fn(&DiagnosticCode) -> bool) -> Vec<Diagnostic> {
        self.diagnostics
            .read()
            .iter()
            .filter(|d| predicate(&d.code))
            .cloned()
            .collect()
    }

    /// Returns the number of collected diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.diagnostics.read().len()
    }

    /// Returns true if nothing has been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.read().is_empty()
    }

    /// Clears all collected diagnostics.
    pub fn clear(&self) {
        self.diagnostics.write().clear();
    }
}

impl DiagnosticSink for CollectingDiagnosticSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        self.diagnostics.write().push(diagnostic.clone());
    }
}
