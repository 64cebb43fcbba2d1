//! Inject double: a replacement object for a named dependency.

use std::sync::Arc;

use crate::core::{Arg, DoubleCore, DoubleKind, SuppliesValues, TestDouble};
use crate::diagnostics::DiagnosticSink;

/// A double standing in for an injected dependency.
///
/// Every lookup hands back the same replacement handle and is counted.
#[derive(Debug, Clone)]
pub struct InjectDouble {
    core: DoubleCore,
    replacement: Arg,
}

impl InjectDouble {
    /// Creates a double that resolves `dependency` to `replacement`.
    #[must_use]
    pub fn new(dependency: &str, replacement: Arg) -> Self {
        Self {
            core: DoubleCore::new(dependency, DoubleKind::Inject),
            replacement,
        }
    }

    /// Routes diagnostics to `sink`.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.core.set_sink(sink);
        self
    }

    /// Returns the replacement object.
    pub fn replacement(&mut self) -> Arg {
        self.core.tick();
        self.replacement.clone()
    }

    /// Returns the replacement object without counting a lookup.
    #[must_use]
    pub fn peek(&self) -> &Arg {
        &self.replacement
    }

    /// Swaps in a new replacement object.
    pub fn set_replacement(&mut self, replacement: Arg) {
        self.replacement = replacement;
    }
}

impl TestDouble for InjectDouble {
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

impl SuppliesValues for InjectDouble {
    fn supply(&mut self) -> Option<Arg> {
        Some(self.replacement())
    }
}
