//! Shared error-collection sink.

use crate::diagnostic::{Diagnostic, Severity};
use parking_lot::Mutex;
use std::sync::Arc;

/// Thread-safe collection point for diagnostics.
///
/// Cheap to clone; clones share the same underlying buffer, so one sink can
/// serve many concurrently parsed files.
#[derive(Clone, Default)]
pub struct DiagnosticSink {
    diagnostics: Arc<Mutex<Vec<Diagnostic>>>,
}

impl DiagnosticSink {
    pub fn new() -> DiagnosticSink {
        DiagnosticSink::default()
    }

    pub fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics.lock().push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.lock().is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.lock().len()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .lock()
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Snapshot of everything reported so far.
    pub fn snapshot(&self) -> Vec<Diagnostic> {
        self.diagnostics.lock().clone()
    }

    /// Remove and return everything reported so far.
    pub fn drain(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_buffer() {
        let sink = DiagnosticSink::new();
        let clone = sink.clone();
        clone.report(Diagnostic::warning("w"));
        assert_eq!(sink.len(), 1);
        assert!(!sink.has_errors());
    }

    #[test]
    fn drain_empties_the_sink() {
        let sink = DiagnosticSink::new();
        sink.report(Diagnostic::error("e"));
        assert!(sink.has_errors());
        assert_eq!(sink.drain().len(), 1);
        assert!(sink.is_empty());
    }
}
