//! Diagnostics and error collection for the LST pipeline.
//!
//! Nothing in the parsing core is fatal: per-declaration conversion
//! failures, host-frontend complaints, and type-resolution fallbacks all
//! become [`Diagnostic`] values reported to a shared [`DiagnosticSink`].
//! A diagnostic carries the chain of enclosing node kinds the mapper was
//! inside when the problem occurred, so one bad declaration in a large file
//! is still locatable.

mod diagnostic;
mod sink;

pub use diagnostic::{sanitize_message, ContextFrame, Diagnostic, Severity};
pub use sink::DiagnosticSink;
