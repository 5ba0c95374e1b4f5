//! Diagnostic values.

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    /// The parse continued; the produced tree is usable but degraded
    /// (erroneous node, synthetic type descriptor, host complaint).
    Warning,
    /// The parse of one declaration was abandoned and replaced by an
    /// erroneous node. Never aborts the run.
    Error,
}

/// One enclosing node kind at the time a problem was reported.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ContextFrame {
    /// Node kind name, e.g. `ClassDecl` or `MethodInvocation`.
    pub node_kind: &'static str,
    /// One-based source line the mapper's cursor was on.
    pub line: u32,
}

/// A non-fatal problem encountered while producing an LST.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// One-based line of the failure site, when known.
    pub line: Option<u32>,
    /// Enclosing node kinds, outermost first.
    pub context: Vec<ContextFrame>,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>) -> Diagnostic {
        Diagnostic {
            severity: Severity::Warning,
            message: message.into(),
            line: None,
            context: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Diagnostic {
        Diagnostic {
            severity: Severity::Error,
            message: message.into(),
            line: None,
            context: Vec::new(),
        }
    }

    pub fn at_line(mut self, line: u32) -> Diagnostic {
        self.line = Some(line);
        self
    }

    pub fn with_context(mut self, context: Vec<ContextFrame>) -> Diagnostic {
        self.context = context;
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Warning => write!(f, "warning: {}", self.message)?,
            Severity::Error => write!(f, "error: {}", self.message)?,
        }
        if let Some(line) = self.line {
            write!(f, " (line {line})")?;
        }
        if !self.context.is_empty() {
            write!(f, " in ")?;
            for (i, frame) in self.context.iter().enumerate() {
                if i > 0 {
                    write!(f, " > ")?;
                }
                write!(f, "{}@{}", frame.node_kind, frame.line)?;
            }
        }
        Ok(())
    }
}

/// Strip pipeline-internal frames from a panic/backtrace-style message so
/// user-facing warnings name the failure, not the mapper's call stack.
pub fn sanitize_message(message: &str) -> String {
    message
        .lines()
        .filter(|line| {
            let trimmed = line.trim_start();
            !(trimmed.starts_with("at lst_parse::")
                || trimmed.starts_with("at lst_types::")
                || trimmed.starts_with("at lst_tree::"))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_includes_context_chain() {
        let diagnostic = Diagnostic::error("unexpected token")
            .at_line(7)
            .with_context(vec![
                ContextFrame {
                    node_kind: "CompilationUnit",
                    line: 1,
                },
                ContextFrame {
                    node_kind: "ClassDecl",
                    line: 5,
                },
            ]);
        assert_eq!(
            diagnostic.to_string(),
            "error: unexpected token (line 7) in CompilationUnit@1 > ClassDecl@5"
        );
    }

    #[test]
    fn sanitize_drops_internal_frames() {
        let raw = "conversion failed\n  at lst_parse::java::map_class\n  at caller::site";
        assert_eq!(
            sanitize_message(raw),
            "conversion failed\n  at caller::site"
        );
    }
}
