//! Tree-mapping visitor: host AST + source text -> lossless semantic tree.
//!
//! The mapper re-walks the host front-end's AST in source order while a
//! [`SourceCursor`] consumes the original text, capturing every gap between
//! tokens as a [`Space`]. One mapper instance serves exactly one file; the
//! shared type cache behind the oracle is the only state that outlives it.
//!
//! Dialect differences are confined to [`DialectOps`]: the scripting dialect
//! overrides invocation and lambda mapping (command calls, closures) and
//! inherits everything else from the shared grammar's default methods.
//!
//! Failure is scoped to one top-level declaration. A [`MapError`] unwinds to
//! [`TreeMapper::map_unit`], which reports a diagnostic carrying the chain
//! of enclosing node kinds and substitutes an erroneous node holding the
//! declaration's exact source text, so the rest of the file still converts
//! and printing stays byte-exact.

mod decl;
mod expr;
mod reorder;
mod stmt;


use std::marker::PhantomData;

use lst_diagnostic::{sanitize_message, ContextFrame, Diagnostic, DiagnosticSink};
use lst_tree::{
    CompilationUnit, Dialect, Erroneous, Expression, LineIndex, Marker, Markers, RightPadded, Space,
    Span, Statement, TreeId,
};
use lst_types::TypeOracle;
use tracing::debug;

use crate::cursor::SourceCursor;
use crate::error::MapError;
use crate::host::{HostCall, HostClassDecl, HostImport, HostLambda, HostPackage, HostStatement,
    HostUnit};

/// Per-dialect mapping overrides.
///
/// The shared grammar's behavior lives in the default methods; a dialect
/// replaces only the operations whose source shape differs. This keeps the
/// override surface explicit and testable on its own.
pub trait DialectOps: Sized {
    const DIALECT: Dialect;

    fn map_invocation(
        mapper: &mut TreeMapper<'_, Self>,
        call: &HostCall,
    ) -> Result<Expression, MapError> {
        mapper.map_invocation_base(call)
    }

    fn map_lambda(
        mapper: &mut TreeMapper<'_, Self>,
        lambda: &HostLambda,
    ) -> Result<Expression, MapError> {
        mapper.map_lambda_base(lambda)
    }
}

/// The shared statically-typed grammar with no overrides.
pub struct JavaDialect;

impl DialectOps for JavaDialect {
    const DIALECT: Dialect = Dialect::Java;
}

/// Stateful visitor over one source file. Construct one per file; not
/// reusable across files or threads.
pub struct TreeMapper<'a, D: DialectOps> {
    pub(crate) cursor: SourceCursor<'a>,
    pub(crate) line_index: LineIndex,
    pub(crate) oracle: &'a dyn TypeOracle,
    pub(crate) sink: DiagnosticSink,
    pub(crate) context: Vec<ContextFrame>,
    _dialect: PhantomData<D>,
}

/// One entry of the source-ordered top-level declaration list.
enum TopLevel<'h> {
    Package(&'h HostPackage),
    Import(&'h HostImport),
    Class(&'h HostClassDecl),
    Stmt(&'h HostStatement),
}

impl TopLevel<'_> {
    fn span(&self) -> Span {
        match self {
            TopLevel::Package(p) => p.span,
            TopLevel::Import(i) => i.span,
            TopLevel::Class(c) => c.span,
            TopLevel::Stmt(s) => s.span(),
        }
    }
}

impl<'a, D: DialectOps> TreeMapper<'a, D> {
    pub fn new(source: &'a str, oracle: &'a dyn TypeOracle, sink: &DiagnosticSink) -> Self {
        TreeMapper {
            cursor: SourceCursor::new(source),
            line_index: LineIndex::new(source),
            oracle,
            sink: sink.clone(),
            context: Vec::new(),
            _dialect: PhantomData,
        }
    }

    /// Convert one host-parsed file into its compilation unit.
    pub fn map_unit(&mut self, unit: &HostUnit) -> CompilationUnit {
        self.push_frame("CompilationUnit");

        // Host ASTs keep packages, imports, classes and loose statements in
        // separate canonical lists; interleave them back into source order.
        // The sort is stable, so entries sharing a position keep discovery
        // order and synthetic spans sort last.
        let mut order: Vec<TopLevel<'_>> = Vec::new();
        order.extend(unit.package.iter().map(TopLevel::Package));
        order.extend(unit.imports.iter().map(TopLevel::Import));
        order.extend(unit.classes.iter().map(TopLevel::Class));
        order.extend(unit.statements.iter().map(TopLevel::Stmt));
        order.sort_by_key(|decl| self.line_index.sort_key(decl.span()));

        let mut statements = Vec::with_capacity(order.len());
        for decl in &order {
            let checkpoint = self.cursor.checkpoint();
            match self.map_top_level(decl) {
                Ok(statement) => statements.push(self.statement_padding(statement)),
                Err(error) => {
                    self.sink.report(
                        Diagnostic::error(error.to_string())
                            .at_line(self.line_at(checkpoint))
                            .with_context(self.context.clone()),
                    );
                    // Frames pushed by the failed declaration are abandoned
                    // along with it.
                    self.context.truncate(1);
                    self.cursor.restore(checkpoint);
                    let end = if decl.span().is_synthetic() {
                        checkpoint
                    } else {
                        decl.span().end as usize
                    };
                    let text = self.cursor.take_until(end);
                    statements.push(RightPadded::new(
                        Statement::Erroneous(Erroneous::new(Space::empty(), text)),
                        Space::empty(),
                    ));
                }
            }
        }

        let eof = Space::parse(self.cursor.take_rest());
        let mut markers = Markers::new();
        for warning in &unit.warnings {
            markers.add(Marker::ParseWarning {
                message: sanitize_message(warning),
            });
        }

        self.pop_frame();
        debug!(
            dialect = ?D::DIALECT,
            statements = statements.len(),
            "mapped compilation unit"
        );
        CompilationUnit {
            id: TreeId::random(),
            prefix: Space::empty(),
            markers,
            dialect: D::DIALECT,
            statements,
            eof,
        }
    }

    fn map_top_level(&mut self, decl: &TopLevel<'_>) -> Result<Statement, MapError> {
        match decl {
            TopLevel::Package(p) => Ok(Statement::Package(Box::new(self.map_package(p)?))),
            TopLevel::Import(i) => Ok(Statement::Import(Box::new(self.map_import(i)?))),
            TopLevel::Class(c) => Ok(Statement::ClassDecl(Box::new(self.map_class(c)?))),
            TopLevel::Stmt(s) => self.map_statement(s),
        }
    }

    /// Wrap a mapped statement, probing for a trailing `;`. The semicolon is
    /// recorded as a marker on the padding; without it none is printed.
    pub(crate) fn statement_padding(&mut self, statement: Statement) -> RightPadded<Statement> {
        let checkpoint = self.cursor.checkpoint();
        let after = self.cursor.whitespace();
        if self.cursor.skip(";").is_some() {
            RightPadded::with_markers(statement, after, Markers::with(Marker::Semicolon))
        } else {
            self.cursor.restore(checkpoint);
            RightPadded::new(statement, Space::empty())
        }
    }

    /// Consume `token` or fail the current declaration.
    pub(crate) fn expect(&mut self, token: &str) -> Result<(), MapError> {
        let at = self.cursor.position();
        match self.cursor.skip(token) {
            Some(_) => Ok(()),
            None => Err(MapError::expected(token, at)),
        }
    }

    pub(crate) fn line_at(&self, offset: usize) -> u32 {
        self.line_index.line_col(offset as u32).line
    }

    pub(crate) fn push_frame(&mut self, node_kind: &'static str) {
        let line = self.line_at(self.cursor.position());
        self.context.push(ContextFrame { node_kind, line });
    }

    pub(crate) fn pop_frame(&mut self) {
        self.context.pop();
    }

    /// Capture a host-reported unparseable region verbatim.
    pub(crate) fn map_erroneous(&mut self, span: Span) -> Erroneous {
        let prefix = self.cursor.whitespace();
        let line = self.line_at(self.cursor.position());
        let end = if span.is_synthetic() {
            self.cursor.position()
        } else {
            span.end as usize
        };
        let text = self.cursor.take_until(end);
        self.sink.report(
            Diagnostic::warning("unparseable source preserved verbatim")
                .at_line(line)
                .with_context(self.context.clone()),
        );
        Erroneous::new(prefix, text)
    }
}
