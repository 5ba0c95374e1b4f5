//! Lossless semantic tree production.
//!
//! This crate turns a host front-end's AST plus the original source text
//! into an LST: a [`SourceCursor`] consumes the text in lockstep with a
//! source-ordered walk of the host nodes, attaching every gap between
//! tokens to the tree so printing reproduces the input byte for byte.
//!
//! The host AST arrives through the closed facade in [`host`]; types ride
//! along as opaque handles resolved through a
//! [`TypeOracle`](lst_types::TypeOracle). One mapper serves one file;
//! parallel parses share only the type cache and the diagnostic sink, both
//! of which are concurrency-safe.
//!
//! ```no_run
//! use lst_diagnostic::DiagnosticSink;
//! use lst_parse::host::HostUnit;
//! use lst_types::{SemanticOracle, TypeCache};
//! use std::sync::Arc;
//!
//! let source = "class A {}";
//! let unit = HostUnit::default(); // supplied by a front-end integration
//! let oracle = SemanticOracle::new(Arc::new(TypeCache::new()));
//! let sink = DiagnosticSink::new();
//! let tree = lst_parse::parse_java(source, &unit, &oracle, &sink);
//! assert_eq!(tree.statements.len(), 0);
//! ```

pub mod cursor;
pub mod error;
pub mod host;

mod groovy;
mod mapper;

pub use cursor::SourceCursor;
pub use error::MapError;
pub use groovy::GroovyDialect;
pub use mapper::{DialectOps, JavaDialect, TreeMapper};

use lst_diagnostic::DiagnosticSink;
use lst_tree::CompilationUnit;
use lst_types::TypeOracle;

use crate::host::HostUnit;

/// Map one host-parsed file of the statically-typed grammar.
pub fn parse_java(
    source: &str,
    unit: &HostUnit,
    oracle: &dyn TypeOracle,
    sink: &DiagnosticSink,
) -> CompilationUnit {
    TreeMapper::<JavaDialect>::new(source, oracle, sink).map_unit(unit)
}

/// Map one host-parsed file of the scripting dialect.
pub fn parse_groovy(
    source: &str,
    unit: &HostUnit,
    oracle: &dyn TypeOracle,
    sink: &DiagnosticSink,
) -> CompilationUnit {
    TreeMapper::<GroovyDialect>::new(source, oracle, sink).map_unit(unit)
}
