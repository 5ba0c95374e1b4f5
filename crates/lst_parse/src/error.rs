//! Mapping failure values.
//!
//! A [`MapError`] aborts the conversion of one declaration, never the whole
//! file: the unit mapper catches it, reports a diagnostic with the enclosing
//! node-kind chain, and substitutes an erroneous node covering the
//! declaration's exact source text.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The source text at the cursor did not hold the token the host AST
    /// implies should be there.
    #[error("expected `{expected}` at offset {at}")]
    Expected { expected: String, at: usize },
    /// The host AST node has a shape the mapper cannot express.
    #[error("unsupported host node: {0}")]
    UnsupportedNode(String),
}

impl MapError {
    pub fn expected(expected: impl Into<String>, at: usize) -> MapError {
        MapError::Expected {
            expected: expected.into(),
            at,
        }
    }
}
