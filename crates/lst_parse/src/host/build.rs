//! Span-locating helpers for constructing host facade nodes.
//!
//! Front-end integrations (and this crate's own tests) build [`HostUnit`]
//! values against real source text. A [`SpanFinder`] locates each token's
//! byte span by scanning forward through the text in source order, so the
//! builder code reads like the source it describes and never hand-computes
//! offsets.

use super::{HostExpr, HostLiteral};
use lst_tree::Span;

/// Sequential token locator over one source text.
///
/// Each lookup starts where the previous one ended, so repeated tokens
/// resolve to successive occurrences. Lookup of a token that does not occur
/// after the watermark is builder misuse and panics with the token text.
pub struct SpanFinder<'a> {
    source: &'a str,
    from: usize,
}

impl<'a> SpanFinder<'a> {
    pub fn new(source: &'a str) -> SpanFinder<'a> {
        SpanFinder { source, from: 0 }
    }

    /// Span of the next occurrence of `token`, advancing the watermark past
    /// it.
    pub fn span(&mut self, token: &str) -> Span {
        let at = self.source[self.from..]
            .find(token)
            .unwrap_or_else(|| panic!("token {token:?} not found after offset {}", self.from));
        let start = self.from + at;
        let end = start + token.len();
        self.from = end;
        Span::new(start as u32, end as u32)
    }

    /// Span of the next occurrence without moving the watermark.
    pub fn peek(&self, token: &str) -> Option<Span> {
        let at = self.source[self.from..].find(token)?;
        let start = self.from + at;
        Some(Span::new(start as u32, (start + token.len()) as u32))
    }

    /// Reset the watermark to the start of the text.
    pub fn rewind(&mut self) {
        self.from = 0;
    }
}

/// An identifier expression located at its next occurrence.
pub fn ident(finder: &mut SpanFinder<'_>, name: &str) -> HostExpr {
    HostExpr::Ident {
        span: finder.span(name),
        name: name.to_string(),
        ty: None,
    }
}

/// An integer literal located by its exact source token.
pub fn int(finder: &mut SpanFinder<'_>, token: &str, value: i64) -> HostExpr {
    HostExpr::Literal {
        span: finder.span(token),
        value: HostLiteral::Int(value),
        ty: None,
    }
}

/// A string literal located by its exact quoted source token.
pub fn str_lit(finder: &mut SpanFinder<'_>, token: &str, value: &str) -> HostExpr {
    HostExpr::Literal {
        span: finder.span(token),
        value: HostLiteral::Str(value.to_string()),
        ty: None,
    }
}
