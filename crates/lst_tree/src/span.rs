//! Byte spans into original source text.

use std::fmt;

/// Half-open byte range into a source file.
///
/// Host front-ends sometimes report synthetic nodes with no real source
/// position; those use [`Span::SYNTHETIC`] and sort after all real spans.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Marker span for compiler-inserted nodes with no source position.
    pub const SYNTHETIC: Span = Span {
        start: u32::MAX,
        end: u32::MAX,
    };

    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// True if this span does not correspond to any real source text.
    #[inline]
    pub const fn is_synthetic(&self) -> bool {
        self.start == u32::MAX
    }

    /// Length of the span in bytes. Zero for synthetic spans.
    #[inline]
    pub const fn len(&self) -> u32 {
        if self.is_synthetic() {
            0
        } else {
            self.end - self.start
        }
    }

    /// True if the span covers no bytes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The spanned text within `source`.
    ///
    /// Returns an empty string for synthetic or out-of-bounds spans rather
    /// than panicking; callers treat both as "no text here".
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        if self.is_synthetic() {
            return "";
        }
        source
            .get(self.start as usize..self.end as usize)
            .unwrap_or("")
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_synthetic() {
            write!(f, "Span(synthetic)")
        } else {
            write!(f, "Span({}..{})", self.start, self.end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_of_real_span() {
        let src = "package demo;";
        assert_eq!(Span::new(0, 7).text(src), "package");
    }

    #[test]
    fn synthetic_span_has_no_text() {
        assert_eq!(Span::SYNTHETIC.text("anything"), "");
        assert!(Span::SYNTHETIC.is_empty());
    }

    #[test]
    fn out_of_bounds_span_is_empty_text() {
        assert_eq!(Span::new(3, 99).text("ab"), "");
    }
}
