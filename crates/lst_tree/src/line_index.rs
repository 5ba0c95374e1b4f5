//! Byte offset to (line, column) conversion.
//!
//! The mapping visitors sort top-level declarations by source position, and
//! diagnostics report line numbers; both go through a [`LineIndex`] built
//! once per file.

use crate::span::Span;

/// One-based line and column position.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

/// Precomputed table of line start offsets for a source file.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset of the first character of each line. Always starts with 0.
    line_starts: Vec<u32>,
}

impl LineIndex {
    /// Build the index by scanning for newlines once.
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, b) in source.bytes().enumerate() {
            if b == b'\n' {
                // Truncation is safe: spans are u32 and the parser refuses
                // sources longer than u32::MAX bytes upstream.
                line_starts.push((i + 1) as u32);
            }
        }
        LineIndex { line_starts }
    }

    /// Convert a byte offset to a one-based (line, column) pair.
    ///
    /// Columns count bytes from the line start, which matches how host
    /// front-ends report positions for the ASCII-dominated sources this
    /// pipeline sees. Offsets past the end of input land on the last line.
    pub fn line_col(&self, offset: u32) -> LineCol {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        LineCol {
            line: (line + 1) as u32,
            col: offset - self.line_starts[line] + 1,
        }
    }

    /// Position of a span's first byte; synthetic spans sort after all real
    /// positions so compiler-inserted declarations come last.
    pub fn sort_key(&self, span: Span) -> LineCol {
        if span.is_synthetic() {
            LineCol {
                line: u32::MAX,
                col: u32::MAX,
            }
        } else {
            self.line_col(span.start)
        }
    }

    /// Number of lines in the indexed source.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
