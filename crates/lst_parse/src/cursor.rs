//! Comment-transparent scanning over whole-file source text.
//!
//! The mapping visitors walk a host AST in source order while a
//! [`SourceCursor`] tracks how far into the original text the walk has
//! consumed. Every byte between the cursor and the next meaningful token is
//! captured as a [`Space`], so nothing is lost between tokens. Optional
//! constructs are detected by probe-and-rewind ([`SourceCursor::checkpoint`]
//! / [`SourceCursor::restore`]) rather than by backtracking on failure.

#[cfg(test)]
mod tests;

use lst_tree::Space;

/// Scanner state inside `advance_to` and `whitespace`.
#[derive(Copy, Clone, Eq, PartialEq)]
enum ScanState {
    Code,
    LineComment,
    BlockComment,
}

/// Forward-only cursor over one source file.
///
/// Offsets are byte positions; all operations keep the cursor on a UTF-8
/// character boundary. The cursor is created fresh per file and discarded
/// with the visitor that owns it.
pub struct SourceCursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> SourceCursor<'a> {
    pub fn new(source: &'a str) -> SourceCursor<'a> {
        SourceCursor { source, pos: 0 }
    }

    /// The whole source text this cursor scans.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Current byte offset.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Unconsumed remainder of the source.
    pub fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Does the unconsumed text start with `token`?
    pub fn starts_with(&self, token: &str) -> bool {
        self.rest().starts_with(token)
    }

    /// Snapshot the current offset for a probe.
    pub fn checkpoint(&self) -> usize {
        self.pos
    }

    /// Rewind (or fast-forward) to a previously valid offset.
    pub fn restore(&mut self, checkpoint: usize) {
        debug_assert!(checkpoint <= self.source.len());
        self.pos = checkpoint;
    }

    /// If the cursor points at `token`, consume it and return it; otherwise
    /// leave the cursor unchanged and return `None`.
    pub fn skip(&mut self, token: &str) -> Option<&'a str> {
        if self.starts_with(token) {
            let consumed = &self.source[self.pos..self.pos + token.len()];
            self.pos += token.len();
            Some(consumed)
        } else {
            None
        }
    }

    /// Consume the maximal run of whitespace and comments at the cursor.
    pub fn whitespace(&mut self) -> Space {
        let start = self.pos;
        let end = self.scan(start, |_| false);
        self.pos = end;
        Space::parse(&self.source[start..end])
    }

    /// Scan forward to `delimiter`, treating comments as transparent, and
    /// consume both the gap and the delimiter. The gap is returned as a
    /// structured [`Space`].
    ///
    /// If `stop` is seen outside a comment before the delimiter, or the end
    /// of input is reached, the cursor does not move and an empty space is
    /// returned; callers use that to detect optional constructs.
    pub fn advance_to(&mut self, delimiter: &str, stop: Option<char>) -> Space {
        debug_assert!(!delimiter.is_empty());
        let mut i = self.pos;
        let bytes = self.source.as_bytes();
        let mut state = ScanState::Code;
        while i < bytes.len() {
            match state {
                ScanState::Code => {
                    if self.source[i..].starts_with(delimiter) {
                        let space = Space::parse(&self.source[self.pos..i]);
                        self.pos = i + delimiter.len();
                        return space;
                    }
                    if let Some(stop) = stop {
                        if self.source[i..].starts_with(stop) {
                            return Space::empty();
                        }
                    }
                    if self.source[i..].starts_with("//") {
                        state = ScanState::LineComment;
                        i += 2;
                    } else if self.source[i..].starts_with("/*") {
                        state = ScanState::BlockComment;
                        i += 2;
                    } else {
                        i += next_char_len(self.source, i);
                    }
                }
                ScanState::LineComment => {
                    if bytes[i] == b'\n' {
                        state = ScanState::Code;
                    }
                    i += next_char_len(self.source, i);
                }
                ScanState::BlockComment => {
                    if self.source[i..].starts_with("*/") {
                        state = ScanState::Code;
                        i += 2;
                    } else {
                        i += next_char_len(self.source, i);
                    }
                }
            }
        }
        Space::empty()
    }

    /// Consume everything from the cursor up to `end` verbatim.
    ///
    /// Used for erroneous-fragment capture; the returned text is exactly the
    /// skipped bytes. `end` values before the cursor yield an empty slice.
    pub fn take_until(&mut self, end: usize) -> &'a str {
        let end = end.clamp(self.pos, self.source.len());
        let taken = &self.source[self.pos..end];
        self.pos = end;
        taken
    }

    /// Consume the remainder of the file.
    pub fn take_rest(&mut self) -> &'a str {
        self.take_until(self.source.len())
    }

    // Shared whitespace/comment scanner. `boundary` lets `whitespace`
    // callers stay simple while keeping one state machine.
    fn scan(&self, start: usize, boundary: impl Fn(char) -> bool) -> usize {
        let mut i = start;
        let bytes = self.source.as_bytes();
        let mut state = ScanState::Code;
        while i < bytes.len() {
            match state {
                ScanState::Code => {
                    if self.source[i..].starts_with("//") {
                        state = ScanState::LineComment;
                        i += 2;
                        continue;
                    }
                    if self.source[i..].starts_with("/*") {
                        state = ScanState::BlockComment;
                        i += 2;
                        continue;
                    }
                    let c = char_at(self.source, i);
                    if c.is_whitespace() && !boundary(c) {
                        i += c.len_utf8();
                    } else {
                        return i;
                    }
                }
                ScanState::LineComment => {
                    if bytes[i] == b'\n' {
                        state = ScanState::Code;
                    }
                    i += next_char_len(self.source, i);
                }
                ScanState::BlockComment => {
                    if self.source[i..].starts_with("*/") {
                        state = ScanState::Code;
                        i += 2;
                    } else {
                        i += next_char_len(self.source, i);
                    }
                }
            }
        }
        i
    }
}

fn char_at(source: &str, i: usize) -> char {
    source[i..].chars().next().unwrap_or('\0')
}

fn next_char_len(source: &str, i: usize) -> usize {
    source[i..].chars().next().map_or(1, char::len_utf8)
}
