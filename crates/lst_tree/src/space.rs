//! Whitespace-and-comments values.
//!
//! A [`Space`] is the text between two meaningful tokens: plain whitespace
//! followed by any number of comments, each comment keeping the whitespace
//! that trails it. Spaces are attached as node prefixes and inside padding
//! wrappers; printing one reproduces its bytes exactly.


/// Comment delimiter style.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CommentKind {
    /// `// ...` to end of line. The terminating newline is part of the
    /// comment's suffix, not its text.
    Line,
    /// `/* ... */`, possibly spanning lines.
    Block,
}

/// A single comment with the whitespace that follows it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Comment {
    pub kind: CommentKind,
    /// Text between the delimiters, excluding the delimiters themselves.
    pub text: String,
    /// Whitespace after the comment, up to the next comment or token.
    pub suffix: String,
}

impl Comment {
    pub fn new(kind: CommentKind, text: impl Into<String>, suffix: impl Into<String>) -> Self {
        Comment {
            kind,
            text: text.into(),
            suffix: suffix.into(),
        }
    }

    fn print_into(&self, out: &mut String) {
        match self.kind {
            CommentKind::Line => {
                out.push_str("//");
                out.push_str(&self.text);
            }
            CommentKind::Block => {
                out.push_str("/*");
                out.push_str(&self.text);
                out.push_str("*/");
            }
        }
        out.push_str(&self.suffix);
    }
}

/// Captured formatting between two tokens.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Space {
    /// Whitespace before the first comment (or all of the text when there
    /// are no comments).
    pub whitespace: String,
    pub comments: Vec<Comment>,
}

impl Space {
    /// The empty space, used for synthetic nodes and failed probes.
    pub fn empty() -> Space {
        Space::default()
    }

    /// A space holding plain whitespace only.
    pub fn whitespace(ws: impl Into<String>) -> Space {
        Space {
            whitespace: ws.into(),
            comments: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.whitespace.is_empty() && self.comments.is_empty()
    }

    /// Structure raw gap text into whitespace plus comment values.
    ///
    /// Any text that is neither whitespace nor a comment is preserved
    /// verbatim in the nearest whitespace/suffix run, so parsing never loses
    /// bytes even on input the cursor should not have handed us.
    pub fn parse(raw: &str) -> Space {
        let bytes = raw.as_bytes();
        let mut space = Space::empty();
        let mut gap_start = 0;
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == b'/' && i + 1 < bytes.len() && bytes[i + 1] == b'/' {
                let gap = &raw[gap_start..i];
                let text_start = i + 2;
                let text_end = raw[text_start..]
                    .find('\n')
                    .map_or(raw.len(), |n| text_start + n);
                space.push_gap(gap);
                space.comments.push(Comment::new(
                    CommentKind::Line,
                    &raw[text_start..text_end],
                    "",
                ));
                i = text_end;
                gap_start = i;
            } else if bytes[i] == b'/' && i + 1 < bytes.len() && bytes[i + 1] == b'*' {
                let gap = &raw[gap_start..i];
                let text_start = i + 2;
                let text_end = raw[text_start..]
                    .find("*/")
                    .map_or(raw.len(), |n| text_start + n);
                space.push_gap(gap);
                space.comments.push(Comment::new(
                    CommentKind::Block,
                    &raw[text_start..text_end],
                    "",
                ));
                i = (text_end + 2).min(raw.len());
                gap_start = i;
            } else {
                i += 1;
            }
        }
        space.push_gap(&raw[gap_start..]);
        space
    }

    fn push_gap(&mut self, gap: &str) {
        if gap.is_empty() {
            return;
        }
        match self.comments.last_mut() {
            Some(last) => last.suffix.push_str(gap),
            None => self.whitespace.push_str(gap),
        }
    }

    /// Append this space's exact bytes to `out`.
    pub fn print_into(&self, out: &mut String) {
        out.push_str(&self.whitespace);
        for comment in &self.comments {
            comment.print_into(out);
        }
    }

    /// The exact bytes this space holds.
    pub fn print(&self) -> String {
        let mut out = String::new();
        self.print_into(&mut out);
        out
    }
}
