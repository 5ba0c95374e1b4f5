//! Textual parenthesis-attribution heuristics.
//!
//! The scripting dialect's host AST does not say whether parentheses in the
//! text belong to a call's argument list, to an argument expression, or wrap
//! the whole call; its spans start at the outermost wrapping paren. These
//! scans recover that attribution from the source text itself. Known
//! caveat: adversarially nested parentheses re-scan the same substring per
//! nesting level, which is quadratic in depth but never incorrect.

use regex::Regex;
use std::sync::OnceLock;

/// Innermost fully-balanced parenthesis group (no nested parens inside).
fn innermost_group() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\([^()]*\)").expect("literal pattern"))
}

/// How many parenthesis layers wrap the whole invocation in `snippet`.
///
/// `snippet` runs from the cursor (at the first candidate `(`) to the end
/// of the call's span. Argument-level groups (innermost balanced groups
/// not containing the call name) are stripped repeatedly until only the
/// shared wrapping remains; the answer is the smaller of the leading-`(`
/// and trailing-`)` runs of what is left.
pub(crate) fn shared_paren_depth(snippet: &str, name: &str) -> usize {
    let mut text = snippet.to_string();
    loop {
        let mut next = String::with_capacity(text.len());
        let mut last = 0;
        let mut stripped = false;
        for group in innermost_group().find_iter(&text) {
            let inner = &text[group.start() + 1..group.end() - 1];
            next.push_str(&text[last..group.start()]);
            if inner.contains(name) {
                next.push_str(group.as_str());
            } else {
                next.push_str(inner);
                stripped = true;
            }
            last = group.end();
        }
        next.push_str(&text[last..]);
        text = next;
        if !stripped {
            break;
        }
    }
    let leading = text
        .chars()
        .take_while(|c| *c == '(' || c.is_whitespace())
        .filter(|c| *c == '(')
        .count();
    let trailing = text
        .chars()
        .rev()
        .take_while(|c| *c == ')' || *c == ';' || c.is_whitespace())
        .filter(|c| *c == ')')
        .count();
    leading.min(trailing)
}

/// Does the `(`-group at the start of `rest` close before a top-level
/// comma? If so it parenthesizes the first argument of a command-style
/// call (`foo (bar), baz`) rather than opening the argument list.
pub(crate) fn group_is_first_argument(rest: &str) -> bool {
    debug_assert!(rest.starts_with('('));
    let mut depth = 0usize;
    let mut close = None;
    for (i, c) in rest.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    close = Some(i + 1);
                    break;
                }
            }
            _ => {}
        }
    }
    let Some(close) = close else {
        return false;
    };
    rest[close..].trim_start().starts_with(',')
}
