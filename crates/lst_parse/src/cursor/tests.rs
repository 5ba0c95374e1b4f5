use super::*;
use lst_tree::CommentKind;
use pretty_assertions::assert_eq;

#[test]
fn skip_consumes_only_exact_token() {
    let mut cursor = SourceCursor::new("class Foo");
    assert_eq!(cursor.skip("interface"), None);
    assert_eq!(cursor.position(), 0);
    assert_eq!(cursor.skip("class"), Some("class"));
    assert_eq!(cursor.position(), 5);
}

#[test]
fn whitespace_consumes_comments() {
    let mut cursor = SourceCursor::new("  // note\n  /* b */ token");
    let space = cursor.whitespace();
    assert_eq!(space.whitespace, "  ");
    assert_eq!(space.comments.len(), 2);
    assert_eq!(space.comments[0].kind, CommentKind::Line);
    assert_eq!(space.comments[0].text, " note");
    assert_eq!(space.comments[1].kind, CommentKind::Block);
    assert!(cursor.starts_with("token"));
    // Reprinting the space gives back exactly the consumed bytes.
    assert_eq!(space.print(), "  // note\n  /* b */ ");
}

#[test]
fn advance_to_finds_delimiter_through_comments() {
    let mut cursor = SourceCursor::new(" /* ; not this */ ;rest");
    let space = cursor.advance_to(";", None);
    assert_eq!(space.print(), " /* ; not this */ ");
    assert!(cursor.starts_with("rest"));
}

#[test]
fn advance_to_stops_at_stop_char_without_moving() {
    let mut cursor = SourceCursor::new("  ) ,");
    let space = cursor.advance_to(",", Some(')'));
    assert!(space.is_empty());
    assert_eq!(cursor.position(), 0);
}

#[test]
fn stop_char_inside_comment_is_transparent() {
    let mut cursor = SourceCursor::new("/* ) */ , x");
    let space = cursor.advance_to(",", Some(')'));
    assert_eq!(space.print(), "/* ) */ ");
    assert!(cursor.starts_with(" x"));
}

#[test]
fn advance_to_at_end_of_input_returns_empty_and_stays() {
    let mut cursor = SourceCursor::new("no delimiter here");
    let space = cursor.advance_to(";", None);
    assert!(space.is_empty());
    assert_eq!(cursor.position(), 0);
}

#[test]
fn checkpoint_restore_probes_without_consuming() {
    let mut cursor = SourceCursor::new("  static int x");
    let checkpoint = cursor.checkpoint();
    let _ = cursor.whitespace();
    assert!(cursor.skip("final").is_none());
    cursor.restore(checkpoint);
    assert_eq!(cursor.position(), 0);
    let _ = cursor.whitespace();
    assert_eq!(cursor.skip("static"), Some("static"));
}

#[test]
fn take_until_is_verbatim() {
    let mut cursor = SourceCursor::new("garbage ;\nclass A {}");
    assert_eq!(cursor.take_until(9), "garbage ;");
    assert!(cursor.starts_with("\nclass A"));
    // Ends before the cursor clamp to "nothing".
    assert_eq!(cursor.take_until(3), "");
}

#[test]
fn multibyte_text_keeps_char_boundaries() {
    let mut cursor = SourceCursor::new("  // näme\n→x");
    let space = cursor.whitespace();
    assert_eq!(space.comments[0].text, " näme");
    assert!(cursor.starts_with("→x"));
}
