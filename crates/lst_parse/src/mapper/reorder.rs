//! Modifier/annotation source-order recovery.
//!
//! Host ASTs hold modifiers as a bit-set and annotations as a separate
//! list, both in canonical order; the source may interleave them any way
//! (`@Foo public static` vs `public @Foo static`). This pass scans the raw
//! text character by character from the cursor, comment-aware, consulting a
//! position-indexed annotation map so each `@` is matched by byte offset
//! rather than by host node identity. Annotations seen before the first
//! modifier become leading annotations; later ones attach to the modifier
//! they follow, which keeps annotations after the last modifier lossless
//! too. An unknown word ends the run and the cursor rewinds to just after
//! the last consumed element, leaving that word for the caller.

use lst_tree::{Annotation, Markers, Modifier, ModifierKeyword, TreeId};
use rustc_hash::FxHashMap;

use super::{DialectOps, TreeMapper};
use crate::error::MapError;
use crate::host::{HostAnnotation, HostModifiers, ModifierFlags};

const KEYWORDS: [(ModifierFlags, ModifierKeyword); 13] = [
    (ModifierFlags::PUBLIC, ModifierKeyword::Public),
    (ModifierFlags::PROTECTED, ModifierKeyword::Protected),
    (ModifierFlags::PRIVATE, ModifierKeyword::Private),
    (ModifierFlags::STATIC, ModifierKeyword::Static),
    (ModifierFlags::FINAL, ModifierKeyword::Final),
    (ModifierFlags::ABSTRACT, ModifierKeyword::Abstract),
    (ModifierFlags::NATIVE, ModifierKeyword::Native),
    (ModifierFlags::SYNCHRONIZED, ModifierKeyword::Synchronized),
    (ModifierFlags::TRANSIENT, ModifierKeyword::Transient),
    (ModifierFlags::VOLATILE, ModifierKeyword::Volatile),
    (ModifierFlags::STRICTFP, ModifierKeyword::Strictfp),
    (ModifierFlags::DEFAULT, ModifierKeyword::Default),
    (ModifierFlags::DEF, ModifierKeyword::Def),
];

fn keywords_of(flags: ModifierFlags) -> Vec<ModifierKeyword> {
    KEYWORDS
        .iter()
        .filter(|(flag, _)| flags.contains(*flag))
        .map(|(_, keyword)| *keyword)
        .collect()
}

/// Remove and return the keyword matching `word`, case-insensitively.
fn take_matching(remaining: &mut Vec<ModifierKeyword>, word: &str) -> Option<ModifierKeyword> {
    let at = remaining
        .iter()
        .position(|k| k.token().eq_ignore_ascii_case(word))?;
    Some(remaining.remove(at))
}

impl<D: DialectOps> TreeMapper<'_, D> {
    /// Recover the source order of a declaration's modifiers and
    /// annotations, consuming them from the cursor.
    pub(crate) fn map_modifiers(
        &mut self,
        mods: &HostModifiers,
    ) -> Result<(Vec<Annotation>, Vec<Modifier>), MapError> {
        let annotation_at: FxHashMap<usize, &HostAnnotation> = mods
            .annotations
            .iter()
            .filter(|a| !a.span.is_synthetic())
            .map(|a| (a.span.start as usize, a))
            .collect();
        let mut remaining = keywords_of(mods.flags);

        let mut leading: Vec<Annotation> = Vec::new();
        let mut modifiers: Vec<Modifier> = Vec::new();

        let source = self.cursor.source();
        // Offset of the position just after the last consumed element; the
        // cursor rewinds here when the run ends.
        let mut resume = self.cursor.position();
        let mut i = resume;
        let mut in_line_comment = false;
        let mut in_block_comment = false;
        let mut word_start: Option<usize> = None;

        'scan: while i <= source.len() {
            let rest = &source[i..];
            if in_line_comment {
                if rest.is_empty() {
                    break;
                }
                if rest.starts_with('\n') {
                    in_line_comment = false;
                }
                i += char_len(rest);
                continue;
            }
            if in_block_comment {
                if rest.is_empty() {
                    break;
                }
                if rest.starts_with("*/") {
                    in_block_comment = false;
                    i += 2;
                } else {
                    i += char_len(rest);
                }
                continue;
            }

            let next = rest.chars().next();
            let is_word_char = next.is_some_and(|c| c.is_alphanumeric() || c == '_');

            if let Some(start) = word_start {
                if is_word_char {
                    i += char_len(rest);
                    continue;
                }
                // Word boundary: whitespace, punctuation, `@`, or EOF.
                let word = &source[start..i];
                match take_matching(&mut remaining, word) {
                    Some(keyword) => {
                        let prefix = self.cursor.whitespace();
                        let at = self.cursor.position();
                        if self.cursor.skip(word).is_none() {
                            return Err(MapError::expected(word, at));
                        }
                        modifiers.push(Modifier {
                            id: TreeId::random(),
                            prefix,
                            markers: Markers::new(),
                            keyword,
                            annotations: Vec::new(),
                        });
                        resume = self.cursor.position();
                        i = resume;
                        word_start = None;
                        continue;
                    }
                    None => break 'scan,
                }
            }

            if rest.is_empty() {
                break;
            }
            if let Some(annotation) = annotation_at.get(&i) {
                // The cursor is still at `resume`; annotation mapping
                // consumes the gap plus the whole annotation.
                let mapped = self.map_annotation(annotation)?;
                match modifiers.last_mut() {
                    Some(last) => last.annotations.push(mapped),
                    None => leading.push(mapped),
                }
                resume = self.cursor.position();
                i = resume;
                continue;
            }
            if rest.starts_with("//") {
                in_line_comment = true;
                i += 2;
                continue;
            }
            if rest.starts_with("/*") {
                in_block_comment = true;
                i += 2;
                continue;
            }
            if is_word_char {
                word_start = Some(i);
                i += char_len(rest);
                continue;
            }
            match next {
                Some(c) if c.is_whitespace() => i += c.len_utf8(),
                // Any other punctuation (`<`, `(`, an `@` that is not a known
                // annotation start) ends the run.
                _ => break,
            }
        }

        self.cursor.restore(resume);
        Ok((leading, modifiers))
    }
}

fn char_len(rest: &str) -> usize {
    rest.chars().next().map_or(1, char::len_utf8)
}
