//! Kaomoji / emoticon detection.
//!
//! Two passes, either of which flags the text:
//! 1. runs of symbols (plus ASCII letters) that still hold at least three
//!    characters after trimming letters and collapsing repeated punctuation;
//! 2. parentheticals without a single Japanese letter, ignoring the glyphs
//!    that faces are commonly drawn with.

use crate::normalizer::{collapse_runs, is_repeat_punct};
use crate::patterns::{RE_EMOTICON_CANDIDATE, RE_NON_WORD, RE_PARENTHETICAL};
use sieve_core::script::is_japanese_letter;
use sieve_core::Chain;

const MIN_SYMBOL_RUN: usize = 3;

/// Japanese-script characters routinely used as eyes, mouths or arms.
pub fn is_face_glyph(c: char) -> bool {
    matches!(c, 'T' | 'o' | 'O' | 'ロ' | '口' | 'ﾛ' | 'つ' | 'っ' | '灬' | 'ノ' | 'ﾉ' | 'c' | 'C')
}

pub fn has_emoticon(text: &str) -> bool {
    has_symbol_run(text) || has_faceless_parenthetical(text)
}

fn has_symbol_run(text: &str) -> bool {
    RE_EMOTICON_CANDIDATE.find_iter(text).any(|m| {
        let residual = m.as_str().trim_matches(|c: char| c.is_ascii_alphabetic()).trim();
        let residual = collapse_runs(residual, is_repeat_punct);
        RE_NON_WORD.is_match(&residual) && residual.chars().count() >= MIN_SYMBOL_RUN
    })
}

fn has_faceless_parenthetical(text: &str) -> bool {
    RE_PARENTHETICAL
        .find_iter(text)
        .any(|m| !m.as_str().chars().any(|c| is_japanese_letter(c) && !is_face_glyph(c)))
}

/// Rejects a chain when any utterance contains an emoticon.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmoticonFilter;

impl EmoticonFilter {
    pub fn new() -> Self {
        Self
    }

    pub fn is_pass(&self, chain: &Chain) -> bool {
        !chain.iter().any(|u| has_emoticon(u))
    }
}
