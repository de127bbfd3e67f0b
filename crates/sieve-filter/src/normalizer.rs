//! Utterance normalization: width folding, mention stripping, URL masking,
//! newline and whitespace policy, punctuation-run collapse.

use crate::patterns::{RE_LEADING_MENTION, RE_URL, URL_PLACEHOLDER};
use sieve_core::{Chain, NewlinePolicy, NormalizerConfig, WhitespacePolicy};

const FULLWIDTH_FIRST: u32 = 0xFF01;
const FULLWIDTH_LAST: u32 = 0xFF5E;
const FULLWIDTH_OFFSET: u32 = 0xFEE0;

/// Characters whose repeated runs collapse to one during normalization.
pub fn is_collapsible(c: char) -> bool {
    matches!(c, 'w' | 'W' | 'ｗ' | 'Ｗ') || is_repeat_punct(c)
}

/// Punctuation subset of [`is_collapsible`], without the laughter `w`.
pub fn is_repeat_punct(c: char) -> bool {
    matches!(
        c,
        '。' | '．' | '.' | '、' | '，' | ',' | '・' | '･' | '…' | '〜' | '~' | '-' | '！' | '？' | '!' | '?'
    )
}

/// Replace every maximal run of identical characters accepted by `in_class`
/// with a single occurrence.
pub fn collapse_runs(text: &str, in_class: impl Fn(char) -> bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    for c in text.chars() {
        if prev == Some(c) && in_class(c) {
            continue;
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

/// Map fullwidth ASCII variants (`！` through `～`) to ASCII.
pub fn fold_width(text: &str) -> String {
    text.chars()
        .map(|c| {
            let code = c as u32;
            if (FULLWIDTH_FIRST..=FULLWIDTH_LAST).contains(&code) {
                char::from_u32(code - FULLWIDTH_OFFSET).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Strip `@user ` prefixes until none remains.
pub fn strip_leading_mentions(text: &str) -> &str {
    let mut rest = text;
    while let Some(m) = RE_LEADING_MENTION.find(rest) {
        rest = &rest[m.end()..];
    }
    rest
}

pub fn mask_urls(text: &str) -> String {
    RE_URL.replace_all(text, URL_PLACEHOLDER).into_owned()
}

#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: NormalizerConfig,
}

impl Normalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Normalize one utterance. Idempotent: a pass can expose a new leading
    /// mention or URL (e.g. once whitespace is removed), so passes repeat
    /// until the text stops changing.
    pub fn normalize(&self, text: &str) -> String {
        let mut current = self.pass(text);
        loop {
            let next = self.pass(&current);
            if next == current {
                return current;
            }
            current = next;
        }
    }

    pub fn normalize_chain(&self, chain: &Chain) -> Chain {
        chain.map(|u| self.normalize(u))
    }

    fn pass(&self, text: &str) -> String {
        let folded;
        let text = if self.config.fold_width {
            folded = fold_width(text);
            folded.as_str()
        } else {
            text
        };
        let text = mask_urls(strip_leading_mentions(text));
        let text = self.replace_newlines(&text);
        let text = self.apply_whitespace_policy(&text);
        collapse_runs(&text, is_collapsible)
    }

    fn replace_newlines(&self, text: &str) -> String {
        let replacement = match self.config.newline_policy {
            NewlinePolicy::Period => "。",
            NewlinePolicy::Space => " ",
        };
        text.replace("\r\n", "\n").replace(['\r', '\n'], replacement)
    }

    fn apply_whitespace_policy(&self, text: &str) -> String {
        let is_blank = |c: char| matches!(c, ' ' | '\t' | '\u{3000}');
        match self.config.whitespace_policy {
            WhitespacePolicy::Remove => text.chars().filter(|&c| !is_blank(c)).collect(),
            WhitespacePolicy::Space => {
                let mut out = String::with_capacity(text.len());
                let mut prev_blank = false;
                for c in text.chars() {
                    if is_blank(c) {
                        if !prev_blank {
                            out.push(' ');
                        }
                        prev_blank = true;
                    } else {
                        out.push(c);
                        prev_blank = false;
                    }
                }
                out
            }
        }
    }
}
