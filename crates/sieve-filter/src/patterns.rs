//! Compiled patterns shared by the normalizer and the filters.

use regex::Regex;
use std::sync::LazyLock;

/// Literal left in place of every masked URL.
pub const URL_PLACEHOLDER: &str = "<URL>";

pub static RE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[\w/:%#\$&\?\(\)~\.=\+\-]+").unwrap());
pub static RE_MENTION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@[a-zA-Z0-9_]{1,15}").unwrap());
/// A mention at the very start of an utterance, followed by one separator.
pub static RE_LEADING_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^@[a-zA-Z0-9_]{1,15}[ \t\u{3000}\n]").unwrap());
pub static RE_EMOTICON_CANDIDATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\W_a-zA-Z]+").unwrap());
pub static RE_NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\W_]").unwrap());
pub static RE_PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.+?\)|（.+?）").unwrap());

pub fn has_url(text: &str) -> bool {
    RE_URL.is_match(text) || text.contains(URL_PLACEHOLDER)
}

pub fn has_mention(text: &str) -> bool {
    RE_MENTION.is_match(text)
}
