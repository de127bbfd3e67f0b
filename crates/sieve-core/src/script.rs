//! Code-point range tables for Japanese script detection.

/// CJK Unified Ideographs, main block plus extensions A through H.
const CJK_UNIFIED: &[(u32, u32)] = &[
    (0x3400, 0x4DBF),
    (0x4E00, 0x9FFF),
    (0x20000, 0x2A6DF),
    (0x2A700, 0x2EBEF),
    (0x30000, 0x323AF),
];

/// Hiragana, Katakana, Katakana Phonetic Extensions, halfwidth Katakana and
/// the Kana supplement blocks.
const KANA_BLOCKS: &[(u32, u32)] = &[
    (0x3040, 0x309F),
    (0x30A0, 0x30FF),
    (0x31F0, 0x31FF),
    (0xFF65, 0xFF9F),
    (0x1B000, 0x1B16F),
];

/// Kana code points that are letters, excluding iteration marks, voicing
/// marks, the prolonged sound mark and the middle dot.
const KANA_LETTERS: &[(u32, u32)] = &[
    (0x3041, 0x3096),
    (0x30A1, 0x30FA),
    (0x31F0, 0x31FF),
    (0xFF66, 0xFF6F),
    (0xFF71, 0xFF9D),
];

fn in_ranges(c: char, ranges: &[(u32, u32)]) -> bool {
    let code = c as u32;
    ranges.iter().any(|&(lo, hi)| lo <= code && code <= hi)
}

pub fn is_cjk_ideograph(c: char) -> bool {
    in_ranges(c, CJK_UNIFIED)
}

pub fn is_kana(c: char) -> bool {
    in_ranges(c, KANA_BLOCKS)
}

/// Any character from the CJK Unified Ideographs, Hiragana or Katakana blocks.
pub fn is_japanese(c: char) -> bool {
    is_cjk_ideograph(c) || is_kana(c)
}

/// Ideographs and kana letters only; the stricter test used when deciding
/// whether a parenthetical is prose or a drawn face.
pub fn is_japanese_letter(c: char) -> bool {
    is_cjk_ideograph(c) || in_ranges(c, KANA_LETTERS)
}

pub fn contains_japanese(text: &str) -> bool {
    text.chars().any(is_japanese)
}

/// Coarse script class, used to segment unsegmented Japanese text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptClass {
    Ideograph,
    Hiragana,
    Katakana,
    /// ASCII or fullwidth letters and digits.
    Alphanumeric,
    Whitespace,
    Symbol,
}

impl ScriptClass {
    pub fn of(c: char) -> Self {
        let code = c as u32;
        if c.is_whitespace() {
            Self::Whitespace
        } else if is_cjk_ideograph(c) || c == '々' {
            Self::Ideograph
        } else if (0x3041..=0x309F).contains(&code) {
            Self::Hiragana
        } else if (0x30A1..=0x30FA).contains(&code)
            || (0x30FC..=0x30FF).contains(&code)
            || (0x31F0..=0x31FF).contains(&code)
            || (0xFF66..=0xFF9F).contains(&code)
        {
            // includes the prolonged sound mark, which belongs to the preceding word
            Self::Katakana
        } else if c.is_alphanumeric() {
            Self::Alphanumeric
        } else {
            Self::Symbol
        }
    }
}
