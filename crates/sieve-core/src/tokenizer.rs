//! Tokenizer capability and the bundled tokenizers.
//!
//! Filters only need an ordered token sequence per utterance; morphological
//! analysis is supplied by whatever implements [`Tokenizer`]. Implementations
//! must be deterministic for a fixed configuration. They need not be `Sync`:
//! parallel drivers build one tokenizer per worker.

use crate::script::ScriptClass;
use anyhow::Result;

pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;

    fn name(&self) -> &str {
        "tokenizer"
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for &T {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        (**self).tokenize(text)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for Box<T> {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        (**self).tokenize(text)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// One token per non-whitespace character.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharTokenizer;

impl Tokenizer for CharTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(text.chars().filter(|c| !c.is_whitespace()).map(String::from).collect())
    }

    fn name(&self) -> &str {
        "char"
    }
}

/// Splits on whitespace; for text an external analyzer has already segmented.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(text.split_whitespace().map(String::from).collect())
    }

    fn name(&self) -> &str {
        "whitespace"
    }
}

/// Segments at script-class boundaries (kanji / hiragana / katakana /
/// alphanumeric). Symbols are emitted one per token.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptRunTokenizer;

impl Tokenizer for ScriptRunTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut current_class: Option<ScriptClass> = None;

        for c in text.chars() {
            let class = ScriptClass::of(c);
            let joins = match (current_class, class) {
                (_, ScriptClass::Whitespace | ScriptClass::Symbol) => false,
                (Some(prev), next) => prev == next,
                (None, _) => false,
            };
            if !joins && !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            match class {
                ScriptClass::Whitespace => current_class = None,
                ScriptClass::Symbol => {
                    tokens.push(c.to_string());
                    current_class = None;
                }
                _ => {
                    current.push(c);
                    current_class = Some(class);
                }
            }
        }
        if !current.is_empty() {
            tokens.push(current);
        }
        Ok(tokens)
    }

    fn name(&self) -> &str {
        "script-run"
    }
}
