//! The filter contract: a predicate over a whole chain plus an optional
//! rewrite, implemented by a closed set of filter kinds.

use crate::emoticon::EmoticonFilter;
use crate::jaccard::JaccardRedundancyFilter;
use crate::language::LanguageScriptFilter;
use crate::length::{LengthFilter, TokenCountFilter};
use sieve_core::{Chain, FilterKind, Rejection, Result, SieveConfig, SieveError, Tokenizer, Verdict};

/// Per-evaluation token memo, indexed by utterance position. Each utterance
/// is tokenized at most once however many filters ask for it.
#[derive(Debug, Default)]
pub struct TokenCache {
    slots: Vec<Option<Vec<String>>>,
}

impl TokenCache {
    pub fn new(len: usize) -> Self {
        Self { slots: vec![None; len] }
    }

    pub fn tokens<T: Tokenizer + ?Sized>(&mut self, tokenizer: &T, chain: &Chain, index: usize) -> Result<&[String]> {
        if self.slots.len() < chain.len() {
            self.slots.resize(chain.len(), None);
        }
        let slot = &mut self.slots[index];
        if slot.is_none() {
            let tokens = tokenizer.tokenize(&chain.utterances()[index]).map_err(|e| {
                SieveError::Tokenizer(format!("{} failed on utterance {}: {:#}", tokenizer.name(), index, e))
            })?;
            *slot = Some(tokens);
        }
        Ok(slot.as_deref().unwrap_or_default())
    }

    /// Number of utterances tokenized so far.
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
    }
}

#[derive(Debug, Clone)]
pub enum Filter {
    LanguageScript(LanguageScriptFilter),
    Emoticon(EmoticonFilter),
    Length(LengthFilter),
    TokenCount(TokenCountFilter),
    JaccardRedundancy(JaccardRedundancyFilter),
    Passthrough,
}

impl Filter {
    pub fn language_script(config: &SieveConfig) -> Self {
        Self::LanguageScript(LanguageScriptFilter::new(config.language.clone()))
    }

    pub fn emoticon() -> Self {
        Self::Emoticon(EmoticonFilter::new())
    }

    pub fn length(config: &SieveConfig) -> Self {
        Self::Length(LengthFilter::new(config.length.clone()))
    }

    pub fn token_count(config: &SieveConfig) -> Self {
        Self::TokenCount(TokenCountFilter::new(config.token_count.clone()))
    }

    pub fn jaccard_redundancy(config: &SieveConfig) -> Self {
        Self::JaccardRedundancy(JaccardRedundancyFilter::new(config.jaccard.clone()))
    }

    pub fn kind(&self) -> FilterKind {
        match self {
            Self::LanguageScript(_) => FilterKind::LanguageScript,
            Self::Emoticon(_) => FilterKind::Emoticon,
            Self::Length(_) => FilterKind::Length,
            Self::TokenCount(_) => FilterKind::TokenCount,
            Self::JaccardRedundancy(_) => FilterKind::JaccardRedundancy,
            Self::Passthrough => FilterKind::Passthrough,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn needs_tokens(&self) -> bool {
        matches!(self, Self::TokenCount(_) | Self::JaccardRedundancy(_))
    }

    /// `Ok(true)` when the chain passes. Errors come from the tokenizer.
    pub fn check<T: Tokenizer + ?Sized>(&self, chain: &Chain, tokens: &mut TokenCache, tokenizer: &T) -> Result<bool> {
        match self {
            Self::LanguageScript(f) => Ok(f.is_pass(chain)),
            Self::Emoticon(f) => Ok(f.is_pass(chain)),
            Self::Length(f) => Ok(f.is_pass(chain)),
            Self::TokenCount(f) => f.is_pass(chain, tokens, tokenizer),
            Self::JaccardRedundancy(f) => f.is_pass(chain, tokens, tokenizer),
            Self::Passthrough => Ok(true),
        }
    }

    /// Rewrite applied to a chain that passed. `None` keeps it unchanged,
    /// which is the case for every built-in kind.
    pub fn transform(&self, _chain: &Chain) -> Option<Chain> {
        None
    }

    /// Evaluate this filter on its own, with the same verdict shape as the
    /// pipeline.
    pub fn apply<T: Tokenizer + ?Sized>(&self, chain: &Chain, tokenizer: &T) -> Verdict {
        if chain.is_empty() {
            return Verdict::Rejected(Rejection::malformed(FilterKind::MalformedInput, "empty chain"));
        }
        let mut tokens = TokenCache::new(chain.len());
        match self.check(chain, &mut tokens, tokenizer) {
            Ok(true) => Verdict::Accepted(self.transform(chain).unwrap_or_else(|| chain.clone())),
            Ok(false) => Verdict::Rejected(Rejection::predicate(self.kind())),
            Err(e) => Verdict::Rejected(Rejection::malformed(self.kind(), e.to_string())),
        }
    }
}
