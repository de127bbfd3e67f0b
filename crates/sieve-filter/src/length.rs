//! Character- and token-count bounds. Every utterance must fall inside.

use crate::filter::TokenCache;
use sieve_core::{CharLengthConfig, Chain, Result, TokenCountConfig, Tokenizer};

#[derive(Debug, Clone, Default)]
pub struct LengthFilter {
    config: CharLengthConfig,
}

impl LengthFilter {
    pub fn new(config: CharLengthConfig) -> Self {
        Self { config }
    }

    pub fn is_pass(&self, chain: &Chain) -> bool {
        chain.iter().all(|u| self.config.contains(u.chars().count()))
    }
}

#[derive(Debug, Clone, Default)]
pub struct TokenCountFilter {
    config: TokenCountConfig,
}

impl TokenCountFilter {
    pub fn new(config: TokenCountConfig) -> Self {
        Self { config }
    }

    pub fn is_pass<T: Tokenizer + ?Sized>(
        &self,
        chain: &Chain,
        tokens: &mut TokenCache,
        tokenizer: &T,
    ) -> Result<bool> {
        for i in 0..chain.len() {
            let count = tokens.tokens(tokenizer, chain, i)?.len();
            if !self.config.contains(count) {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
