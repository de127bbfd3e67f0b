//! Redundancy detection over token sets.

use crate::filter::TokenCache;
use sieve_core::{Chain, JaccardConfig, Result, Tokenizer};
use std::collections::HashSet;
use std::hash::Hash;

/// Jaccard similarity between two sets.
pub fn jaccard<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union as f64
}

/// Distinct/total token ratio; `None` when there are no tokens.
pub fn distinct_ratio(tokens: &[String]) -> Option<f64> {
    if tokens.is_empty() {
        return None;
    }
    let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
    Some(distinct.len() as f64 / tokens.len() as f64)
}

/// Rejects self-repetitive utterances and adjacent near-duplicates.
#[derive(Debug, Clone, Default)]
pub struct JaccardRedundancyFilter {
    config: JaccardConfig,
}

impl JaccardRedundancyFilter {
    pub fn new(config: JaccardConfig) -> Self {
        Self { config }
    }

    pub fn threshold(&self) -> f64 {
        self.config.threshold
    }

    pub fn is_pass<T: Tokenizer + ?Sized>(
        &self,
        chain: &Chain,
        tokens: &mut TokenCache,
        tokenizer: &T,
    ) -> Result<bool> {
        let mut previous: Option<HashSet<String>> = None;
        for i in 0..chain.len() {
            let current_tokens = tokens.tokens(tokenizer, chain, i)?;
            match distinct_ratio(current_tokens) {
                Some(ratio) if ratio >= self.config.min_unique_ratio => {}
                _ => return Ok(false),
            }
            let current: HashSet<String> = current_tokens.iter().cloned().collect();
            if let Some(prev) = &previous {
                if jaccard(prev, &current) >= self.config.threshold {
                    return Ok(false);
                }
            }
            previous = Some(current);
        }
        Ok(true)
    }
}
