//! Marker and script checks: hashtags, URLs, mentions, Japanese script.

use crate::patterns::{has_mention, has_url};
use sieve_core::script::contains_japanese;
use sieve_core::{Chain, LanguageConfig};

#[derive(Debug, Clone, Default)]
pub struct LanguageScriptFilter {
    config: LanguageConfig,
}

impl LanguageScriptFilter {
    pub fn new(config: LanguageConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LanguageConfig {
        &self.config
    }

    pub fn is_pass(&self, chain: &Chain) -> bool {
        chain.iter().all(|u| self.utterance_passes(u))
    }

    pub fn utterance_passes(&self, text: &str) -> bool {
        let c = &self.config;
        if c.reject_hashtags && text.contains('#') {
            return false;
        }
        if c.reject_urls && has_url(text) {
            return false;
        }
        if c.reject_mentions && has_mention(text) {
            return false;
        }
        if c.require_japanese && !contains_japanese(text) {
            return false;
        }
        true
    }
}
