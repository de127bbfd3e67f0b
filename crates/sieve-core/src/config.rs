//! Configuration surface for normalization, filters and the pipeline.
//!
//! Every section has literature-derived defaults, so a JSON document only needs
//! to name the values it overrides.

use crate::error::{Result, SieveError};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SieveConfig {
    pub pipeline: PipelineConfig,
    pub normalizer: NormalizerConfig,
    pub length: CharLengthConfig,
    pub token_count: TokenCountConfig,
    pub jaccard: JaccardConfig,
    pub language: LanguageConfig,
    pub preprocess: PreprocessConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub apply_normalization: bool,
    /// Capacity of the diagnostic log.
    pub max_hold: usize,
}

/// Replacement for `\n` inside an utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewlinePolicy {
    /// Japanese full stop `。`.
    Period,
    /// ASCII space; dropped again under [`WhitespacePolicy::Remove`].
    Space,
}

/// Treatment of ASCII space, ideographic space and tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WhitespacePolicy {
    Remove,
    /// Collapse each run into one ASCII space.
    Space,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    pub fold_width: bool,
    pub newline_policy: NewlinePolicy,
    pub whitespace_policy: WhitespacePolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharLengthConfig {
    pub min_len: usize,
    pub max_len: usize,
}

/// Token-count bounds; defaults follow Inaba et al. (2014).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenCountConfig {
    pub min_len: usize,
    pub max_len: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JaccardConfig {
    /// Adjacent utterances at or above this similarity are rejected.
    pub threshold: f64,
    /// Utterances whose distinct/total token ratio falls below this are rejected.
    pub min_unique_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    pub reject_hashtags: bool,
    pub reject_urls: bool,
    pub reject_mentions: bool,
    pub require_japanese: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessConfig {
    /// Longest single post accepted, in characters.
    pub max_chars: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { apply_normalization: true, max_hold: 1000 }
    }
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            fold_width: false,
            newline_policy: NewlinePolicy::Period,
            whitespace_policy: WhitespacePolicy::Remove,
        }
    }
}

impl Default for CharLengthConfig {
    fn default() -> Self {
        Self { min_len: 5, max_len: 30 }
    }
}

impl Default for TokenCountConfig {
    fn default() -> Self {
        Self { min_len: 6, max_len: 29 }
    }
}

impl Default for JaccardConfig {
    fn default() -> Self {
        Self { threshold: 0.5, min_unique_ratio: 0.5 }
    }
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            reject_hashtags: true,
            reject_urls: true,
            reject_mentions: true,
            require_japanese: true,
        }
    }
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self { max_chars: 140 }
    }
}

impl Default for SieveConfig {
    fn default() -> Self {
        Self {
            pipeline: PipelineConfig::default(),
            normalizer: NormalizerConfig::default(),
            length: CharLengthConfig::default(),
            token_count: TokenCountConfig::default(),
            jaccard: JaccardConfig::default(),
            language: LanguageConfig::default(),
            preprocess: PreprocessConfig::default(),
        }
    }
}

impl CharLengthConfig {
    pub fn contains(&self, len: usize) -> bool {
        self.min_len <= len && len <= self.max_len
    }
}

impl TokenCountConfig {
    pub fn contains(&self, len: usize) -> bool {
        self.min_len <= len && len <= self.max_len
    }
}

impl LanguageConfig {
    /// URL and mention checks only, as used by the token-count preset.
    pub fn markers_only() -> Self {
        Self {
            reject_hashtags: false,
            reject_urls: true,
            reject_mentions: true,
            require_japanese: false,
        }
    }
}

impl SieveConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded sieve config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.length.min_len > self.length.max_len {
            return Err(SieveError::InvalidConfig(format!(
                "length.min_len ({}) exceeds length.max_len ({})",
                self.length.min_len, self.length.max_len
            )));
        }
        if self.token_count.min_len > self.token_count.max_len {
            return Err(SieveError::InvalidConfig(format!(
                "token_count.min_len ({}) exceeds token_count.max_len ({})",
                self.token_count.min_len, self.token_count.max_len
            )));
        }
        check_unit("jaccard.threshold", self.jaccard.threshold)?;
        check_unit("jaccard.min_unique_ratio", self.jaccard.min_unique_ratio)?;
        Ok(())
    }
}

fn check_unit(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SieveError::InvalidConfig(format!("{} must be within [0, 1], got {}", name, value)))
    }
}
