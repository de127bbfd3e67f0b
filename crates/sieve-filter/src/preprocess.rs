//! Single-post cleaning ahead of corpus export.

use crate::emoticon::has_emoticon;
use crate::normalizer::{strip_leading_mentions, Normalizer};
use sieve_core::SieveConfig;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweetRejection {
    #[error("post contains an emoticon")]
    Emoticon,
    #[error("post exceeds {max} characters ({len})")]
    TooLong { len: usize, max: usize },
}

impl TweetRejection {
    /// Counter key for batch summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Emoticon => "emoticon",
            Self::TooLong { .. } => "too_long",
        }
    }
}

/// Screens a raw post, then normalizes survivors. Screening sees the post
/// without its leading reply mentions but is otherwise unnormalized.
#[derive(Debug, Clone)]
pub struct TweetPreprocessor {
    normalizer: Normalizer,
    max_chars: usize,
}

impl TweetPreprocessor {
    pub fn new(config: &SieveConfig) -> Self {
        Self {
            normalizer: Normalizer::new(config.normalizer.clone()),
            max_chars: config.preprocess.max_chars,
        }
    }

    pub fn process(&self, text: &str) -> Result<String, TweetRejection> {
        if has_emoticon(strip_leading_mentions(text)) {
            return Err(TweetRejection::Emoticon);
        }
        let len = text.chars().count();
        if len > self.max_chars {
            return Err(TweetRejection::TooLong { len, max: self.max_chars });
        }
        Ok(self.normalizer.normalize(text))
    }
}

impl Default for TweetPreprocessor {
    fn default() -> Self {
        Self::new(&SieveConfig::default())
    }
}
