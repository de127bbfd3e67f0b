//! Core data model for chainsieve: chains, verdicts, configuration and the
//! tokenizer capability shared by the filter and batch crates.

pub mod config;
pub mod error;
pub mod script;
pub mod tokenizer;
pub mod types;

pub use config::{
    CharLengthConfig, JaccardConfig, LanguageConfig, NewlinePolicy, NormalizerConfig,
    PipelineConfig, PreprocessConfig, SieveConfig, TokenCountConfig, WhitespacePolicy,
};
pub use error::{Result, SieveError};
pub use tokenizer::{CharTokenizer, ScriptRunTokenizer, Tokenizer, WhitespaceTokenizer};
pub use types::{Chain, FilterKind, RejectCause, Rejection, Verdict};

#[cfg(test)]
mod tests;
