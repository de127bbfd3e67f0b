//! Chain filtering for conversational corpora.
//!
//! Components:
//! - `normalizer`: width folding, mention stripping, URL masking, whitespace
//!   policy, punctuation-run collapse
//! - `language`: hashtag / URL / mention markers and Japanese-script presence
//! - `emoticon`: kaomoji detection
//! - `length`: character and token count bounds
//! - `jaccard`: self-repetition and adjacent-utterance similarity
//! - `pipeline`: ordered, short-circuiting composition with a bounded
//!   diagnostic log

pub mod diagnostics;
pub mod emoticon;
pub mod filter;
pub mod jaccard;
pub mod language;
pub mod length;
pub mod normalizer;
pub mod patterns;
pub mod pipeline;
pub mod preprocess;

pub use diagnostics::{DiagnosticLog, FilterRecord, SharedDiagnosticLog};
pub use emoticon::{has_emoticon, EmoticonFilter};
pub use filter::{Filter, TokenCache};
pub use jaccard::JaccardRedundancyFilter;
pub use language::LanguageScriptFilter;
pub use length::{LengthFilter, TokenCountFilter};
pub use normalizer::Normalizer;
pub use pipeline::{HeuristicPipeline, LogSink, PipelinePreset};
pub use preprocess::{TweetPreprocessor, TweetRejection};
