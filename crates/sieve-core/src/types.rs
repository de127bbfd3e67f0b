//! Chains, filter identities and the accept/reject verdict.

use crate::error::{Result, SieveError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered reply chain. Each element is one utterance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chain {
    utterances: Vec<String>,
}

impl Chain {
    pub fn new(utterances: Vec<String>) -> Self {
        Self { utterances }
    }

    /// Build a chain from a JSON array of strings.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        let items = value.as_array().ok_or_else(|| {
            SieveError::MalformedInput(format!("expected an array of utterances, got {}", json_kind(value)))
        })?;
        let mut utterances = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            match item.as_str() {
                Some(text) => utterances.push(text.to_string()),
                None => {
                    return Err(SieveError::MalformedInput(format!(
                        "utterance {} is {}, not text",
                        i,
                        json_kind(item)
                    )))
                }
            }
        }
        Ok(Self { utterances })
    }

    pub fn len(&self) -> usize {
        self.utterances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.utterances.is_empty()
    }

    pub fn utterances(&self) -> &[String] {
        &self.utterances
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.utterances.iter()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.utterances
    }

    /// New chain with `f` applied to every utterance.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: FnMut(&String) -> String,
    {
        Self { utterances: self.utterances.iter().map(f).collect() }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

impl<S: Into<String>> FromIterator<S> for Chain {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self { utterances: iter.into_iter().map(Into::into).collect() }
    }
}

impl From<Vec<String>> for Chain {
    fn from(utterances: Vec<String>) -> Self {
        Self { utterances }
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.utterances.iter()
    }
}

/// Identity of a filter stage, as it appears in diagnostics and counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FilterKind {
    LanguageScript,
    Emoticon,
    Length,
    TokenCount,
    JaccardRedundancy,
    Passthrough,
    /// Pseudo-filter for chains that are structurally invalid.
    MalformedInput,
}

impl FilterKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LanguageScript => "LanguageScriptFilter",
            Self::Emoticon => "EmoticonFilter",
            Self::Length => "LengthFilter",
            Self::TokenCount => "TokenCountFilter",
            Self::JaccardRedundancy => "JaccardRedundancyFilter",
            Self::Passthrough => "PassthroughFilter",
            Self::MalformedInput => "MalformedInput",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a chain was turned away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectCause {
    /// The filter's predicate legitimately failed.
    Predicate,
    /// The input could not be evaluated (empty chain, tokenizer failure, ...).
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub filter: FilterKind,
    pub cause: RejectCause,
}

impl Rejection {
    pub fn predicate(filter: FilterKind) -> Self {
        Self { filter, cause: RejectCause::Predicate }
    }

    pub fn malformed(filter: FilterKind, message: impl Into<String>) -> Self {
        Self { filter, cause: RejectCause::Malformed(message.into()) }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self.cause, RejectCause::Malformed(_))
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            RejectCause::Predicate => write!(f, "rejected by {}", self.filter),
            RejectCause::Malformed(msg) => write!(f, "malformed input at {}: {}", self.filter, msg),
        }
    }
}

/// Outcome of evaluating one chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted(Chain),
    Rejected(Rejection),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn accepted(&self) -> Option<&Chain> {
        match self {
            Self::Accepted(chain) => Some(chain),
            Self::Rejected(_) => None,
        }
    }

    pub fn into_accepted(self) -> Option<Chain> {
        match self {
            Self::Accepted(chain) => Some(chain),
            Self::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected(r) => Some(r),
        }
    }
}
