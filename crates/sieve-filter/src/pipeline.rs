//! Heuristic pipeline: normalizes a chain, then runs an ordered filter list
//! with fail-fast short-circuiting and bounded rejection diagnostics.

use crate::diagnostics::{DiagnosticLog, FilterRecord, SharedDiagnosticLog};
use crate::filter::{Filter, TokenCache};
use crate::normalizer::Normalizer;
use sieve_core::{Chain, FilterKind, LanguageConfig, Rejection, SieveConfig, Tokenizer, Verdict};
use tracing::{debug, trace, warn};

/// Named filter line-ups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelinePreset {
    /// Script/markers → emoticons → token count → redundancy.
    Heuristic,
    /// URL and mention markers plus token count (Inaba et al., 2014).
    Inaba,
    /// Character-length bounds only.
    CharLength,
    /// Accept everything (normalization still applies).
    Passthrough,
}

impl PipelinePreset {
    pub fn filters(&self, config: &SieveConfig) -> Vec<Filter> {
        match self {
            Self::Heuristic => vec![
                Filter::language_script(config),
                Filter::emoticon(),
                Filter::token_count(config),
                Filter::jaccard_redundancy(config),
            ],
            Self::Inaba => vec![
                Filter::LanguageScript(crate::language::LanguageScriptFilter::new(LanguageConfig::markers_only())),
                Filter::token_count(config),
            ],
            Self::CharLength => vec![Filter::length(config)],
            Self::Passthrough => vec![Filter::Passthrough],
        }
    }
}

/// Where rejection records go.
#[derive(Debug, Clone)]
pub enum LogSink {
    Owned(DiagnosticLog),
    Shared(SharedDiagnosticLog),
}

impl LogSink {
    fn record(&mut self, record: FilterRecord) -> bool {
        match self {
            Self::Owned(log) => log.push(record),
            Self::Shared(log) => log.push(record),
        }
    }
}

pub struct HeuristicPipeline<T: Tokenizer> {
    filters: Vec<Filter>,
    normalizer: Option<Normalizer>,
    tokenizer: T,
    log: LogSink,
}

impl<T: Tokenizer> HeuristicPipeline<T> {
    /// Default line-up: [`PipelinePreset::Heuristic`].
    pub fn new(config: &SieveConfig, tokenizer: T) -> Self {
        Self::from_preset(PipelinePreset::Heuristic, config, tokenizer)
    }

    pub fn from_preset(preset: PipelinePreset, config: &SieveConfig, tokenizer: T) -> Self {
        Self::with_filters(preset.filters(config), config, tokenizer)
    }

    /// Custom line-up; filters run in the given order.
    pub fn with_filters(filters: Vec<Filter>, config: &SieveConfig, tokenizer: T) -> Self {
        let normalizer = config
            .pipeline
            .apply_normalization
            .then(|| Normalizer::new(config.normalizer.clone()));
        Self {
            filters,
            normalizer,
            tokenizer,
            log: LogSink::Owned(DiagnosticLog::new(config.pipeline.max_hold)),
        }
    }

    /// Record into a log shared with other pipelines instead of an owned one.
    pub fn with_shared_log(mut self, log: SharedDiagnosticLog) -> Self {
        self.log = LogSink::Shared(log);
        self
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn filter_names(&self) -> Vec<&'static str> {
        self.filters.iter().map(Filter::name).collect()
    }

    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }

    /// Owned log, if this pipeline is not writing to a shared one.
    pub fn log(&self) -> Option<&DiagnosticLog> {
        match &self.log {
            LogSink::Owned(log) => Some(log),
            LogSink::Shared(_) => None,
        }
    }

    /// Copy of whatever log this pipeline writes to.
    pub fn log_snapshot(&self) -> DiagnosticLog {
        match &self.log {
            LogSink::Owned(log) => log.clone(),
            LogSink::Shared(log) => log.snapshot(),
        }
    }

    /// Hand over the owned log, leaving an empty one of the same capacity.
    /// Returns an empty log when writing to a shared sink.
    pub fn take_log(&mut self) -> DiagnosticLog {
        match &mut self.log {
            LogSink::Owned(log) => {
                let fresh = DiagnosticLog::new(log.max_hold());
                std::mem::replace(log, fresh)
            }
            LogSink::Shared(_) => DiagnosticLog::new(0),
        }
    }

    /// Evaluate one chain. Never panics or errors on bad input: empty chains
    /// and tokenizer failures come back as malformed rejections.
    ///
    /// Filters see the normalized chain, so a face spread out with blanks
    /// (`^ ^`) is judged after whitespace removal has compacted it.
    pub fn evaluate(&mut self, chain: Chain) -> Verdict {
        if chain.is_empty() {
            return self.reject(chain, Rejection::malformed(FilterKind::MalformedInput, "empty chain"));
        }

        let mut chain = match &self.normalizer {
            Some(normalizer) => normalizer.normalize_chain(&chain),
            None => chain,
        };

        let mut tokens = TokenCache::new(chain.len());
        let mut rejection = None;
        for filter in &self.filters {
            match filter.check(&chain, &mut tokens, &self.tokenizer) {
                Ok(true) => {
                    if let Some(rewritten) = filter.transform(&chain) {
                        chain = rewritten;
                        tokens.clear();
                    }
                }
                Ok(false) => {
                    rejection = Some(Rejection::predicate(filter.kind()));
                    break;
                }
                Err(e) => {
                    rejection = Some(Rejection::malformed(filter.kind(), e.to_string()));
                    break;
                }
            }
        }

        match rejection {
            Some(r) => self.reject(chain, r),
            None => {
                trace!(utterances = chain.len(), tokenized = tokens.filled(), "chain accepted");
                Verdict::Accepted(chain)
            }
        }
    }

    /// Record an input that never became a chain (e.g. undecodable JSON)
    /// under the malformed-input pseudo-filter, with whatever text could be
    /// salvaged as the snapshot.
    pub fn reject_malformed(&mut self, snapshot: Chain, message: impl Into<String>) -> Verdict {
        self.reject(snapshot, Rejection::malformed(FilterKind::MalformedInput, message))
    }

    fn reject(&mut self, chain: Chain, rejection: Rejection) -> Verdict {
        if rejection.is_malformed() {
            warn!(filter = %rejection.filter, "{}", rejection);
        } else {
            debug!(filter = %rejection.filter, utterances = chain.len(), "chain rejected");
        }
        self.log.record(FilterRecord::new(rejection.filter, chain));
        Verdict::Rejected(rejection)
    }
}
