//! Batch driver. Each chain is evaluated in isolation; a malformed chain is
//! counted and the batch carries on.

use crate::stats::CurationStats;
use rayon::prelude::*;
use serde_json::Value;
use sieve_core::{Chain, SieveConfig, Tokenizer, Verdict};
use sieve_filter::{DiagnosticLog, HeuristicPipeline, PipelinePreset, SharedDiagnosticLog, TweetPreprocessor};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct BatchReport {
    /// Accepted (normalized) chains in input order.
    pub accepted: Vec<Chain>,
    pub stats: CurationStats,
    pub log: DiagnosticLog,
}

#[derive(Debug, Clone)]
pub struct PostReport {
    pub kept: Vec<String>,
    pub stats: CurationStats,
}

/// Partial result of one worker, merged pairwise after the batch.
struct Partial {
    accepted: Vec<(usize, Chain)>,
    stats: CurationStats,
    log: DiagnosticLog,
}

impl Partial {
    fn new(max_hold: usize) -> Self {
        Self { accepted: Vec::new(), stats: CurationStats::default(), log: DiagnosticLog::new(max_hold) }
    }

    fn merge(mut self, other: Partial) -> Self {
        self.accepted.extend(other.accepted);
        self.stats.merge(other.stats);
        self.log.merge(other.log);
        self
    }
}

struct Worker<T: Tokenizer> {
    pipeline: HeuristicPipeline<T>,
    accepted: Vec<(usize, Chain)>,
    stats: CurationStats,
}

impl<T: Tokenizer> Worker<T> {
    fn new(pipeline: HeuristicPipeline<T>) -> Self {
        Self { pipeline, accepted: Vec::new(), stats: CurationStats::default() }
    }

    fn evaluate(mut self, index: usize, chain: Chain) -> Self {
        let verdict = self.pipeline.evaluate(chain);
        self.stats.record(&verdict);
        if let Verdict::Accepted(chain) = verdict {
            self.accepted.push((index, chain));
        }
        self
    }

    fn finish(mut self) -> Partial {
        Partial { accepted: self.accepted, stats: self.stats, log: self.pipeline.take_log() }
    }
}

#[derive(Debug, Clone)]
pub struct BatchCurator {
    config: SieveConfig,
    preset: PipelinePreset,
}

impl BatchCurator {
    pub fn new(config: SieveConfig) -> Self {
        Self { config, preset: PipelinePreset::Heuristic }
    }

    pub fn with_preset(mut self, preset: PipelinePreset) -> Self {
        self.preset = preset;
        self
    }

    pub fn config(&self) -> &SieveConfig {
        &self.config
    }

    pub fn pipeline<T: Tokenizer>(&self, tokenizer: T) -> HeuristicPipeline<T> {
        HeuristicPipeline::from_preset(self.preset, &self.config, tokenizer)
    }

    /// Evaluate chains one after another on a single pipeline.
    pub fn run<T, I>(&self, chains: I, tokenizer: T) -> BatchReport
    where
        T: Tokenizer,
        I: IntoIterator<Item = Chain>,
    {
        let mut pipeline = self.pipeline(tokenizer);
        let mut accepted = Vec::new();
        let mut stats = CurationStats::default();
        for chain in chains {
            tally(pipeline.evaluate(chain), &mut stats, &mut accepted);
        }
        let report = BatchReport { accepted, stats, log: pipeline.take_log() };
        log_summary(&report.stats);
        report
    }

    /// Evaluate chains across the rayon pool. Every worker split gets its own
    /// pipeline and tokenizer from `make_tokenizer`; logs and counters are
    /// merged in input order afterwards, so the result matches [`Self::run`].
    pub fn run_parallel<T, F>(&self, chains: Vec<Chain>, make_tokenizer: F) -> BatchReport
    where
        T: Tokenizer + Send,
        F: Fn() -> T + Send + Sync,
    {
        let max_hold = self.config.pipeline.max_hold;
        let merged = chains
            .into_par_iter()
            .enumerate()
            .fold(
                || Worker::new(self.pipeline(make_tokenizer())),
                |worker, (index, chain)| worker.evaluate(index, chain),
            )
            .map(Worker::finish)
            .reduce(|| Partial::new(max_hold), Partial::merge);

        let mut accepted = merged.accepted;
        accepted.sort_by_key(|(index, _)| *index);
        let report = BatchReport {
            accepted: accepted.into_iter().map(|(_, chain)| chain).collect(),
            stats: merged.stats,
            log: merged.log,
        };
        log_summary(&report.stats);
        report
    }

    /// Parallel run where all workers append to one mutex-guarded log. Log
    /// order follows completion order rather than input order.
    pub fn run_parallel_shared<T, F>(&self, chains: Vec<Chain>, make_tokenizer: F) -> BatchReport
    where
        T: Tokenizer + Send,
        F: Fn() -> T + Send + Sync,
    {
        let shared = SharedDiagnosticLog::new(self.config.pipeline.max_hold);
        let verdicts: Vec<Verdict> = chains
            .into_par_iter()
            .map_init(
                || self.pipeline(make_tokenizer()).with_shared_log(shared.clone()),
                |pipeline, chain| pipeline.evaluate(chain),
            )
            .collect();

        let mut stats = CurationStats::default();
        let mut accepted = Vec::new();
        for verdict in verdicts {
            tally(verdict, &mut stats, &mut accepted);
        }
        let report = BatchReport { accepted, stats, log: shared.snapshot() };
        log_summary(&report.stats);
        report
    }

    /// Like [`Self::run`], for chains still in JSON form. A value that is not
    /// an array of strings is rejected as malformed input and logged in input
    /// order, with its string elements as the snapshot.
    pub fn run_json<T, I>(&self, values: I, tokenizer: T) -> BatchReport
    where
        T: Tokenizer,
        I: IntoIterator<Item = Value>,
    {
        let mut pipeline = self.pipeline(tokenizer);
        let mut accepted = Vec::new();
        let mut stats = CurationStats::default();
        for value in values {
            let verdict = match Chain::from_json(&value) {
                Ok(chain) => pipeline.evaluate(chain),
                Err(e) => pipeline.reject_malformed(salvage(&value), e.to_string()),
            };
            tally(verdict, &mut stats, &mut accepted);
        }
        let report = BatchReport { accepted, stats, log: pipeline.take_log() };
        log_summary(&report.stats);
        report
    }

    /// Screen and normalize standalone posts (`{"text": ...}` objects).
    pub fn run_posts<I>(&self, posts: I) -> PostReport
    where
        I: IntoIterator<Item = Value>,
    {
        let preprocessor = TweetPreprocessor::new(&self.config);
        let mut kept = Vec::new();
        let mut stats = CurationStats::default();
        for post in posts {
            stats.seen += 1;
            let Some(text) = post.get("text").and_then(|t| t.as_str()) else {
                warn!("skipping post without text: {}", post);
                stats.malformed += 1;
                continue;
            };
            match preprocessor.process(text) {
                Ok(clean) => {
                    stats.accepted += 1;
                    kept.push(clean);
                }
                Err(rejection) => stats.reject(rejection.label()),
            }
        }
        info!(
            seen = stats.seen,
            kept = stats.accepted,
            emoticon = stats.rejected_by("emoticon"),
            too_long = stats.rejected_by("too_long"),
            malformed = stats.malformed,
            "post preprocessing complete"
        );
        PostReport { kept, stats }
    }
}

impl Default for BatchCurator {
    fn default() -> Self {
        Self::new(SieveConfig::default())
    }
}

fn tally(verdict: Verdict, stats: &mut CurationStats, accepted: &mut Vec<Chain>) {
    stats.record(&verdict);
    if let Verdict::Accepted(chain) = verdict {
        accepted.push(chain);
    }
}

/// Text that can be recovered from an input that is not a valid chain.
fn salvage(value: &Value) -> Chain {
    match value {
        Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
        Value::String(text) => std::iter::once(text.as_str()).collect(),
        _ => Chain::default(),
    }
}

fn log_summary(stats: &CurationStats) {
    info!(
        seen = stats.seen,
        accepted = stats.accepted,
        rejected = stats.rejected(),
        malformed = stats.malformed,
        "batch complete"
    );
}
