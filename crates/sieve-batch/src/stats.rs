//! Per-outcome counters for operator visibility at the end of a run.

use serde::{Deserialize, Serialize};
use sieve_core::Verdict;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurationStats {
    pub seen: usize,
    pub accepted: usize,
    /// Legitimate rejections, keyed by filter name (or post rejection label).
    pub rejected_by: BTreeMap<String, usize>,
    /// Inputs that could not be evaluated at all.
    pub malformed: usize,
}

impl CurationStats {
    pub fn record(&mut self, verdict: &Verdict) {
        self.seen += 1;
        match verdict {
            Verdict::Accepted(_) => self.accepted += 1,
            Verdict::Rejected(r) if r.is_malformed() => self.malformed += 1,
            Verdict::Rejected(r) => self.reject(r.filter.name()),
        }
    }

    pub fn reject(&mut self, label: &str) {
        *self.rejected_by.entry(label.to_string()).or_insert(0) += 1;
    }

    pub fn merge(&mut self, other: CurationStats) {
        self.seen += other.seen;
        self.accepted += other.accepted;
        self.malformed += other.malformed;
        for (label, count) in other.rejected_by {
            *self.rejected_by.entry(label).or_insert(0) += count;
        }
    }

    pub fn rejected(&self) -> usize {
        self.rejected_by.values().sum()
    }

    pub fn rejected_by(&self, label: &str) -> usize {
        self.rejected_by.get(label).copied().unwrap_or(0)
    }

    pub fn acceptance_rate(&self) -> f64 {
        if self.seen == 0 {
            return 0.0;
        }
        self.accepted as f64 / self.seen as f64
    }
}
