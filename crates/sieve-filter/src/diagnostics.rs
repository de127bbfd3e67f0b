//! Bounded record of rejected chains.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use sieve_core::{Chain, FilterKind};
use std::sync::Arc;

/// Snapshot of a chain at the moment a filter rejected it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterRecord {
    pub filter_name: String,
    pub chain_snapshot: Chain,
}

impl FilterRecord {
    pub fn new(filter: FilterKind, chain_snapshot: Chain) -> Self {
        Self { filter_name: filter.name().to_string(), chain_snapshot }
    }
}

/// Append-only log holding at most `max_hold` records. Once full, further
/// records are dropped; nothing is evicted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticLog {
    max_hold: usize,
    records: Vec<FilterRecord>,
}

impl DiagnosticLog {
    pub fn new(max_hold: usize) -> Self {
        Self { max_hold, records: Vec::new() }
    }

    /// Returns `false` when the log was already full.
    pub fn push(&mut self, record: FilterRecord) -> bool {
        if self.is_full() {
            return false;
        }
        self.records.push(record);
        true
    }

    /// Append another log's records in order until capacity is reached.
    /// Returns the number of records taken.
    pub fn merge(&mut self, other: DiagnosticLog) -> usize {
        let room = self.max_hold.saturating_sub(self.records.len());
        let taken = other.records.len().min(room);
        self.records.extend(other.records.into_iter().take(taken));
        taken
    }

    pub fn max_hold(&self) -> usize {
        self.max_hold
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.max_hold
    }

    pub fn records(&self) -> &[FilterRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FilterRecord> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<FilterRecord> {
        self.records
    }

    /// Count of records per filter name.
    pub fn counts(&self) -> std::collections::BTreeMap<String, usize> {
        let mut counts = std::collections::BTreeMap::new();
        for r in &self.records {
            *counts.entry(r.filter_name.clone()).or_insert(0) += 1;
        }
        counts
    }
}

impl Default for DiagnosticLog {
    fn default() -> Self {
        Self::new(1000)
    }
}

/// A [`DiagnosticLog`] shared by several pipelines. The capacity check and
/// the append happen under one lock.
#[derive(Debug, Clone)]
pub struct SharedDiagnosticLog {
    inner: Arc<Mutex<DiagnosticLog>>,
}

impl SharedDiagnosticLog {
    pub fn new(max_hold: usize) -> Self {
        Self { inner: Arc::new(Mutex::new(DiagnosticLog::new(max_hold))) }
    }

    pub fn push(&self, record: FilterRecord) -> bool {
        self.inner.lock().push(record)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn snapshot(&self) -> DiagnosticLog {
        self.inner.lock().clone()
    }
}
