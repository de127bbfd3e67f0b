//! Batch curation: run a filter pipeline over many chains, sequentially or
//! across worker threads, and summarize the outcomes.

pub mod curator;
pub mod stats;

pub use curator::{BatchCurator, BatchReport, PostReport};
pub use stats::CurationStats;
