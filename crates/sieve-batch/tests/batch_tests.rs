//! End-to-end batch runs: parallel evaluation must agree with sequential.

use sieve_batch::{BatchCurator, CurationStats};
use sieve_core::{CharTokenizer, Chain, SieveConfig};

fn chain(items: &[&str]) -> Chain {
    items.iter().copied().collect()
}

fn corpus(n: usize) -> Vec<Chain> {
    let shapes: [&[&str]; 6] = [
        &["今日は仕事が忙しかったです", "お疲れさまでした、ゆっくり休んでね"],
        &["すごいね(ﾟдﾟ)", "今日は晴れています"],
        &["はい", "今日は晴れています"],
        &["今日は良い天気ですね", "今日は良い天気ですね"],
        &["#tag 明日晴れ", "明日晴れるといいな"],
        &[],
    ];
    (0..n).map(|i| chain(shapes[i % shapes.len()])).collect()
}

fn curator(max_hold: usize) -> BatchCurator {
    let mut config = SieveConfig::default();
    config.pipeline.max_hold = max_hold;
    BatchCurator::new(config)
}

// ============================================================
// Parallel vs sequential
// ============================================================

#[test]
fn test_parallel_matches_sequential() {
    let curator = curator(1000);
    let chains = corpus(600);
    let seq = curator.run(chains.clone(), CharTokenizer);
    let par = curator.run_parallel(chains, || CharTokenizer);

    assert_eq!(par.accepted, seq.accepted);
    assert_eq!(par.stats, seq.stats);
    assert_eq!(par.log, seq.log);
}

#[test]
fn test_parallel_counts() {
    let report = curator(1000).run_parallel(corpus(600), || CharTokenizer);
    let stats = &report.stats;
    assert_eq!(stats.seen, 600);
    assert_eq!(stats.accepted, 100);
    assert_eq!(stats.malformed, 100);
    assert_eq!(stats.rejected_by("EmoticonFilter"), 100);
    assert_eq!(stats.rejected_by("TokenCountFilter"), 100);
    assert_eq!(stats.rejected_by("JaccardRedundancyFilter"), 100);
    assert_eq!(stats.rejected_by("LanguageScriptFilter"), 100);
    assert_eq!(report.log.len(), 500);
}

#[test]
fn test_parallel_log_capped_keeps_earliest() {
    let curator = curator(7);
    let chains = corpus(300);
    let seq = curator.run(chains.clone(), CharTokenizer);
    let par = curator.run_parallel(chains, || CharTokenizer);
    assert_eq!(par.log.len(), 7);
    assert_eq!(par.log, seq.log);
}

#[test]
fn test_parallel_shared_log() {
    let curator = curator(50);
    let report = curator.run_parallel_shared(corpus(600), || CharTokenizer);
    assert_eq!(report.stats.seen, 600);
    assert_eq!(report.accepted.len(), 100);
    assert_eq!(report.log.len(), 50);
    assert_eq!(report.log.max_hold(), 50);
}

#[test]
fn test_parallel_empty_batch() {
    let report = curator(10).run_parallel(Vec::new(), || CharTokenizer);
    assert!(report.accepted.is_empty());
    assert_eq!(report.stats, CurationStats::default());
    assert!(report.log.is_empty());
}
