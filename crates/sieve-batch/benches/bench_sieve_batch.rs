use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::seq::SliceRandom;
use sieve_batch::BatchCurator;
use sieve_core::{Chain, CharTokenizer};

const UTTERANCES: &[&str] = &[
    "今日は仕事が忙しかったです",
    "お疲れさまでした、ゆっくり休んでね",
    "@friend 明日の天気は？\n晴れるといいな",
    "伯爵に食べられる前に逃げないと(ﾟдﾟ)！",
    "#熱海 温泉最高だった",
    "はい",
];

fn generate_chains(n: usize) -> Vec<Chain> {
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|_| {
            let len = [2, 3].choose(&mut rng).copied().unwrap_or(2);
            (0..len).map(|_| *UTTERANCES.choose(&mut rng).unwrap_or(&"はい")).collect()
        })
        .collect()
}

fn bench_sequential(c: &mut Criterion) {
    let chains = generate_chains(10_000);
    let curator = BatchCurator::default();
    c.bench_function("batch_sequential_10k", |b| {
        b.iter(|| black_box(curator.run(chains.clone(), CharTokenizer).stats.accepted))
    });
}

fn bench_parallel(c: &mut Criterion) {
    let chains = generate_chains(10_000);
    let curator = BatchCurator::default();
    c.bench_function("batch_parallel_10k", |b| {
        b.iter(|| black_box(curator.run_parallel(chains.clone(), || CharTokenizer).stats.accepted))
    });
}

criterion_group!(benches, bench_sequential, bench_parallel);
criterion_main!(benches);
