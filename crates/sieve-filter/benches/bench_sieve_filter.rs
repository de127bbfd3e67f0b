use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::seq::SliceRandom;
use sieve_core::{Chain, CharTokenizer, SieveConfig};
use sieve_filter::{has_emoticon, HeuristicPipeline, Normalizer};

const UTTERANCES: &[&str] = &[
    "今日は仕事が忙しかったです",
    "お疲れさまでした、ゆっくり休んでね",
    "@friend 明日の天気は？\n晴れるといいな",
    "ちょっと！！！？？？　なにやってんのＷＷＷ\tびっくりしたわ、、、、",
    "この写真すごくいいよ http://example.com/img/09_img_main.jpg",
    "伯爵に食べられる前に逃げないと(ﾟдﾟ)！",
    "#熱海 温泉最高だった",
    "I want to do a massive implementation.",
    "はい",
];

fn generate_chains(n: usize) -> Vec<Chain> {
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|_| {
            let len = [2, 3, 4].choose(&mut rng).copied().unwrap_or(2);
            (0..len).map(|_| *UTTERANCES.choose(&mut rng).unwrap_or(&"はい")).collect()
        })
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    let n = Normalizer::default();
    c.bench_function("normalize_reply", |b| {
        b.iter(|| black_box(n.normalize(black_box(UTTERANCES[3]))))
    });
}

fn bench_emoticon(c: &mut Criterion) {
    c.bench_function("has_emoticon_all", |b| {
        b.iter(|| UTTERANCES.iter().filter(|u| has_emoticon(black_box(u))).count())
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let chains = generate_chains(1000);
    let config = SieveConfig::default();
    c.bench_function("pipeline_1000_chains", |b| {
        b.iter(|| {
            let mut pipeline = HeuristicPipeline::new(&config, CharTokenizer);
            chains.iter().filter(|ch| pipeline.evaluate((*ch).clone()).is_accepted()).count()
        })
    });
}

criterion_group!(benches, bench_normalize, bench_emoticon, bench_pipeline);
criterion_main!(benches);
