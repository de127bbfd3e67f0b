use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use sieve_core::{CharTokenizer, ScriptRunTokenizer, Tokenizer, WhitespaceTokenizer};

const ALPHABET: &[char] = &[
    'あ', 'い', 'う', 'の', 'が', 'ア', 'ン', 'ー', '猫', '犬', '日', '本', 'a', 'b', 'x', '1', '！', '、', ' ',
];

fn generate_text(chars: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..chars).map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())]).collect()
}

fn bench_tokenizers(c: &mut Criterion) {
    let short = generate_text(40);
    let long = generate_text(1000);

    c.bench_function("char_tokenizer_40", |b| b.iter(|| black_box(CharTokenizer.tokenize(black_box(&short)))));
    c.bench_function("whitespace_tokenizer_1000", |b| {
        b.iter(|| black_box(WhitespaceTokenizer.tokenize(black_box(&long))))
    });
    c.bench_function("script_run_tokenizer_40", |b| {
        b.iter(|| black_box(ScriptRunTokenizer.tokenize(black_box(&short))))
    });
    c.bench_function("script_run_tokenizer_1000", |b| {
        b.iter(|| black_box(ScriptRunTokenizer.tokenize(black_box(&long))))
    });
}

criterion_group!(benches, bench_tokenizers);
criterion_main!(benches);
