use criterion::{criterion_group, criterion_main, Criterion};
use ir_core::stemmer::stem;
use ir_core::tokenizer::tokenize;

const TEXT: &str = include_str!("../../README.md");

fn bench_stem(c: &mut Criterion) {
    let words = tokenize(TEXT);
    c.bench_function("stem_readme", |b| {
        b.iter(|| words.iter().map(|w| stem(w)).count())
    });
}

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize_readme", |b| b.iter(|| tokenize(TEXT)));
}

criterion_group!(benches, bench_stem, bench_tokenize);
criterion_main!(benches);
