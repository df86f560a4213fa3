use boolcore::postings::{complement, intersect, union, PostingsList};
use boolcore::tokenizer::{tokenize, Tokenizer};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const TEXT: &str = "The quick brown fox jumps over the lazy dog. A quick brown dog outruns the lazy fox. \
The fox is quick, the dog is lazy. No dogs or foxes here, just a quick cat.";

fn strided(step: u32, n: u32) -> PostingsList {
    PostingsList::from_unsorted((0..n).map(|i| i * step).collect())
}

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize_whitespace", |b| b.iter(|| tokenize(black_box(TEXT))));
    c.bench_function("tokenize_words", |b| b.iter(|| Tokenizer::Words.tokenize(black_box(TEXT))));
}

fn bench_algebra(c: &mut Criterion) {
    let a = strided(2, 50_000);
    let b = strided(3, 50_000);
    let universe = strided(1, 150_000);
    c.bench_function("intersect_50k", |bn| bn.iter(|| intersect(black_box(&a), black_box(&b))));
    c.bench_function("union_50k", |bn| bn.iter(|| union(black_box(&a), black_box(&b))));
    c.bench_function("complement_150k", |bn| bn.iter(|| complement(black_box(&a), black_box(&universe))));
}

criterion_group!(benches, bench_tokenize, bench_algebra);
criterion_main!(benches);
