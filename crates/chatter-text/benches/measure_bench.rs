//! Benchmarks for tokenizing and measuring dialogue text.
//!
//! Run with: cargo bench -p chatter-text

use chatter_text::{
    AdvanceMeasurer, CachedMeasurer, ImageHandle, ImageTable, TextMeasurer, TextStyle, Token,
    tokenize,
};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn dialogue_text(words: usize) -> String {
    "Well {smile} I never thought {laugh} we would get here {unknown} friend "
        .split(' ')
        .cycle()
        .take(words)
        .collect::<Vec<_>>()
        .join(" ")
}

fn icon_table() -> ImageTable {
    ["smile", "laugh", "sad", "win"]
        .into_iter()
        .map(|n| (n, ImageHandle::new(format!("{n}.png"))))
        .collect()
}

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    let icons = icon_table();
    for words in [16usize, 128, 1024] {
        let text = dialogue_text(words);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(words), &text, |b, text| {
            b.iter(|| tokenize(black_box(text), &icons));
        });
    }
    group.finish();
}

fn bench_measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure_words");
    let icons = icon_table();
    let text = dialogue_text(512);
    let tokens = tokenize(&text, &icons);
    let style = TextStyle::body();

    group.bench_function("uncached", |b| {
        let mut m = AdvanceMeasurer::default();
        b.iter(|| {
            tokens
                .iter()
                .filter_map(Token::as_word)
                .map(|w| m.measure(black_box(w), &style))
                .sum::<f32>()
        });
    });

    group.bench_function("cached", |b| {
        let mut m = CachedMeasurer::new(AdvanceMeasurer::default(), 256);
        b.iter(|| {
            tokens
                .iter()
                .filter_map(Token::as_word)
                .map(|w| m.measure(black_box(w), &style))
                .sum::<f32>()
        });
    });
    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_measure);
criterion_main!(benches);
