// Criterion benchmarks for the hot lookup paths.
//
// Run with `cargo bench --bench query_bench`.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use chardb::NameFlags;

// ── Corpus generators ──

/// Deterministic code-point sweep weighted toward the ranges real text
/// lives in: ASCII, Latin-1, Greek/Cyrillic, CJK, Hangul, and a thin tail
/// of astral code points.
fn mixed_corpus(len: usize) -> Vec<u32> {
    const BANDS: &[(u32, u32)] = &[
        (0x0020, 0x007E),
        (0x00A0, 0x024F),
        (0x0370, 0x04FF),
        (0x0590, 0x06FF),
        (0x3040, 0x30FF),
        (0x4E00, 0x9FFF),
        (0xAC00, 0xD7A3),
        (0x1F300, 0x1F6FF),
    ];
    let mut out = Vec::with_capacity(len);
    let mut seed = 0x9E3779B9u32;
    for _ in 0..len {
        seed = seed.wrapping_mul(1664525).wrapping_add(1013904223);
        let (lo, hi) = BANDS[(seed >> 16) as usize % BANDS.len()];
        out.push(lo + seed % (hi - lo + 1));
    }
    out
}

fn ascii_corpus(len: usize) -> Vec<u32> {
    (0..len as u32).map(|i| 0x20 + i % 0x5F).collect()
}

fn bench_category(c: &mut Criterion) {
    let mut group = c.benchmark_group("general_category");
    for (label, corpus) in [("ascii", ascii_corpus(4096)), ("mixed", mixed_corpus(4096))] {
        group.throughput(Throughput::Elements(corpus.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(label), &corpus, |b, corpus| {
            b.iter(|| {
                let mut acc = 0u32;
                for &cp in corpus {
                    acc ^= chardb::general_category(black_box(cp)).code() as u32;
                }
                acc
            })
        });
    }
    group.finish();
}

fn bench_casefold(c: &mut Criterion) {
    let corpus = mixed_corpus(4096);
    let mut group = c.benchmark_group("casefold");
    group.throughput(Throughput::Elements(corpus.len() as u64));
    group.bench_function("full", |b| {
        b.iter(|| {
            let mut acc = 0u32;
            for &cp in &corpus {
                acc ^= chardb::full_casefold(black_box(cp))[0];
            }
            acc
        })
    });
    group.bench_function("simple", |b| {
        b.iter(|| {
            let mut acc = 0u32;
            for &cp in &corpus {
                acc ^= chardb::simple_casefold(black_box(cp));
            }
            acc
        })
    });
    group.finish();
}

fn bench_decomposition(c: &mut Criterion) {
    let corpus = mixed_corpus(4096);
    let mut group = c.benchmark_group("decomposition");
    group.throughput(Throughput::Elements(corpus.len() as u64));
    group.bench_function("canonical", |b| {
        b.iter(|| {
            let mut acc = 0usize;
            for &cp in &corpus {
                acc += chardb::canonical_decomposition(black_box(cp)).len();
            }
            acc
        })
    });
    group.finish();
}

fn bench_names(c: &mut Criterion) {
    let corpus = mixed_corpus(512);
    let mut group = c.benchmark_group("char_name");
    // first call pays the one-shot inflate; do it outside the timing loop
    let _ = chardb::char_name(0x41, NameFlags::NONE);
    group.throughput(Throughput::Elements(corpus.len() as u64));
    group.bench_function("labelled", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for &cp in &corpus {
                total += chardb::char_name(black_box(cp), NameFlags::LABEL).len();
            }
            total
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_category,
    bench_casefold,
    bench_decomposition,
    bench_names
);
criterion_main!(benches);
