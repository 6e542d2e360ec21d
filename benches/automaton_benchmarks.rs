//! Benchmarks for automaton construction and scanning throughput.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use libstringmatch::aho_corasick::AhoCorasick;
use libstringmatch::suffix_automaton::SuffixAutomaton;

/// Deterministic lowercase text over a small alphabet, so transitions
/// and clones actually happen.
fn generate_text(len: usize, alphabet: u8, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| char::from(b'a' + rng.gen_range(0..alphabet)))
        .collect()
}

fn generate_patterns(count: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(2..8);
            (0..len)
                .map(|_| char::from(b'a' + rng.gen_range(0..4)))
                .collect()
        })
        .collect()
}

fn bench_suffix_automaton_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("suffix_automaton_construction");
    for size in [1_000, 10_000, 100_000] {
        let text = generate_text(size, 4, 7);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| {
                let index = SuffixAutomaton::from_text(black_box(text)).unwrap();
                black_box(index.state_count());
            });
        });
    }
    group.finish();
}

fn bench_suffix_automaton_queries(c: &mut Criterion) {
    let text = generate_text(50_000, 4, 11);
    let index = SuffixAutomaton::from_text(&text).unwrap();
    let queries: Vec<String> = (0..64).map(|i| generate_text(12, 4, 100 + i)).collect();

    c.bench_function("suffix_automaton_contains", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for query in &queries {
                if index.contains(black_box(query)) {
                    hits += 1;
                }
            }
            black_box(hits);
        });
    });
}

fn bench_aho_corasick_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("aho_corasick_scan");
    let text = generate_text(100_000, 4, 23);
    for pattern_count in [8, 64, 256] {
        let patterns = generate_patterns(pattern_count, 5);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(pattern_count),
            &patterns,
            |b, patterns| {
                let mut automaton = AhoCorasick::from_patterns(patterns).unwrap();
                // Warm the lazy caches once; steady-state scanning is
                // what gets measured.
                automaton.find_iter(&text).count();
                b.iter(|| {
                    let matches = automaton.find_iter(black_box(&text)).count();
                    black_box(matches);
                });
            },
        );
    }
    group.finish();
}

fn bench_aho_corasick_table_build(c: &mut Criterion) {
    let patterns = generate_patterns(256, 5);
    c.bench_function("aho_corasick_build_scan_table", |b| {
        b.iter(|| {
            let mut automaton = AhoCorasick::from_patterns(black_box(&patterns)).unwrap();
            let table = automaton.build_scan_table();
            black_box(table.state_count());
        });
    });
}

criterion_group!(
    benches,
    bench_suffix_automaton_construction,
    bench_suffix_automaton_queries,
    bench_aho_corasick_scan,
    bench_aho_corasick_table_build
);
criterion_main!(benches);
