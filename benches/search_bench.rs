use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use wedit::ex::pattern::parse_pattern;
use wedit::ex::search::{find_anchored_next, find_next};

fn build_haystack() -> Vec<u8> {
    let mut text = String::new();
    for i in 0..1000 {
        text.push_str(&format!("Prefix match_{i} Suffix\n"));
    }
    for _ in 0..1000 {
        text.push_str("Calculon is a acting robot who is very dramatic.\n");
    }
    text.into_bytes()
}

fn pattern_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern_parsing");

    group.bench_function("parse_literal", |b| {
        b.iter(|| black_box(parse_pattern(black_box(b"simple_literal"))))
    });

    group.bench_function("parse_anchored", |b| {
        b.iter(|| black_box(parse_pattern(black_box(b"^match_500$"))))
    });

    group.finish();
}

fn literal_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("literal_search");
    let haystack = build_haystack();

    group.bench_function("find_next_mid_document", |b| {
        b.iter(|| black_box(find_next(black_box(&haystack), 0, b"match_500")))
    });

    let pat = parse_pattern(b"^Calculon");
    group.bench_function("find_anchored_next_start_of_line", |b| {
        b.iter(|| black_box(find_anchored_next(black_box(&haystack), 0, &pat)))
    });

    group.finish();
}

criterion_group!(benches, pattern_parsing, literal_search);
criterion_main!(benches);
