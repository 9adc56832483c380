use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use wedit::buffer::line_index::LineIndex;
use wedit::modal::motion;

fn build_words(lines: usize, words_per_line: usize) -> Vec<u8> {
    let mut text = String::new();
    for _ in 0..lines {
        text.push_str(&"word ".repeat(words_per_line));
        text.push('\n');
    }
    text.into_bytes()
}

fn build_varying_lines(lines: usize) -> Vec<u8> {
    let mut text = String::new();
    for i in 0..lines {
        let len = (i % 80) + 10;
        text.push_str(&"a".repeat(len));
        text.push('\n');
    }
    text.into_bytes()
}

fn word_motions(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_motions");
    let bytes = build_words(200, 20);

    group.bench_function("move_word_forward_x1000", |b| {
        b.iter(|| {
            let mut pos = 0usize;
            for _ in 0..1000 {
                pos = motion::motion_word_forward(black_box(&bytes), pos);
            }
            black_box(pos)
        })
    });

    group.bench_function("move_word_end_x1000", |b| {
        b.iter(|| {
            let mut pos = 0usize;
            for _ in 0..1000 {
                pos = motion::motion_word_end(black_box(&bytes), pos);
            }
            black_box(pos)
        })
    });

    group.finish();
}

fn vertical_motions(c: &mut Criterion) {
    let mut group = c.benchmark_group("vertical_motions");
    let bytes = build_varying_lines(10_000);

    group.bench_function("move_down_scan_x1000", |b| {
        b.iter_batched(
            LineIndex::new,
            |mut lines| {
                let mut pos = 0usize;
                for _ in 0..1000 {
                    pos = motion::motion_j(black_box(&bytes), &mut lines, pos);
                }
                black_box(pos)
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, word_motions, vertical_motions);
criterion_main!(benches);
