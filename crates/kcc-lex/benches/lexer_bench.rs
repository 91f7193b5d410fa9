//! Lexer benchmarks.
//!
//! Run with: `cargo bench --package kcc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use kcc_lex::build_for_string;

fn lexer_token_count(source: &str) -> usize {
    build_for_string(source)
        .map(|process| process.tokens().len())
        .unwrap_or(0)
}

fn bench_lexer_statements(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "int x = 42; while (x > 0) { x -= 1; }";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("declaration", |b| {
        b.iter(|| lexer_token_count(black_box("int x = 42;")))
    });

    group.bench_function("loop_with_body", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_numbers");

    group.bench_function("decimal", |b| {
        b.iter(|| lexer_token_count(black_box("int x = 123456;")))
    });

    group.bench_function("hex", |b| {
        b.iter(|| lexer_token_count(black_box("int x = 0xDEADBEEF;")))
    });

    group.bench_function("binary", |b| {
        b.iter(|| lexer_token_count(black_box("int x = 0b10110101;")))
    });

    group.finish();
}

fn bench_lexer_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_strings");

    group.bench_function("short_string", |b| {
        b.iter(|| lexer_token_count(black_box("char *s = \"hello\";")))
    });

    group.bench_function("long_string", |b| {
        let source =
            "char *s = \"This is a longer string literal used to measure literal scanning.\";";
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_identifiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_identifiers");

    group.bench_function("short_ident", |b| {
        b.iter(|| lexer_token_count(black_box("int x = y;")))
    });

    group.bench_function("many_ident", |b| {
        b.iter(|| {
            lexer_token_count(black_box(
                "int a = 1; int b2 = 2; int c = 3; int d = 4; int e = 5;",
            ))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_statements,
    bench_lexer_numbers,
    bench_lexer_strings,
    bench_lexer_identifiers
);
criterion_main!(benches);
