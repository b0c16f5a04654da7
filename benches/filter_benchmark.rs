//! Performance benchmarks for the filter engine.
//!
//! Run with: cargo bench --bench filter_benchmark

use ccref::filter::{visible_items, FilterState, QueryMatcher};
use ccref::model::{Dataset, ItemKind};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_unfiltered(c: &mut Criterion) {
    let dataset = Dataset::builtin();
    let state = FilterState::default();

    c.bench_function("visible_items_unfiltered", |b| {
        b.iter(|| {
            let _ = black_box(visible_items(black_box(dataset), black_box(&state)));
        })
    });
}

fn bench_literal_query(c: &mut Criterion) {
    let dataset = Dataset::builtin();
    let state = FilterState {
        query: "claude".to_string(),
        ..FilterState::default()
    };

    c.bench_function("visible_items_literal", |b| {
        b.iter(|| {
            let _ = black_box(visible_items(black_box(dataset), black_box(&state)));
        })
    });
}

fn bench_regex_query(c: &mut Criterion) {
    let dataset = Dataset::builtin();
    let state = FilterState {
        query: r"ctrl\+[a-z]".to_string(),
        use_regex: true,
        ..FilterState::default()
    };

    c.bench_function("visible_items_regex", |b| {
        b.iter(|| {
            let _ = black_box(visible_items(black_box(dataset), black_box(&state)));
        })
    });
}

fn bench_malformed_regex_fallback(c: &mut Criterion) {
    let dataset = Dataset::builtin();
    let state = FilterState {
        query: "(zero".to_string(),
        use_regex: true,
        ..FilterState::default()
    };

    c.bench_function("visible_items_regex_fallback", |b| {
        b.iter(|| {
            let _ = black_box(visible_items(black_box(dataset), black_box(&state)));
        })
    });
}

fn bench_scoped_and_faceted(c: &mut Criterion) {
    let dataset = Dataset::builtin();
    let state = FilterState {
        category: dataset.category_index("Hooks"),
        kind: Some(ItemKind::Hook),
        query: "tool".to_string(),
        ..FilterState::default()
    };

    c.bench_function("visible_items_scoped_faceted", |b| {
        b.iter(|| {
            let _ = black_box(visible_items(black_box(dataset), black_box(&state)));
        })
    });
}

fn bench_matcher_compilation(c: &mut Criterion) {
    c.bench_function("query_matcher_compile_regex", |b| {
        b.iter(|| {
            let _ = black_box(QueryMatcher::new(
                black_box(r"ctrl\+[a-z]"),
                true,
                false,
            ));
        })
    });
}

criterion_group!(
    benches,
    bench_unfiltered,
    bench_literal_query,
    bench_regex_query,
    bench_malformed_regex_fallback,
    bench_scoped_and_faceted,
    bench_matcher_compilation
);
criterion_main!(benches);
