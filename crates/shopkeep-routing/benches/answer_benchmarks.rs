//! Benchmarks for query answering and fuzzy matching.
#![allow(
    missing_docs,
    clippy::expect_used,
    clippy::missing_panics_doc,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    reason = "Benchmark setup is expected to succeed"
)]

use std::hint::black_box;
use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use shopkeep_core::{Catalog, Item, ShopConfig};
use shopkeep_routing::IntentRouter;
use shopkeep_routing::matching::similarity::gestalt_ratio;

/// Seeded catalog padded with generated items
fn large_catalog(size: usize) -> Catalog {
    let colors = ["negro", "blanco", "azul", "rojo", "verde"];
    let sizes = ["S", "M", "L", "XL", "32"];
    let mut items = Catalog::seeded().all().to_vec();
    for index in 0..size {
        items.push(Item::new(
            &format!("Producto {index}"),
            sizes[index % sizes.len()],
            colors[index % colors.len()],
            (index % 200) as f64 + 0.99,
        ));
    }
    Catalog::new(items).expect("Failed to build catalog")
}

/// Benchmark one answer per intent against the default catalog
fn bench_answer_by_intent(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("answer_by_intent");
    let router = IntentRouter::new(Arc::new(Catalog::seeded()), &ShopConfig::default());

    let queries = [
        ("politeness", "thanks for the help"),
        ("catalog", "show me the catálogo"),
        ("budget", "budget of 40"),
        ("size", "size M"),
        ("search", "camiseta blanka"),
        ("empty", "   "),
    ];

    for (name, query) in queries {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(name), &query, |bencher, &query| {
            bencher.iter(|| router.answer(black_box(query)));
        });
    }

    group.finish();
}

/// Benchmark fuzzy search as the catalog grows
fn bench_search_scaling(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("search_scaling");

    for size in [10, 100, 1000] {
        let router = IntentRouter::new(Arc::new(large_catalog(size)), &ShopConfig::default());
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bencher, _| {
            bencher.iter(|| router.search(black_box("vestido azul")));
        });
    }

    group.finish();
}

/// Benchmark the similarity ratio on typical query/projection pairs
fn bench_gestalt_ratio(criterion: &mut Criterion) {
    criterion.bench_function("gestalt_ratio", |bencher| {
        bencher.iter(|| {
            gestalt_ratio(
                black_box("camiseta blanka talla L"),
                black_box("Camiseta blanca L blanco 19.99"),
            )
        });
    });
}

criterion_group!(
    benches,
    bench_answer_by_intent,
    bench_search_scaling,
    bench_gestalt_ratio
);
criterion_main!(benches);
