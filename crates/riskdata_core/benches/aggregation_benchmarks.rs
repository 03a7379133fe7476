//! Criterion benchmarks for the dashboard aggregations.
//!
//! Measures filtering and each aggregator across dataset sizes to
//! characterise scaling behaviour.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use riskdata_core::prelude::*;

fn dataset(size: usize) -> Vec<RiskRecord> {
    DatasetGenerator::new(DatasetConfig::default().with_size(size).with_seed(42))
        .map(|generator| generator.generate())
        .unwrap_or_default()
}

fn bench_aggregators(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");

    for size in [500, 5_000, 50_000] {
        let data = dataset(size);

        group.bench_with_input(BenchmarkId::new("time_series", size), &data, |b, data| {
            b.iter(|| time_series_data(black_box(data)));
        });
        group.bench_with_input(BenchmarkId::new("category", size), &data, |b, data| {
            b.iter(|| category_data(black_box(data)));
        });
        group.bench_with_input(BenchmarkId::new("box_plot", size), &data, |b, data| {
            b.iter(|| box_plot_data(black_box(data)));
        });
    }

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");
    let data = dataset(5_000);
    let options = FilterOptions::new().with_hospital("AIIMS").with_specialty("Surgery");

    group.bench_function("filter", |b| {
        b.iter(|| filter_data(black_box(&data), black_box(&options)));
    });
    group.bench_function("unique_hospitals", |b| {
        b.iter(|| unique_values(black_box(&data), RiskField::Hospital));
    });
    group.bench_function("snapshot", |b| {
        b.iter(|| DashboardSnapshot::build(black_box(&data), black_box(&options)));
    });

    group.finish();
}

criterion_group!(benches, bench_aggregators, bench_queries);
criterion_main!(benches);
