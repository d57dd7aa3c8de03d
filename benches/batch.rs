//! Benchmarks for column-at-a-time scoring, sequential vs rayon.

use accessr::batch::{batch_threshold_hard, batch_threshold_soft};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;

fn random_column(n: usize) -> Vec<Option<i32>> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n)
        .map(|_| (!rng.gen_bool(0.05)).then(|| rng.gen_range(0..5_000)))
        .collect()
}

fn bench_columns(c: &mut Criterion) {
    let mut group = c.benchmark_group("column");

    for rows in [1_000, 100_000, 1_000_000] {
        let column = random_column(rows);

        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::new("hard", rows), &rows, |bench, _| {
            bench.iter(|| batch_threshold_hard(black_box(&column), 800))
        });
        group.bench_with_input(BenchmarkId::new("soft", rows), &rows, |bench, _| {
            bench.iter(|| batch_threshold_soft(black_box(&column), 800))
        });

        #[cfg(feature = "parallel")]
        group.bench_with_input(BenchmarkId::new("par_soft", rows), &rows, |bench, _| {
            bench.iter(|| accessr::batch::par_threshold_soft(black_box(&column), 800))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_columns);
criterion_main!(benches);
