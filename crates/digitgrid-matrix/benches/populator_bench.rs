//! Population and end-to-end pipeline benchmarks.
//!
//! Run with: cargo bench -p digitgrid-matrix --bench populator_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use digitgrid_matrix::{Dimensions, MatrixPipeline, MatrixPopulator};

/// `len` characters, roughly two thirds digits.
fn mixed_item(len: usize) -> String {
    (0..len)
        .map(|i| match i % 3 {
            2 => 'x',
            _ => char::from(b'0' + (i % 10) as u8),
        })
        .collect()
}

fn populate_single_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("populate");

    for threads in [0, 1, 4] {
        let populator = MatrixPopulator::with_threads(1 << 24, threads).unwrap();
        let digits: Vec<u8> = (0..900_000).map(|i| (i % 10) as u8).collect();
        let dims = Dimensions::new(9, 100_000);

        group.bench_with_input(BenchmarkId::new("900k_cells", threads), &threads, |b, _| {
            b.iter(|| populator.populate(dims, &digits).unwrap());
        });
    }
    group.finish();
}

fn pipeline_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_batch");
    group.sample_size(20);
    let pipeline = MatrixPipeline::with_defaults().unwrap();

    for size in [100, 1_000, 10_000] {
        let items: Vec<Option<String>> = (0..size).map(|i| Some(mixed_item(10 + i % 500))).collect();

        group.bench_with_input(BenchmarkId::new("unfiltered", size), &size, |b, _| {
            b.iter(|| {
                pipeline
                    .to_matrices(Some(items.iter().map(|s| s.as_deref())), 0)
                    .unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, populate_single_matrix, pipeline_batch);
criterion_main!(benches);
