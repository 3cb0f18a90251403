//! Benchmarks for the matrix-vector kernels.

use colkern::config::ColumnCheck;
use colkern::kernels::{gax_with, lgax_with};
use colkern::math::Matrix;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn square(n: usize) -> (Matrix<f64>, Vec<f64>) {
    let data: Vec<f64> = (0..n * n).map(|i| (i % 17) as f64 * 0.5).collect();
    let a = Matrix::from_column_major(n, n, data).unwrap();
    let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
    (a, x)
}

fn bench_gax(c: &mut Criterion) {
    let mut group = c.benchmark_group("gax");

    for size in [8, 64, 256].iter() {
        let (a, x) = square(*size);
        for check in [ColumnCheck::Strict, ColumnCheck::Lenient] {
            group.bench_with_input(BenchmarkId::new(check.to_string(), size), size, |b, _| {
                b.iter(|| gax_with(black_box(&a), black_box(&x), check).unwrap())
            });
        }
    }

    group.finish();
}

fn bench_lgax(c: &mut Criterion) {
    let mut group = c.benchmark_group("lgax");

    for size in [8, 64, 256].iter() {
        let (a, x) = square(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| lgax_with(black_box(&x), black_box(&a), ColumnCheck::Strict).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_gax, bench_lgax);
criterion_main!(benches);
