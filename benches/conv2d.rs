//! Benchmarks for the naive 2-D convolution kernel.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use convolver::conv::conv2d;
use convolver::synthetic::uniform_matrix;

fn bench_kernel_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("conv2d_kernel_size");

    let image = uniform_matrix(64, 64, Some(1234)).widen();
    for k in [1usize, 3, 5, 9].iter() {
        let kernel = uniform_matrix(*k, *k, Some(5678)).widen();

        group.bench_with_input(BenchmarkId::from_parameter(k), k, |b, _| {
            b.iter(|| conv2d(black_box(&image), black_box(&kernel)).unwrap());
        });
    }

    group.finish();
}

fn bench_image_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("conv2d_image_size");

    let kernel = uniform_matrix(3, 3, Some(5678)).widen();
    for size in [16usize, 32, 64, 128].iter() {
        let image = uniform_matrix(*size, *size, Some(1234)).widen();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| conv2d(black_box(&image), black_box(&kernel)).unwrap());
        });
    }

    group.finish();
}

#[cfg(feature = "parallel")]
fn bench_parallel(c: &mut Criterion) {
    use convolver::conv::conv2d_parallel;

    let mut group = c.benchmark_group("conv2d_parallel");

    let image = uniform_matrix(128, 128, Some(1234)).widen();
    let kernel = uniform_matrix(5, 5, Some(5678)).widen();

    group.bench_function("sequential", |b| {
        b.iter(|| conv2d(black_box(&image), black_box(&kernel)).unwrap());
    });
    group.bench_function("parallel", |b| {
        b.iter(|| conv2d_parallel(black_box(&image), black_box(&kernel)).unwrap());
    });

    group.finish();
}

#[cfg(feature = "parallel")]
criterion_group!(benches, bench_kernel_size, bench_image_size, bench_parallel);
#[cfg(not(feature = "parallel"))]
criterion_group!(benches, bench_kernel_size, bench_image_size);
criterion_main!(benches);
