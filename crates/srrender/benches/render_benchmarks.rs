//! Benchmarks for histogram, Gaussian and movie rendering.
//!
//! Run with: cargo bench --package srrender -- gauss
//! Or: cargo bench --package srrender --bench render_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use srrender::{
    render_gauss_movie, render_gauss_parallel, render_gauss_sequential, render_hist_movie,
    render_hist_parallel, render_hist_sequential, Image, Movie, PointTable, Roi,
};
use test_utils::{roi, LocalizationGenerator, GENERATED_COLUMNS};

/// Localizations over a 12.8 um field with typical nm-scale uncertainties.
fn generate_points(n: usize, frames: usize) -> Vec<f32> {
    LocalizationGenerator::new(roi::FIELD_NM)
        .with_margin(0.01)
        .with_sigma(10.0, 40.0)
        .with_frames(frames)
        .with_seed(2024)
        .generate_f32(n)
}

fn field_roi() -> Roi<f32> {
    Roi::new(0.0, 12_800.0, 0.0, 12_800.0)
}

// =============================================================================
// HISTOGRAM BENCHMARKS
// =============================================================================

fn bench_hist(c: &mut Criterion) {
    let mut group = c.benchmark_group("hist");
    let roi = field_roi();

    // (points, pixels per side)
    let scenarios = [(10_000, 256), (100_000, 256), (1_000_000, 1024)];

    for (n, size) in scenarios {
        let data = generate_points(n, 1);
        let points = PointTable::new(&data, GENERATED_COLUMNS).unwrap();
        let mut image = Image::zeros(size, size);
        let id = format!("{}pts_{}px", n, size);

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("sequential", &id), &points, |b, points| {
            b.iter(|| {
                image.fill(0.0);
                render_hist_sequential(black_box(points), &roi, &mut image)
            });
        });
        group.bench_with_input(BenchmarkId::new("parallel", &id), &points, |b, points| {
            b.iter(|| {
                image.fill(0.0);
                render_hist_parallel(black_box(points), &roi, &mut image)
            });
        });
    }

    group.finish();
}

// =============================================================================
// GAUSSIAN BENCHMARKS
// =============================================================================

fn bench_gauss(c: &mut Criterion) {
    let mut group = c.benchmark_group("gauss");
    let roi = field_roi();

    let scenarios = [(10_000, 512), (100_000, 512), (100_000, 2048)];

    for (n, size) in scenarios {
        let data = generate_points(n, 1);
        let points = PointTable::new(&data, GENERATED_COLUMNS).unwrap();
        let mut image = Image::zeros(size, size);
        let id = format!("{}pts_{}px", n, size);

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("sequential", &id), &points, |b, points| {
            b.iter(|| render_gauss_sequential(black_box(points), &roi, &mut image, 5.0));
        });
        group.bench_with_input(BenchmarkId::new("parallel", &id), &points, |b, points| {
            b.iter(|| render_gauss_parallel(black_box(points), &roi, &mut image, 5.0));
        });
    }

    group.finish();
}

fn bench_sigma_accuracy(c: &mut Criterion) {
    let mut group = c.benchmark_group("gauss_sigma_accuracy");
    let roi = field_roi();
    let data = generate_points(50_000, 1);
    let points = PointTable::new(&data, GENERATED_COLUMNS).unwrap();
    let mut image = Image::zeros(1024, 1024);

    for accuracy in [2.0f32, 3.0, 5.0, 8.0] {
        group.bench_with_input(
            BenchmarkId::from_parameter(accuracy),
            &accuracy,
            |b, &accuracy| {
                b.iter(|| render_gauss_parallel(black_box(&points), &roi, &mut image, accuracy));
            },
        );
    }

    group.finish();
}

// =============================================================================
// MOVIE BENCHMARKS
// =============================================================================

fn bench_movie(c: &mut Criterion) {
    let mut group = c.benchmark_group("movie");
    let roi = field_roi();

    // (points, pixels per side, frames)
    let scenarios = [(100_000, 128, 16), (100_000, 128, 200), (500_000, 256, 64)];

    for (n, size, frames) in scenarios {
        let data = generate_points(n, frames);
        let points = PointTable::new(&data, GENERATED_COLUMNS).unwrap();
        let mut stack = Movie::zeros(size, size, frames);
        let id = format!("{}pts_{}px_{}f", n, size, frames);

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("hist", &id), &points, |b, points| {
            b.iter(|| {
                stack.fill(0.0);
                render_hist_movie(black_box(points), &roi, &mut stack)
            });
        });
        group.bench_with_input(BenchmarkId::new("gauss", &id), &points, |b, points| {
            b.iter(|| {
                stack.fill(0.0);
                render_gauss_movie(black_box(points), &roi, &mut stack, 5.0)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_hist,
    bench_gauss,
    bench_sigma_accuracy,
    bench_movie,
);
criterion_main!(benches);
