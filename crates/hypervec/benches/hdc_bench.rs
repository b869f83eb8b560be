//! Hyperdimensional Operation Benchmarks
//!
//! This module benchmarks the core hypervector algebra (bind, bundle,
//! permute, distance) and the memory structures built on top of it, across
//! the dimensionalities the classic HDC workloads use.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hypervec::{encode_record, AssociativeMemory, BinaryVector, ContinuousItemMemory, ItemMemory, NumericVector};

// ============================================================================
// Helper Functions
// ============================================================================

fn seeded_binary(count: usize, dim: usize) -> Vec<BinaryVector> {
    (0..count)
        .map(|i| BinaryVector::from_seed(dim, i as u64))
        .collect()
}

// ============================================================================
// Vector Creation Benchmarks
// ============================================================================

fn bench_vector_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector_creation");

    for dim in [1024, 4096, 10_000] {
        group.throughput(Throughput::Elements(dim as u64));

        group.bench_with_input(BenchmarkId::new("binary_random", dim), &dim, |bench, &d| {
            bench.iter(|| BinaryVector::random(black_box(d)));
        });

        group.bench_with_input(BenchmarkId::new("binary_seeded", dim), &dim, |bench, &d| {
            bench.iter(|| BinaryVector::from_seed(black_box(d), 42));
        });

        group.bench_with_input(
            BenchmarkId::new("numeric_f32_random", dim),
            &dim,
            |bench, &d| {
                bench.iter(|| NumericVector::<f32>::random(black_box(d)));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Binding Benchmarks
// ============================================================================

fn bench_binding(c: &mut Criterion) {
    let mut group = c.benchmark_group("binding");

    let a = BinaryVector::from_seed(10_000, 1);
    let b = BinaryVector::from_seed(10_000, 2);
    group.bench_function("binary_bind_10k", |bench| {
        bench.iter(|| black_box(&a).bind(black_box(&b)));
    });

    let na = NumericVector::<f32>::from_seed(10_000, 1);
    let nb = NumericVector::<f32>::from_seed(10_000, 2);
    group.bench_function("numeric_f32_bind_10k", |bench| {
        bench.iter(|| black_box(&na).bind(black_box(&nb)));
    });

    group.finish();
}

// ============================================================================
// Bundling Benchmarks
// ============================================================================

fn bench_bundling(c: &mut Criterion) {
    let mut group = c.benchmark_group("bundling");

    for count in [3, 5, 10, 20, 50] {
        let vectors = seeded_binary(count, 10_000);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("binary_majority", count),
            &count,
            |bench, _| {
                bench.iter(|| BinaryVector::bundle(black_box(&vectors)));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Permutation Benchmarks
// ============================================================================

fn bench_permutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("permutation");

    let v = BinaryVector::from_seed(10_000, 3);
    group.bench_function("binary_rotate_1", |bench| {
        bench.iter(|| black_box(&v).permute(black_box(1)));
    });
    group.bench_function("binary_rotate_1000", |bench| {
        bench.iter(|| black_box(&v).permute(black_box(1000)));
    });

    group.finish();
}

// ============================================================================
// Distance Benchmarks
// ============================================================================

fn bench_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance");

    for dim in [1024, 10_000] {
        let a = BinaryVector::from_seed(dim, 1);
        let b = BinaryVector::from_seed(dim, 2);

        group.throughput(Throughput::Elements(dim as u64));
        group.bench_with_input(BenchmarkId::new("binary_hamming", dim), &dim, |bench, _| {
            bench.iter(|| black_box(&a).hamming(black_box(&b)));
        });
    }

    let na = NumericVector::<f32>::from_seed(10_000, 1);
    let nb = NumericVector::<f32>::from_seed(10_000, 2);
    group.bench_function("numeric_f32_cosine_10k", |bench| {
        bench.iter(|| black_box(&na).distance(black_box(&nb)));
    });

    group.finish();
}

// ============================================================================
// Associative Memory Benchmarks
// ============================================================================

fn bench_am_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("am_search");

    for size in [10, 100, 1000] {
        let am = AssociativeMemory::from_prototypes(seeded_binary(size, 10_000));
        let query = BinaryVector::from_seed(10_000, 999);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("binary", size), &size, |bench, _| {
            bench.iter(|| am.search(black_box(&query)));
        });
    }

    group.finish();
}

// ============================================================================
// Record Encoding Benchmarks
// ============================================================================

fn bench_record_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_encoding");
    // Voice-recognition shape: 617 feature channels over 100 amplitude levels
    group.sample_size(20);

    let im: ItemMemory<BinaryVector> = ItemMemory::with_seed(617, 10_000, 7);
    let cim = ContinuousItemMemory::with_seed(100, 10_000, 9).unwrap();
    let levels: Vec<usize> = (0..617).map(|i| (i * 7) % 100).collect();

    group.bench_function("voicehd_frame", |bench| {
        bench.iter(|| encode_record(&im, &cim, black_box(&levels)));
    });

    group.finish();
}

// ============================================================================
// Criterion Groups
// ============================================================================

criterion_group!(
    benches,
    bench_vector_creation,
    bench_binding,
    bench_bundling,
    bench_permutation,
    bench_distance,
    bench_am_search,
    bench_record_encoding,
);

criterion_main!(benches);
