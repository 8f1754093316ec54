//! Criterion micro-benchmarks for sparse array writes and reads.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use stowage_bench::symbol_table_keys;
use stowage_sparse::SparseArray;

/// Benchmark: 10K sequential writes into a fresh array.
fn bench_sparse_sequential_write(c: &mut Criterion) {
    c.bench_function("sparse_sequential_write_10k", |b| {
        b.iter(|| {
            let mut array: SparseArray<i32> = SparseArray::new();
            for i in 0..10_000u64 {
                array.set(i, i as i32);
            }
            black_box(array.node_count());
        });
    });
}

/// Benchmark: 1K dense keys plus 1K keys scattered over 2^40.
fn bench_sparse_scattered_write(c: &mut Criterion) {
    let keys = symbol_table_keys(1_000, 1_000, 1 << 40, 7);
    c.bench_function("sparse_scattered_write_2k", |b| {
        b.iter(|| {
            let mut array: SparseArray<i64> = SparseArray::new();
            for &key in &keys {
                array.set(key, 1);
            }
            black_box(array.height());
        });
    });
}

/// Benchmark: reads over a populated array, half hits and half misses.
fn bench_sparse_read(c: &mut Criterion) {
    let keys = symbol_table_keys(1_000, 1_000, 1 << 40, 7);
    let array: SparseArray<i64> = keys.iter().map(|&k| (k, k as i64)).collect();
    let misses = symbol_table_keys(0, 2_000, 1 << 40, 8);

    c.bench_function("sparse_read_4k", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for &key in keys.iter().chain(&misses) {
                sum = sum.wrapping_add(array.get(key));
            }
            black_box(sum);
        });
    });
}

criterion_group!(
    benches,
    bench_sparse_sequential_write,
    bench_sparse_scattered_write,
    bench_sparse_read
);
criterion_main!(benches);
