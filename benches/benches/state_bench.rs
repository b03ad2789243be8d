//! # State Benchmarks
//!
//! Measures construction of joint states and binary encoding of basis indices.
//! State construction is O(2^n) in the qubit count.
//!
//! Run: `cargo bench --bench state_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scotty_core::{from_bits, to_padded_binary};
use scotty_quantum::{Qubit, QubitRegister, Superposition};

/// Benchmark register → superposition (fold of tensor products)
fn bench_from_register(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_register");

    for n in [2usize, 6, 10, 14] {
        let register: QubitRegister = (0..n).map(|_| Qubit::fifty_fifty()).collect();
        group.bench_with_input(BenchmarkId::new("fifty_fifty", n), &register, |b, r| {
            b.iter(|| black_box(Superposition::from_register(r.clone())))
        });
    }

    group.finish();
}

/// Benchmark padded binary encoding
fn bench_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");

    group.bench_function("to_padded_binary_16", |b| {
        b.iter(|| black_box(to_padded_binary(black_box(40_503), 16)))
    });

    let bits = to_padded_binary(40_503, 16).unwrap_or_default();
    group.bench_function("from_bits_16", |b| {
        b.iter(|| black_box(from_bits(black_box(&bits))))
    });

    group.finish();
}

criterion_group!(benches, bench_from_register, bench_encoding);

criterion_main!(benches);
