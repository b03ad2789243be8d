//! # Context Benchmarks
//!
//! Measures tensor product, gate application, measurement and density matrix.
//!
//! Run: `cargo bench --bench context_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use scotty_quantum::{
    Cnot, Hadamard, QuantumContext, Qubit, QubitRegister, Superposition, TargetGate,
};

fn uniform(n: usize) -> Superposition {
    let register: QubitRegister = (0..n).map(|_| Qubit::fifty_fifty()).collect();
    Superposition::from_register(register).expect("non-empty register")
}

/// Benchmark tensor product of two equal halves
fn bench_tensor_product(c: &mut Criterion) {
    let ctx = QuantumContext::new();
    let mut group = c.benchmark_group("tensor_product");

    for half in [1usize, 4, 7] {
        let left = uniform(half);
        let right = uniform(half);
        group.bench_with_input(BenchmarkId::new("compose", 2 * half), &(left, right), |b, (l, r)| {
            b.iter(|| black_box(ctx.compose(l, r)))
        });
    }

    group.finish();
}

/// Benchmark single- and two-qubit gate application
fn bench_apply_gate(c: &mut Criterion) {
    let ctx = QuantumContext::new();
    let mut group = c.benchmark_group("apply_gate");

    let h = TargetGate::new(&Hadamard, vec![0]);
    let cx = TargetGate::new(&Cnot, vec![0, 1]);

    for n in [4usize, 10, 14] {
        let sp = uniform(n);
        group.bench_with_input(BenchmarkId::new("hadamard", n), &sp, |b, s| {
            b.iter(|| black_box(ctx.apply_gate(s, &h)))
        });
        group.bench_with_input(BenchmarkId::new("cnot", n), &sp, |b, s| {
            b.iter(|| black_box(ctx.apply_gate(s, &cx)))
        });
    }

    group.finish();
}

/// Benchmark measurement sampling
fn bench_measure(c: &mut Criterion) {
    let ctx = QuantumContext::new();
    let mut group = c.benchmark_group("measure");
    let mut rng = StdRng::seed_from_u64(42);

    for n in [1usize, 8, 14] {
        let sp = uniform(n);
        group.bench_with_input(BenchmarkId::new("uniform", n), &sp, |b, s| {
            b.iter(|| black_box(ctx.measure(s, &mut rng)))
        });
    }

    group.finish();
}

/// Benchmark density matrix construction
fn bench_density_matrix(c: &mut Criterion) {
    let ctx = QuantumContext::new();
    let mut group = c.benchmark_group("density_matrix");

    for n in [2usize, 6, 8] {
        let sp = uniform(n);
        group.bench_with_input(BenchmarkId::new("pure", n), &sp, |b, s| {
            b.iter(|| black_box(ctx.density_matrix(s.amplitudes())))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_tensor_product,
    bench_apply_gate,
    bench_measure,
    bench_density_matrix,
);

criterion_main!(benches);
