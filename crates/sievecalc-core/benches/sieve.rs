//! Criterion benchmarks for the sieve kernels.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use sievecalc_core::local_sieve::LocalSieve;
use sievecalc_core::oracle::{divisor_candidates, is_prime_divisor};
use sievecalc_core::partition::partition;

fn sieve_worker(n: u64, workers: usize, rank: usize) -> usize {
    let range = partition(n, workers, rank).unwrap();
    let mut local = LocalSieve::new(range);
    for divisor in divisor_candidates(n) {
        if is_prime_divisor(divisor) {
            local.mark_multiples(divisor);
        }
    }
    local.prime_count()
}

fn bench_oracle(c: &mut Criterion) {
    let ns: Vec<u64> = vec![10_000, 1_000_000, 10_000_000];

    let mut group = c.benchmark_group("DivisorOracle");
    for &n in &ns {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| divisor_candidates(n).filter(|&d| is_prime_divisor(d)).count());
        });
    }
    group.finish();
}

fn bench_local_sieve(c: &mut Criterion) {
    let n = 1_000_000;

    let mut group = c.benchmark_group("LocalSieve");
    for &workers in &[1usize, 4, 16] {
        group.bench_with_input(BenchmarkId::new("last_rank", workers), &workers, |b, &w| {
            b.iter(|| sieve_worker(n, w, w - 1));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_oracle, bench_local_sieve);
criterion_main!(benches);
