use criterion::{Criterion, criterion_group, criterion_main};
use math::{
    is_prime, is_prime_u64, primes_below, primes_below_parallel_inner,
    primes_below_parallel_outer, sieve,
};

fn sieve_benchmarks(c: &mut Criterion) {
    for &n in &[10_000u32, 1_000_000, 10_000_000] {
        let mut group = c.benchmark_group(format!("primes_below_n_{}", n));
        if n >= 10_000_000 {
            group.sample_size(10);
        }
        group.bench_function("sequential", |b| b.iter(|| primes_below(n)));
        group.bench_function("parallel_outer", |b| {
            b.iter(|| primes_below_parallel_outer(n))
        });
        group.bench_function("parallel_inner", |b| {
            b.iter(|| primes_below_parallel_inner(n))
        });
        group.bench_function("table", |b| b.iter(|| sieve(n as usize)));
        group.finish();
    }
}

fn primality_benchmarks(c: &mut Criterion) {
    // Concatenated prime pairs reach eight digits.
    let candidates: Vec<u64> = (99_990_001..99_990_001 + 2_000).step_by(2).collect();

    let mut group = c.benchmark_group("primality_8_digit");
    group.bench_function("trial_division", |b| {
        b.iter(|| candidates.iter().filter(|&&n| is_prime(n)).count())
    });
    group.bench_function("miller_rabin", |b| {
        b.iter(|| candidates.iter().filter(|&&n| is_prime_u64(n)).count())
    });
    group.finish();
}

criterion_group!(benches, sieve_benchmarks, primality_benchmarks);
criterion_main!(benches);
