use math::{is_prime, sieve};
use tracing::debug;

/// Consecutive n = 0, 1, 2, ... for which n² + an + b is prime.
fn prime_run(a: i64, b: i64, table: &[bool]) -> u32 {
    let mut n = 0i64;
    loop {
        let value = n * n + a * n + b;
        let prime = match usize::try_from(value) {
            Ok(v) if v < table.len() => table[v],
            Ok(v) => is_prime(v as u64),
            Err(_) => false,
        };
        if !prime {
            return n as u32;
        }
        n += 1;
    }
}

/// PE27: Quadratic Primes
/// n = 0 forces b to be prime, which shrinks the search to |a| < 1000 and
/// prime b ≤ 1000.
pub fn solve() -> String {
    let table = sieve(100_000);
    let mut best = (0u32, 0i64, 0i64);

    for b in (2..=1000i64).filter(|&b| table[b as usize]) {
        for a in -999..1000i64 {
            let run = prime_run(a, b, &table);
            if run > best.0 {
                best = (run, a, b);
            }
        }
    }

    let (run, a, b) = best;
    debug!(a, b, run, "longest run of primes");
    (a * b).to_string()
}
