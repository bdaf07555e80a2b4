use math::primes;

/// n ≤ limit maximising n/φ(n).
///
/// n/φ(n) is the product of p/(p−1) over the distinct primes dividing n, so
/// the maximum is the largest primorial within the limit.
fn totient_maximum(limit: u64) -> u64 {
    let mut n = 1;
    for p in primes() {
        if n * p > limit {
            break;
        }
        n *= p;
    }
    n
}

/// PE69: Totient Maximum
pub fn solve() -> String {
    totient_maximum(1_000_000).to_string()
}
