use math::digits::num_digits;
use math::sieve;

/// All rotations of n's digits, starting with n itself.
fn rotations(n: u64) -> impl Iterator<Item = u64> {
    let len = num_digits(n);
    let top = 10u64.pow(len - 1);
    (0..len).scan(n, move |current, _| {
        let value = *current;
        *current = (value % 10) * top + value / 10;
        Some(value)
    })
}

fn count_circular_primes(limit: usize) -> usize {
    let is_prime = sieve(limit);
    (2..limit)
        .filter(|&n| rotations(n as u64).all(|r| is_prime[r as usize]))
        .count()
}

/// PE35: Circular Primes
pub fn solve() -> String {
    count_circular_primes(1_000_000).to_string()
}
