use math::sieve;

use crate::error::{Error, Result};

/// True if n = p + 2k² for some prime p and k ≥ 1.
fn is_goldbach_sum(n: usize, is_prime: &[bool]) -> bool {
    (1..)
        .map(|k| 2 * k * k)
        .take_while(|&twice_square| twice_square < n)
        .any(|twice_square| is_prime[n - twice_square])
}

/// PE46: Goldbach's Other Conjecture
pub fn solve() -> Result<String> {
    const LIMIT: usize = 10_000;
    let is_prime = sieve(LIMIT);

    (9..=LIMIT)
        .step_by(2)
        .find(|&n| !is_prime[n] && !is_goldbach_sum(n, &is_prime))
        .map(|n| n.to_string())
        .ok_or(Error::NoSolution("no counterexample below the search limit"))
}
