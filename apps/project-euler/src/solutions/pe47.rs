use math::prime::distinct_prime_factor_counts;

use crate::error::{Error, Result};

/// First of `run` consecutive integers below `limit` that each have exactly
/// `run` distinct prime factors.
fn first_consecutive(run: usize, limit: usize) -> Option<usize> {
    let counts = distinct_prime_factor_counts(limit);
    let mut streak = 0;
    for (n, &c) in counts.iter().enumerate() {
        if c as usize == run {
            streak += 1;
            if streak == run {
                return Some(n + 1 - run);
            }
        } else {
            streak = 0;
        }
    }
    None
}

/// PE47: Distinct Primes Factors
pub fn solve() -> Result<String> {
    first_consecutive(4, 200_000)
        .map(|n| n.to_string())
        .ok_or(Error::NoSolution("no run of four below 200000"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples() {
        // 14 = 2 × 7, 15 = 3 × 5
        assert_eq!(first_consecutive(2, 100), Some(14));
        // 644 = 2² × 7 × 23, 645 = 3 × 5 × 43, 646 = 2 × 17 × 19
        assert_eq!(first_consecutive(3, 1000), Some(644));
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve().unwrap(), "134043");
    }
}
