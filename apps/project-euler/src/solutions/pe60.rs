use math::digits::concat;
use math::{is_prime_u64, primes_below};
use tracing::debug;

use crate::error::{Error, Result};

fn compatible(a: u64, b: u64) -> bool {
    is_prime_u64(concat(a, b)) && is_prime_u64(concat(b, a))
}

struct CliqueSearch {
    primes: Vec<u64>,
    /// For each prime index, the larger indices it pairs with, ascending.
    neighbours: Vec<Vec<usize>>,
    size: usize,
    best: Option<u64>,
}

impl CliqueSearch {
    fn new(limit: u32, size: usize) -> Self {
        // 2 and 5 end every concatenation they follow in a non-prime.
        let primes: Vec<u64> = primes_below(limit)
            .into_iter()
            .filter(|&p| p != 2 && p != 5)
            .map(u64::from)
            .collect();
        let neighbours = (0..primes.len())
            .map(|i| {
                (i + 1..primes.len())
                    .filter(|&j| compatible(primes[i], primes[j]))
                    .collect()
            })
            .collect();
        CliqueSearch {
            primes,
            neighbours,
            size,
            best: None,
        }
    }

    fn extend(&mut self, depth: usize, sum: u64, candidates: &[usize]) {
        if depth == self.size {
            if self.best.is_none_or(|best| sum < best) {
                debug!(sum, "found a smaller set");
                self.best = Some(sum);
            }
            return;
        }

        for (pos, &c) in candidates.iter().enumerate() {
            let remaining = (self.size - depth) as u64;
            // Candidates ascend, so every later set is at least this large.
            if self
                .best
                .is_some_and(|best| sum + self.primes[c] * remaining >= best)
            {
                break;
            }
            let next: Vec<usize> = candidates[pos + 1..]
                .iter()
                .copied()
                .filter(|n| self.neighbours[c].binary_search(n).is_ok())
                .collect();
            if next.len() + 1 >= self.size - depth {
                self.extend(depth + 1, sum + self.primes[c], &next);
            }
        }
    }

    fn run(mut self) -> Option<u64> {
        let all: Vec<usize> = (0..self.primes.len()).collect();
        self.extend(0, 0, &all);
        self.best
    }
}

/// Lowest sum of `size` primes below `limit` where every pair concatenates
/// to a prime in both orders.
fn lowest_sum(size: usize, limit: u32) -> Option<u64> {
    CliqueSearch::new(limit, size).run()
}

/// PE60: Prime Pair Sets
pub fn solve() -> Result<String> {
    lowest_sum(5, 10_000)
        .map(|s| s.to_string())
        .ok_or(Error::NoSolution("no prime pair set below 10000"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compatible() {
        // 7109 and 1097 are both prime.
        assert!(compatible(7, 109));
        assert!(!compatible(7, 11));
    }

    #[test]
    fn test_four_primes() {
        // {3, 7, 109, 673}
        assert_eq!(lowest_sum(4, 1000), Some(792));
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve().unwrap(), "26033");
    }
}
