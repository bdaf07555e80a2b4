use math::primes_below;

use crate::error::{Error, Result};

/// Ways to write every n up to `limit` as a sum of primes.
fn prime_partitions(limit: usize) -> Vec<u64> {
    let mut ways = vec![0u64; limit + 1];
    ways[0] = 1;
    for p in primes_below(limit as u32 + 1) {
        for j in p as usize..=limit {
            ways[j] += ways[j - p as usize];
        }
    }
    ways
}

/// First n with more than `threshold` prime partitions.
fn first_exceeding(threshold: u64, limit: usize) -> Option<usize> {
    // ways[0] = 1 counts the empty sum, not a partition.
    prime_partitions(limit)
        .iter()
        .skip(1)
        .position(|&w| w > threshold)
        .map(|i| i + 1)
}

/// PE77: Prime Summations
pub fn solve() -> Result<String> {
    first_exceeding(5000, 1000)
        .map(|n| n.to_string())
        .ok_or(Error::NoSolution("no value below 1000 has 5000 prime partitions"))
}
