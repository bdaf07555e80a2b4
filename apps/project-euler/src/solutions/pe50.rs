use math::{primes_below, sieve};
use tracing::debug;

/// The prime below `limit` that is the sum of the most consecutive primes,
/// with the length of that run.
fn longest_prime_sum(limit: u32) -> (u32, usize) {
    let primes = primes_below(limit);
    let is_prime = sieve(limit as usize);

    let mut prefix = vec![0u64];
    for &p in &primes {
        prefix.push(prefix[prefix.len() - 1] + p as u64);
    }

    let mut best = (0, 0);
    for start in 0..primes.len() {
        // Runs no longer than the current best cannot improve it.
        for end in (start + best.1 + 1)..prefix.len() {
            let sum = prefix[end] - prefix[start];
            if sum >= limit as u64 {
                break;
            }
            if is_prime[sum as usize] {
                best = (sum as u32, end - start);
            }
        }
    }
    best
}

/// PE50: Consecutive Prime Sum
pub fn solve() -> String {
    let (prime, terms) = longest_prime_sum(1_000_000);
    debug!(prime, terms, "longest consecutive prime sum");
    prime.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples() {
        assert_eq!(longest_prime_sum(100), (41, 6));
        assert_eq!(longest_prime_sum(1000), (953, 21));
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "997651");
    }
}
