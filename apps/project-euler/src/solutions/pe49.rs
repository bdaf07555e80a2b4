use math::{digit_signature, sieve};
use tracing::debug;

/// Four-digit arithmetic sequences (step 3330) of primes that are digit
/// permutations of one another.
fn prime_permutation_sequences() -> Vec<[usize; 3]> {
    let is_prime = sieve(10_000);
    let mut found = Vec::new();

    for a in 1000..10_000 - 2 * 3330 {
        let (b, c) = (a + 3330, a + 6660);
        if !(is_prime[a] && is_prime[b] && is_prime[c]) {
            continue;
        }
        let sig = digit_signature(a as u64);
        if sig == digit_signature(b as u64) && sig == digit_signature(c as u64) {
            found.push([a, b, c]);
        }
    }
    found
}

/// PE49: Prime Permutations
pub fn solve() -> String {
    let sequences = prime_permutation_sequences();
    debug!("sequences: {:?}", sequences);
    sequences
        .iter()
        .find(|s| s[0] != 1487)
        .map(|s| s.iter().map(ToString::to_string).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sequence() {
        assert!(prime_permutation_sequences().contains(&[1487, 4817, 8147]));
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "296962999629");
    }
}
