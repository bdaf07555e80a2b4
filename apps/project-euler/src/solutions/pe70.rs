use math::{digit_signature, primes_below};
use tracing::debug;

use crate::error::{Error, Result};

const LIMIT: u64 = 10_000_000;

/// PE70: Totient Permutation
/// n/φ(n) is smallest when n has few, large prime factors. A prime itself
/// has φ(p) = p − 1, never a digit permutation, so the search covers
/// products of two primes near √LIMIT.
pub fn solve() -> Result<String> {
    let primes: Vec<u64> = primes_below(5000)
        .into_iter()
        .filter(|&p| p > 1000)
        .map(u64::from)
        .collect();

    // Best (n, φ(n)), compared as fractions by cross-multiplication.
    let mut best: Option<(u64, u64)> = None;
    for (i, &p) in primes.iter().enumerate() {
        for &q in &primes[i..] {
            let n = p * q;
            if n >= LIMIT {
                break;
            }
            let phi = (p - 1) * (q - 1);
            if digit_signature(n) != digit_signature(phi) {
                continue;
            }
            if best.is_none_or(|(bn, bphi)| n * bphi < bn * phi) {
                best = Some((n, phi));
            }
        }
    }

    let (n, phi) = best.ok_or(Error::NoSolution("no totient permutation found"))?;
    debug!(n, phi, "minimal ratio");
    Ok(n.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example() {
        // φ(87109) = 79180
        assert_eq!(math::prime::totients(87109)[87109], 79180);
        assert_eq!(digit_signature(87109), digit_signature(79180));
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve().unwrap(), "8319823");
    }
}
