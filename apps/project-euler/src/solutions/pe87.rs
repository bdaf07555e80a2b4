use math::{isqrt, primes_below};

/// Numbers below `limit` expressible as p² + q³ + r⁴ with p, q, r prime.
fn prime_power_triples(limit: u64) -> usize {
    let primes: Vec<u64> = primes_below(isqrt(limit) as u32 + 1)
        .into_iter()
        .map(u64::from)
        .collect();
    let powers = |e: u32| -> Vec<u64> {
        primes
            .iter()
            .map(|p| p.pow(e))
            .take_while(|&v| v < limit)
            .collect()
    };
    let (squares, cubes, fourths) = (powers(2), powers(3), powers(4));

    let mut sums = Vec::new();
    for &f in &fourths {
        for &c in cubes.iter().take_while(|&&c| f + c < limit) {
            for &s in squares.iter().take_while(|&&s| f + c + s < limit) {
                sums.push(f + c + s);
            }
        }
    }
    sums.sort_unstable();
    sums.dedup();
    sums.len()
}

/// PE87: Prime Power Triples
pub fn solve() -> String {
    prime_power_triples(50_000_000).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_fifty() {
        // 28, 33, 47, 49
        assert_eq!(prime_power_triples(50), 4);
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "1097343");
    }
}
