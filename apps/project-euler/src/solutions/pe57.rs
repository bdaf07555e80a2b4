use math::BigInt;

/// Expansions of √2 among the first `limit` whose numerator has more digits
/// than the denominator.
fn heavy_numerators(limit: usize) -> usize {
    // 3/2, then n/d -> (n + 2d)/(n + d)
    let mut n = BigInt::from_u32(3);
    let mut d = BigInt::from_u32(2);
    let mut count = 0;
    for _ in 0..limit {
        if n.num_digits() > d.num_digits() {
            count += 1;
        }
        let next_d = &n + &d;
        n = &next_d + &d;
        d = next_d;
    }
    count
}

/// PE57: Square Root Convergents
pub fn solve() -> String {
    heavy_numerators(1000).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eighth_expansion() {
        // 1393/985 is the first with a longer numerator.
        assert_eq!(heavy_numerators(7), 0);
        assert_eq!(heavy_numerators(8), 1);
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "153");
    }
}
