use math::prime::largest_prime_factor;

/// PE3: Largest Prime Factor
/// Find the largest prime factor of 600851475143.
pub fn solve() -> String {
    largest_prime_factor(600_851_475_143)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example() {
        // 13195 = 5 * 7 * 13 * 29
        assert_eq!(largest_prime_factor(13195), Some(29));
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "6857");
    }
}
