use math::gcd;

/// Reduced fractions strictly between 1/3 and 1/2 with denominator ≤ limit.
fn count_between(limit: u64) -> usize {
    (2..=limit)
        .map(|d| (d / 3 + 1..=(d - 1) / 2).filter(|&n| gcd(n, d) == 1).count())
        .sum()
}

/// PE73: Counting Fractions in a Range
pub fn solve() -> String {
    count_between(12_000).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_up_to_eight() {
        // 3/8, 2/5, 3/7
        assert_eq!(count_between(8), 3);
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "7295372");
    }
}
