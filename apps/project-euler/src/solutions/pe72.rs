use math::prime::totients;

/// Reduced proper fractions with denominator ≤ limit: the sum of φ(d) for
/// 2 ≤ d ≤ limit.
fn count_fractions(limit: usize) -> u64 {
    totients(limit).iter().skip(2).sum()
}

/// PE72: Counting Fractions
pub fn solve() -> String {
    count_fractions(1_000_000).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_up_to_eight() {
        assert_eq!(count_fractions(8), 21);
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "303963552391");
    }
}
