use math::sqrt_expansion;

fn odd_periods(limit: u64) -> usize {
    (2..=limit)
        .filter_map(sqrt_expansion)
        .filter(|e| e.period.len() % 2 == 1)
        .count()
}

/// PE64: Odd Period Square Roots
pub fn solve() -> String {
    odd_periods(10_000).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_up_to_thirteen() {
        // √2, √3, √5, √6, √7, √8, √10, √11, √12, √13: four have odd periods.
        assert_eq!(odd_periods(13), 4);
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "1322");
    }
}
