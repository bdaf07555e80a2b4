/// Numerator of the largest fraction n/d < 3/7 with d ≤ limit.
fn left_of_three_sevenths(limit: u64) -> u64 {
    let (mut best_n, mut best_d) = (0, 1);
    for d in 2..=limit {
        let n = (3 * d - 1) / 7;
        if n * best_d > best_n * d {
            best_n = n;
            best_d = d;
        }
    }
    best_n
}

/// PE71: Ordered Fractions
pub fn solve() -> String {
    left_of_three_sevenths(1_000_000).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_up_to_eight() {
        // 2/5 is immediately left of 3/7.
        assert_eq!(left_of_three_sevenths(8), 2);
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "428570");
    }
}
