use math::proper_divisor_sums;
use tracing::debug;

/// PE21: Amicable Numbers
pub fn solve() -> String {
    amicable_sum(10_000).to_string()
}

fn amicable_sum(limit: usize) -> u64 {
    let d = proper_divisor_sums(limit);
    let mut sum = 0u64;

    for a in 2..limit {
        let b = d[a] as usize;
        if b != a && b < limit && d[b] as usize == a {
            debug!("{} and {} are amicable", a, b);
            sum += a as u64;
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_pair() {
        // 220 and 284 is the only pair below 1000
        assert_eq!(amicable_sum(1000), 504);
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "31626");
    }
}
