use math::{digit_factorial_sum, factorial};
use tracing::debug;

/// PE34: Digit Factorials
/// An 8-digit number's digit factorial sum is at most 8·9! which has only 7
/// digits, so nothing above 7·9! can qualify.
pub fn solve() -> String {
    let limit = 7 * factorial(9);
    let curious: Vec<u64> = (10..=limit)
        .filter(|&n| digit_factorial_sum(n) == n)
        .collect();
    debug!("curious numbers: {:?}", curious);
    curious.iter().sum::<u64>().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example() {
        assert_eq!(digit_factorial_sum(145), 145);
        assert_eq!(digit_factorial_sum(40585), 40585);
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "40730");
    }
}
