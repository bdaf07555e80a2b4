use math::big_factorial;
use tracing::debug;

/// PE20: Factorial Digit Sum
pub fn solve() -> String {
    let result = big_factorial(100);
    debug!("100! = {}", result);
    result.digit_sum().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_factorial_digit_sum() {
        // 10! = 3628800, digit sum = 3+6+2+8+8+0+0 = 27
        assert_eq!(math::big_factorial(10).digit_sum(), 27);
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "648");
    }
}
