use tracing::debug;

fn digit_power_sum(mut n: u64, power: u32) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += (n % 10).pow(power);
        n /= 10;
    }
    sum
}

/// Numbers equal to the sum of the given power of their digits.
///
/// A d-digit number is at least 10^(d-1) while its digit sum is at most
/// d·9^power, so the search stops at the first d where the bound falls behind.
fn digit_power_numbers(power: u32) -> Vec<u64> {
    let mut digits = 1;
    while 10u64.pow(digits - 1) <= digits as u64 * 9u64.pow(power) {
        digits += 1;
    }
    let limit = digits as u64 * 9u64.pow(power);

    (10..=limit)
        .filter(|&n| digit_power_sum(n, power) == n)
        .collect()
}

/// PE30: Digit Fifth Powers
pub fn solve() -> String {
    let matches = digit_power_numbers(5);
    debug!("Numbers: {:?}", matches);
    matches.iter().sum::<u64>().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_fifth_power_sum() {
        // 4150 = 4^5 + 1^5 + 5^5 + 0^5 = 1024 + 1 + 3125 + 0 = 4150
        assert_eq!(digit_power_sum(4150, 5), 4150);
    }

    #[test]
    fn test_fourth_powers() {
        assert_eq!(digit_power_numbers(4), vec![1634, 8208, 9474]);
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "443839");
    }
}
