use math::{BigInt, is_perfect_square};

/// Sum of the first `digits` decimal digits of √n, by Jarvis's
/// subtraction method.
///
/// `b` converges on the square root's digits followed by a trailing 5, so a
/// few guard digits past `digits` keep the leading ones exact.
fn root_digit_sum(n: u32, digits: usize) -> u64 {
    let ten = BigInt::from_u32(10);
    let forty_five = BigInt::from_u32(45);
    let mut a = BigInt::from_u32(5 * n);
    let mut b = BigInt::from_u32(5);

    while b.num_digits() < digits + 5 {
        if a >= b {
            a = &a - &b;
            b = &b + &ten;
        } else {
            a = a * 100u32;
            b = &(b * 10u32) - &forty_five;
        }
    }
    b.digits().take(digits).map(u64::from).sum()
}

/// PE80: Square Root Digital Expansion
pub fn solve() -> String {
    (1..=100u32)
        .filter(|&n| !is_perfect_square(n as u64))
        .map(|n| root_digit_sum(n, 100))
        .sum::<u64>()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_two() {
        assert_eq!(root_digit_sum(2, 100), 475);
        // √2 = 1.41421356...
        assert_eq!(root_digit_sum(2, 5), 1 + 4 + 1 + 4 + 2);
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "40886");
    }
}
