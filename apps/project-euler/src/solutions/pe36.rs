use math::is_palindrome;

/// PE36: Double-base Palindromes
/// Even numbers end in 0 in binary and can never be palindromes there.
pub fn solve() -> String {
    (1..1_000_000u64)
        .step_by(2)
        .filter(|&n| is_palindrome(n, 10) && is_palindrome(n, 2))
        .sum::<u64>()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example() {
        assert!(is_palindrome(585, 10) && is_palindrome(585, 2));
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "872187");
    }
}
