use math::BigInt;

const MAX_ITERATIONS: usize = 50;

fn is_lychrel(n: u64) -> bool {
    let mut current = BigInt::from_u64(n);
    for _ in 0..MAX_ITERATIONS {
        current = &current + &current.reversed();
        if current.is_palindrome() {
            return false;
        }
    }
    true
}

/// PE55: Lychrel Numbers
pub fn solve() -> String {
    (1..10_000).filter(|&n| is_lychrel(n)).count().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples() {
        assert!(!is_lychrel(47));
        assert!(!is_lychrel(349));
        assert!(is_lychrel(196));
        // 4994 is a palindrome but still a Lychrel number.
        assert!(is_lychrel(4994));
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "249");
    }
}
