use math::is_prime;
use tracing::debug;

fn is_truncatable(n: u64) -> bool {
    let mut right = n;
    while right > 0 {
        if !is_prime(right) {
            return false;
        }
        right /= 10;
    }

    let mut modulus = 10;
    while modulus < n {
        if !is_prime(n % modulus) {
            return false;
        }
        modulus *= 10;
    }
    true
}

/// PE37: Truncatable Primes
/// Builds right-truncatable primes digit by digit; only those need checking
/// from the left. The problem states there are exactly eleven.
pub fn solve() -> String {
    let mut frontier = vec![2u64, 3, 5, 7];
    let mut found = Vec::new();

    while !frontier.is_empty() {
        let mut next = Vec::new();
        for &p in &frontier {
            for d in [1, 3, 7, 9] {
                let candidate = p * 10 + d;
                if is_prime(candidate) {
                    if is_truncatable(candidate) {
                        found.push(candidate);
                    }
                    next.push(candidate);
                }
            }
        }
        frontier = next;
    }

    debug!("truncatable primes: {:?}", found);
    found.iter().sum::<u64>().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example() {
        assert!(is_truncatable(3797));
        assert!(!is_truncatable(3793));
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "748317");
    }
}
