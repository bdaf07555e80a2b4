use math::{Primes, TriangleNumbers, count_divisors};
use tracing::debug;

/// PE12: Highly Divisible Triangular Number
/// First triangle number with over five hundred divisors.
pub fn solve() -> String {
    first_triangle_with_divisors(500).to_string()
}

fn first_triangle_with_divisors(min_divisors: u32) -> u64 {
    let mut primes: Vec<u64> = Vec::new();
    let mut prime_iter = Primes::new();

    for (i, t) in TriangleNumbers::new().enumerate() {
        // Ensure we have enough primes (up to sqrt(t))
        let sqrt_t = (t as f64).sqrt() as u64;
        while primes.last().is_none_or(|&p| p < sqrt_t) {
            primes.extend(prime_iter.next());
        }

        let divisor_count = count_divisors(t, &primes);

        if divisor_count > min_divisors.saturating_sub(100) {
            debug!("T({}) = {}, divisors = {}", i + 1, t, divisor_count);
        }

        if divisor_count > min_divisors {
            return t;
        }
    }

    unreachable!("triangle numbers are unbounded")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_over_five_divisors() {
        // 28: 1, 2, 4, 7, 14, 28
        assert_eq!(first_triangle_with_divisors(5), 28);
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "76576500");
    }
}
