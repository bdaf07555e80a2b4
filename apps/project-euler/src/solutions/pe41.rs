use math::{is_prime, prev_permutation};
use tracing::debug;

use crate::error::{Error, Result};

/// PE41: Pandigital Prime
/// 8- and 9-digit pandigitals have digit sums divisible by 3, so the search
/// starts at 7 digits and walks permutations in descending order.
pub fn solve() -> Result<String> {
    for n in (1..=7u8).rev() {
        let mut digits: Vec<u8> = (1..=n).rev().collect();
        loop {
            let value = digits.iter().fold(0u64, |acc, &d| acc * 10 + d as u64);
            if is_prime(value) {
                debug!(digits = n, value, "largest pandigital prime");
                return Ok(value.to_string());
            }
            if !prev_permutation(&mut digits) {
                break;
            }
        }
    }
    Err(Error::NoSolution("no pandigital prime found"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example() {
        assert!(is_prime(2143));
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve().unwrap(), "7652413");
    }
}
