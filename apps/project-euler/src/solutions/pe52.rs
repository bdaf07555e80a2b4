use math::digit_signature;

use crate::error::{Error, Result};

/// PE52: Permuted Multiples
/// 6x must have as many digits as x, so x starts with a 1.
pub fn solve() -> Result<String> {
    for digits in 1..10 {
        let start = 10u64.pow(digits - 1);
        let end = start * 10 / 6;
        for x in start..=end {
            let sig = digit_signature(x);
            if (2..=6).all(|k| digit_signature(k * x) == sig) {
                return Ok(x.to_string());
            }
        }
    }
    Err(Error::NoSolution("no permuted multiple below 10^9"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example() {
        assert_eq!(digit_signature(125874), digit_signature(2 * 125874));
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve().unwrap(), "142857");
    }
}
