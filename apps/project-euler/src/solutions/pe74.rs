use std::collections::HashMap;

use math::{digit_factorial_sum, find_chain_length_cached};

fn chain_lengths_below(limit: u64) -> Vec<usize> {
    let mut cache = HashMap::new();
    (1..limit)
        .map(|n| find_chain_length_cached(n, |&x| digit_factorial_sum(x), &mut cache))
        .collect()
}

/// PE74: Digit Factorial Chains
pub fn solve() -> String {
    chain_lengths_below(1_000_000)
        .into_iter()
        .filter(|&len| len == 60)
        .count()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_chains() {
        let mut cache = HashMap::new();
        let mut length = |n| find_chain_length_cached(n, |&x| digit_factorial_sum(x), &mut cache);
        assert_eq!(length(69), 5);
        assert_eq!(length(78), 4);
        assert_eq!(length(540), 2);
        assert_eq!(length(145), 1);
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "402");
    }
}
