use math::factorial;
use tracing::debug;

/// PE24: Lexicographic Permutations
/// Read the millionth permutation of 0..=9 off the factorial number system.
pub fn solve() -> String {
    nth_permutation(10, 999_999)
}

/// The `index`-th (0-based) lexicographic permutation of the digits `0..n`.
fn nth_permutation(n: u64, mut index: u64) -> String {
    let mut available: Vec<u64> = (0..n).collect();
    let mut result = String::new();

    for i in 0..n {
        let fact = factorial(n - 1 - i);
        let pick = index / fact;
        index %= fact;

        let digit = available.remove(pick as usize);
        result.push_str(&digit.to_string());

        debug!(
            "Step {}: fact={}, index={}, picked={}, remaining={}",
            i + 1,
            fact,
            pick,
            digit,
            index
        );
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permutations_of_three() {
        let all: Vec<String> = (0..6).map(|i| nth_permutation(3, i)).collect();
        assert_eq!(all, vec!["012", "021", "102", "120", "201", "210"]);
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "2783915460");
    }
}
