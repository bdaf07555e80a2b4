use rayon::prelude::*;

/// The largest square digit sum of a number below ten million (7 × 9²).
const MAX_SUM: usize = 7 * 81;

fn square_digit_sum(mut n: u32) -> usize {
    let mut sum = 0;
    while n > 0 {
        let d = (n % 10) as usize;
        sum += d * d;
        n /= 10;
    }
    sum
}

/// For every value up to `MAX_SUM`, whether its chain arrives at 89.
fn arrives_at_89() -> Vec<bool> {
    let mut arrives = vec![false; MAX_SUM + 1];
    for start in 1..=MAX_SUM {
        let mut n = start;
        while n != 1 && n != 89 {
            n = square_digit_sum(n as u32);
        }
        arrives[start] = n == 89;
    }
    arrives
}

/// Starting numbers below `limit` (at most ten million) whose chain arrives
/// at 89. One step takes any of them into the cached range.
fn count_arriving(limit: u32) -> usize {
    let arrives = arrives_at_89();
    (1..limit)
        .into_par_iter()
        .filter(|&n| arrives[square_digit_sum(n)])
        .count()
}

/// PE92: Square Digit Chains
pub fn solve() -> String {
    count_arriving(10_000_000).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples() {
        let arrives = arrives_at_89();
        assert!(!arrives[44]);
        assert!(arrives[85]);
        assert!(!arrives[1]);
    }

    #[test]
    fn test_single_digits() {
        // Everything but 1 and 7 arrives at 89.
        assert_eq!(count_arriving(10), 7);
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "8581146");
    }
}
