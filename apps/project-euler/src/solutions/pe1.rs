/// PE1: Multiples of 3 or 5
/// Sum all the multiples of 3 or 5 below 1000.
pub fn solve() -> String {
    sum_of_multiples(1000).to_string()
}

fn sum_of_multiples(limit: u32) -> u32 {
    (1..limit).filter(|i| i % 3 == 0 || i % 5 == 0).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example() {
        // 3, 5, 6 and 9
        assert_eq!(sum_of_multiples(10), 23);
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "233168");
    }
}
