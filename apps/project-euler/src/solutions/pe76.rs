/// Ways to write n as a sum of at least two positive integers.
fn partitions_into_two_or_more(n: usize) -> u64 {
    let mut ways = vec![0u64; n + 1];
    ways[0] = 1;
    for part in 1..n {
        for j in part..=n {
            ways[j] += ways[j - part];
        }
    }
    ways[n]
}

/// PE76: Counting Summations
pub fn solve() -> String {
    partitions_into_two_or_more(100).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five() {
        assert_eq!(partitions_into_two_or_more(5), 6);
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "190569291");
    }
}
