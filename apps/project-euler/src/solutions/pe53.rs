/// Count C(n, r) above `threshold` for 1 ≤ n ≤ `max_n`, building Pascal's
/// triangle with entries capped just above the threshold.
fn count_above(max_n: usize, threshold: u64) -> usize {
    let cap = threshold + 1;
    let mut row = vec![1u64];
    let mut count = 0;

    for _ in 1..=max_n {
        let mut next = Vec::with_capacity(row.len() + 1);
        next.push(1);
        for pair in row.windows(2) {
            next.push((pair[0] + pair[1]).min(cap));
        }
        next.push(1);
        count += next.iter().filter(|&&c| c > threshold).count();
        row = next;
    }
    count
}

/// PE53: Combinatoric Selections
pub fn solve() -> String {
    count_above(100, 1_000_000).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_above_million() {
        // C(23, 10) = 1144066 is the first value above one million.
        assert_eq!(count_above(22, 1_000_000), 0);
        assert_eq!(count_above(23, 1_000_000), 4);
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "4075");
    }
}
