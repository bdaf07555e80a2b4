use tracing::debug;

const LIMIT: usize = 1_000_000;

fn transform(n: u64) -> u64 {
    if n % 2 == 0 { n / 2 } else { 3 * n + 1 }
}

/// Collatz chain lengths (counting both ends) for every start below `limit`.
///
/// Values that climb past `limit` are followed without caching; the walk
/// stops as soon as it drops back onto a cached start.
fn chain_lengths(limit: usize) -> Vec<u32> {
    let mut memo = vec![0u32; limit];
    if limit > 1 {
        memo[1] = 1;
    }

    for start in 2..limit {
        let mut n = start as u64;
        let mut steps = 0;

        while n as usize >= limit || memo[n as usize] == 0 {
            n = transform(n);
            steps += 1;
        }

        memo[start] = steps + memo[n as usize];
    }
    memo
}

/// PE14: Longest Collatz Sequence
pub fn solve() -> String {
    let memo = chain_lengths(LIMIT);

    // Find the number with longest path in range 1..LIMIT
    let (max_start, max_length) = memo
        .iter()
        .enumerate()
        .skip(1)
        .fold((1, 1), |best, (n, &length)| {
            if length > best.1 { (n, length) } else { best }
        });

    debug!(max_start, max_length, "longest chain");
    max_start.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_from_thirteen() {
        // 13 → 40 → 20 → 10 → 5 → 16 → 8 → 4 → 2 → 1
        assert_eq!(chain_lengths(14)[13], 10);
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "837799");
    }
}
