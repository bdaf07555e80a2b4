use math::proper_divisor_sums;
use tracing::debug;

/// Smallest member of the longest amicable chain whose elements all stay at
/// or below `limit`.
fn longest_chain_min(limit: usize) -> Option<usize> {
    let next = proper_divisor_sums(limit);
    // 0 unvisited, otherwise the walk that first reached the number.
    let mut walk_of = vec![0usize; limit + 1];
    let mut best: Option<(usize, usize)> = None;

    for start in 2..=limit {
        if walk_of[start] != 0 {
            continue;
        }
        let mut path = Vec::new();
        let mut n = start;
        while (2..=limit).contains(&n) && walk_of[n] == 0 {
            walk_of[n] = start;
            path.push(n);
            n = next[n] as usize;
        }
        // Only a return into this walk's own path closes a new cycle.
        if !(2..=limit).contains(&n) || walk_of[n] != start {
            continue;
        }
        let Some(pos) = path.iter().position(|&p| p == n) else {
            continue;
        };
        let cycle = &path[pos..];
        let len = cycle.len();
        if best.is_none_or(|(best_len, _)| len > best_len) {
            let smallest = cycle.iter().copied().min().unwrap_or(n);
            debug!(len, smallest, "longer chain");
            best = Some((len, smallest));
        }
    }
    best.map(|(_, smallest)| smallest)
}

/// PE95: Amicable Chains
pub fn solve() -> String {
    longest_chain_min(1_000_000)
        .map(|n| n.to_string())
        .unwrap_or_default()
}
