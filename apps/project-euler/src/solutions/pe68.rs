use math::{combinations, next_permutation};

/// Largest description string of a magic n-gon ring over 1..=2n, among those
/// of exactly `len` digits.
///
/// Each line reads outer node, inner node, next inner node, and the
/// description starts from the line with the smallest outer node.
fn max_ring_string(n: usize, len: usize) -> Option<String> {
    let numbers: Vec<u32> = (1..=2 * n as u32).collect();
    let total: u32 = numbers.iter().sum();
    let mut best: Option<String> = None;

    for mut inner in combinations(&numbers, n) {
        // Each inner node is in two lines and each outer node in one.
        let inner_sum: u32 = inner.iter().sum();
        if (total + inner_sum) % n as u32 != 0 {
            continue;
        }
        let magic = (total + inner_sum) / n as u32;

        loop {
            let outer: Option<Vec<u32>> = (0..n)
                .map(|i| magic.checked_sub(inner[i] + inner[(i + 1) % n]))
                .collect();
            if let Some(outer) = outer {
                let mut used: Vec<u32> = inner.iter().chain(&outer).copied().collect();
                used.sort_unstable();
                if used == numbers {
                    let start = (0..n).min_by_key(|&i| outer[i]).unwrap_or(0);
                    let s: String = (0..n)
                        .map(|k| (start + k) % n)
                        .map(|i| format!("{}{}{}", outer[i], inner[i], inner[(i + 1) % n]))
                        .collect();
                    if s.len() == len && best.as_ref().is_none_or(|b| s > *b) {
                        best = Some(s);
                    }
                }
            }
            if !next_permutation(&mut inner) {
                break;
            }
        }
    }
    best
}

/// PE68: Magic 5-gon Ring
pub fn solve() -> String {
    max_ring_string(5, 16).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magic_3_gon() {
        assert_eq!(max_ring_string(3, 9).as_deref(), Some("432621513"));
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "6531031914842725");
    }
}
