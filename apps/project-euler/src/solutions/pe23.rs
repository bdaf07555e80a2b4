use math::proper_divisor_sums;

/// Every integer above this can be written as the sum of two abundant numbers.
const LIMIT: usize = 28123;

/// PE23: Non-Abundant Sums
pub fn solve() -> String {
    non_abundant_sum(LIMIT).to_string()
}

fn non_abundant_sum(limit: usize) -> u64 {
    let sums = proper_divisor_sums(limit);
    let abundant: Vec<usize> = (12..=limit).filter(|&n| sums[n] > n as u64).collect();

    let mut expressible = vec![false; limit + 1];
    for (i, &a) in abundant.iter().enumerate() {
        for &b in &abundant[i..] {
            if a + b > limit {
                break;
            }
            expressible[a + b] = true;
        }
    }

    (1..=limit)
        .filter(|&n| !expressible[n])
        .map(|n| n as u64)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smallest_abundant_sum() {
        // 24 = 12 + 12 is the first expressible number, so 1..=24 sums 1..=23.
        assert_eq!(non_abundant_sum(24), (1..=23).sum::<u64>());
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "4179871");
    }
}
