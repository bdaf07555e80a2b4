use tracing::debug;

/// Length of the recurring cycle of 1/d, or 0 if the decimal terminates.
///
/// Long division repeats as soon as a remainder repeats, so the cycle length
/// is the distance between two sightings of the same remainder.
fn cycle_length(d: u32) -> usize {
    let mut seen_at = vec![None; d as usize];
    let mut remainder = 1 % d;
    let mut pos = 0usize;

    while remainder != 0 {
        if let Some(prev_pos) = seen_at[remainder as usize] {
            return pos - prev_pos;
        }
        seen_at[remainder as usize] = Some(pos);
        remainder = remainder * 10 % d;
        pos += 1;
    }
    0
}

/// PE26: Reciprocal Cycles
pub fn solve() -> String {
    let (best_d, best_cycle) = (2..1000)
        .map(|d| (d, cycle_length(d)))
        .max_by_key(|&(d, len)| (len, std::cmp::Reverse(d)))
        .unwrap_or_default();

    debug!("Best cycle length: {}", best_cycle);
    best_d.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_length() {
        assert_eq!(cycle_length(2), 0); // 0.5
        assert_eq!(cycle_length(3), 1); // 0.(3)
        assert_eq!(cycle_length(6), 1); // 0.1(6)
        assert_eq!(cycle_length(7), 6); // 0.(142857)
        assert_eq!(cycle_length(8), 0); // 0.125
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "983");
    }
}
