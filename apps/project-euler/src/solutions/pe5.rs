use math::lcm;

/// PE5: Smallest Multiple
/// Find the smallest positive number evenly divisible by all numbers from 1 to 20.
/// This is the LCM of 1..20.
pub fn solve() -> String {
    let result = (1u64..=20).fold(1, lcm);
    result.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "232792560");
    }
}
