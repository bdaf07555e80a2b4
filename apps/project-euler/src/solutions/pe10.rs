use math::primes_below;

/// PE10: Summation of Primes
pub fn solve() -> String {
    let primes = primes_below(2_000_000);
    let sum: u64 = primes.iter().map(|&p| p as u64).sum();
    sum.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_ten() {
        assert_eq!(primes_below(10).iter().sum::<u32>(), 17);
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "142913828922");
    }
}
