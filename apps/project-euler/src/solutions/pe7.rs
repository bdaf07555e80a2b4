use math::nth_prime;

/// PE7: 10001st Prime
pub fn solve() -> String {
    nth_prime(10001).unwrap_or_default().to_string()
}
