use math::fibonacci::first_with_digits;

/// PE25: 1000-digit Fibonacci Number
pub fn solve() -> String {
    first_with_digits(1000).to_string()
}
