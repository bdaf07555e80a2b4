use math::BigInt;

/// PE16: Power Digit Sum
pub fn solve() -> String {
    power_of_two_digit_sum(1000).to_string()
}

fn power_of_two_digit_sum(power: u32) -> u64 {
    let mut n = BigInt::from_u32(1);
    for _ in 0..power {
        n = n * 2;
    }
    n.digit_sum()
}
