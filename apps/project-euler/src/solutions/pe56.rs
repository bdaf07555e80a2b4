use math::BigInt;

/// PE56: Powerful Digit Sum
pub fn solve() -> String {
    let mut best = 0;
    for a in 1..100u32 {
        let mut power = BigInt::from_u32(1);
        for _ in 1..100 {
            power = &power * a;
            best = best.max(power.digit_sum());
        }
    }
    best.to_string()
}
