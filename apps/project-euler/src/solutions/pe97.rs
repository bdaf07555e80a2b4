use math::mod_pow;

const MODULUS: u64 = 10_000_000_000;

/// Last ten digits of k·2^e + 1.
fn last_ten_digits(k: u64, e: u64) -> u64 {
    (k % MODULUS * mod_pow(2, e, MODULUS) + 1) % MODULUS
}

/// PE97: Large Non-Mersenne Prime
pub fn solve() -> String {
    format!("{:010}", last_ten_digits(28433, 7_830_457))
}
