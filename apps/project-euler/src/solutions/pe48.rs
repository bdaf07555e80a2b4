use math::mod_pow;

const MODULUS: u64 = 10_000_000_000;

/// Last ten digits of 1¹ + 2² + ... + n^n.
fn self_powers_tail(n: u64) -> u64 {
    (1..=n).fold(0, |acc, i| (acc + mod_pow(i, i, MODULUS)) % MODULUS)
}

/// PE48: Self Powers
pub fn solve() -> String {
    format!("{:010}", self_powers_tail(1000))
}
