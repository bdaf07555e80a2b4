use math::continued_fraction::{convergents, e_terms};

/// Digit sum of the numerator of the n-th convergent (1-based) of e.
fn numerator_digit_sum(n: usize) -> u64 {
    convergents(e_terms())
        .nth(n - 1)
        .map_or(0, |(h, _)| h.digit_sum())
}

/// PE65: Convergents of e
pub fn solve() -> String {
    numerator_digit_sum(100).to_string()
}
