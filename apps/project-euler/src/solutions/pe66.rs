use math::{BigInt, convergents, sqrt_expansion};
use tracing::debug;

/// Minimal x solving x² − D·y² = 1, or `None` when D is a perfect square.
///
/// The fundamental solution is the convergent just before the end of the
/// first period, or of the second period when the period length is odd.
fn minimal_x(d: u64) -> Option<BigInt> {
    let expansion = sqrt_expansion(d)?;
    let r = expansion.period.len();
    let index = if r % 2 == 0 { r - 1 } else { 2 * r - 1 };
    convergents(expansion.terms())
        .nth(index)
        .map(|(h, _)| h)
}

/// PE66: Diophantine Equation
pub fn solve() -> String {
    let (d, x) = (2..=1000u64)
        .filter_map(|d| minimal_x(d).map(|x| (d, x)))
        .max_by(|a, b| a.1.cmp(&b.1))
        .unwrap_or((0, BigInt::zero()));
    debug!(d, x = %x, "largest minimal solution");
    d.to_string()
}
