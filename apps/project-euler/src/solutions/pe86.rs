use math::is_perfect_square;

/// Cuboids a × b × c with c = m the longest side and 1 ≤ a ≤ b ≤ m whose
/// shortest surface route has integer length.
///
/// The route is √(m² + (a+b)²), so each integer hypotenuse for s = a + b
/// contributes every split of s into a ≤ b ≤ m.
fn cuboids_with_longest_side(m: u64) -> u64 {
    (2..=2 * m)
        .filter(|&s| is_perfect_square(m * m + s * s))
        .map(|s| if s <= m { s / 2 } else { s / 2 + m + 1 - s })
        .sum()
}

fn first_m_exceeding(target: u64) -> u64 {
    let mut total = 0;
    let mut m = 0;
    while total <= target {
        m += 1;
        total += cuboids_with_longest_side(m);
    }
    m
}

/// PE86: Cuboid Route
pub fn solve() -> String {
    first_m_exceeding(1_000_000).to_string()
}
