use crate::error::{Error, Result};

/// PE9: Special Pythagorean Triplet
/// Find the product abc where a + b + c = 1000 and a² + b² = c².
pub fn solve() -> Result<String> {
    let (a, b, c) = triplet_with_sum(1000).ok_or(Error::NoSolution("no triplet sums to 1000"))?;
    Ok((a * b * c).to_string())
}

fn triplet_with_sum(perimeter: u64) -> Option<(u64, u64, u64)> {
    for a in 1..perimeter / 3 {
        for b in (a + 1)..=(perimeter - a) / 2 {
            let c = perimeter - a - b;
            if a * a + b * b == c * c {
                return Some((a, b, c));
            }
        }
    }
    None
}
