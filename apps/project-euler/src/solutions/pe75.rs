use math::{gcd, isqrt};

/// Number of integer right triangles for every perimeter up to `limit`,
/// generated from primitive triples by Euclid's formula.
fn triangle_counts(limit: usize) -> Vec<u32> {
    let mut counts = vec![0u32; limit + 1];
    let m_limit = isqrt(limit as u64 / 2) as usize;

    for m in 2..=m_limit {
        for n in 1..m {
            if (m - n) % 2 == 0 || gcd(m as u64, n as u64) != 1 {
                continue;
            }
            let perimeter = 2 * m * (m + n);
            if perimeter > limit {
                break;
            }
            for k in (perimeter..=limit).step_by(perimeter) {
                counts[k] += 1;
            }
        }
    }
    counts
}

fn single_triangle_perimeters(limit: usize) -> usize {
    triangle_counts(limit).iter().filter(|&&c| c == 1).count()
}

/// PE75: Singular Integer Right Triangles
pub fn solve() -> String {
    single_triangle_perimeters(1_500_000).to_string()
}
