use math::gcd;

/// Right triangles OPQ with P, Q on the integer grid [0, n]².
///
/// Right angles at O give n² triangles. For a right angle at P, Q lies on the
/// line through P perpendicular to OP, stepped in lattice increments.
fn right_triangles(n: i64) -> u64 {
    let mut count = (n * n) as u64;
    let inside = |x: i64, y: i64| (0..=n).contains(&x) && (0..=n).contains(&y);

    for x in 0..=n {
        for y in 0..=n {
            if x == 0 && y == 0 {
                continue;
            }
            let g = gcd(x as u64, y as u64) as i64;
            let (dx, dy) = (-y / g, x / g);
            for dir in [1, -1] {
                let mut k = dir;
                while inside(x + k * dx, y + k * dy) {
                    count += 1;
                    k += dir;
                }
            }
        }
    }
    count
}

/// PE91: Right Triangles with Integer Coordinates
pub fn solve() -> String {
    right_triangles(50).to_string()
}
