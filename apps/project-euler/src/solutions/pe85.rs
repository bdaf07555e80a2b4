use tracing::debug;

/// Rectangles contained in an m × n grid: T(m)·T(n).
fn rectangles(m: u64, n: u64) -> u64 {
    m * (m + 1) / 2 * (n * (n + 1) / 2)
}

/// Area of the grid whose rectangle count is nearest `target`.
fn closest_area(target: u64) -> u64 {
    let mut best = (u64::MAX, 0);
    let mut m = 1;
    while rectangles(m, m) <= target + best.0.min(target) {
        for n in m.. {
            let count = rectangles(m, n);
            let diff = count.abs_diff(target);
            if diff < best.0 {
                best = (diff, m * n);
                debug!(m, n, count, "closer grid");
            }
            if count > target {
                break;
            }
        }
        m += 1;
    }
    best.1
}

/// PE85: Counting Rectangles
pub fn solve() -> String {
    closest_area(2_000_000).to_string()
}
