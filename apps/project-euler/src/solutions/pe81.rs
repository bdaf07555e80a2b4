use std::path::Path;

use crate::data;
use crate::error::Result;

#[cfg(test)]
pub(crate) const EXAMPLE_MATRIX: &str = "\
131,673,234,103,18
201,96,342,965,150
630,803,746,422,111
537,699,497,121,956
805,732,524,37,331
";

/// Minimal top-left to bottom-right path sum moving only right and down.
pub(crate) fn min_path_right_down(matrix: &[Vec<u64>]) -> u64 {
    let mut row_cost: Vec<u64> = Vec::new();
    for row in matrix {
        let mut next = Vec::with_capacity(row.len());
        for (j, &cell) in row.iter().enumerate() {
            let from_above = row_cost.get(j).copied();
            let from_left = j.checked_sub(1).map(|k| next[k]);
            let best = match (from_above, from_left) {
                (Some(a), Some(l)) => a.min(l),
                (Some(a), None) => a,
                (None, Some(l)) => l,
                (None, None) => 0,
            };
            next.push(best + cell);
        }
        row_cost = next;
    }
    row_cost.last().copied().unwrap_or(0)
}

/// PE81: Path Sum: Two Ways
pub fn solve(data_dir: &Path) -> Result<String> {
    let content = data::read(data_dir, "matrix.txt")?;
    let matrix = data::square_matrix(&content, "matrix.txt")?;
    Ok(min_path_right_down(&matrix).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example() {
        let matrix = data::square_matrix(EXAMPLE_MATRIX, "example").unwrap();
        assert_eq!(min_path_right_down(&matrix), 2427);
    }

    #[test]
    #[ignore = "needs data/matrix.txt"]
    fn test_solve() {
        let dir = data::default_dir();
        assert_eq!(solve(&dir).unwrap(), "427337");
    }
}
