use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::path::Path;

use crate::data;
use crate::error::Result;

/// Minimal top-left to bottom-right path sum moving in all four directions,
/// by Dijkstra's algorithm with cell values as node weights.
fn min_path_four_ways(matrix: &[Vec<u64>]) -> u64 {
    let rows = matrix.len();
    let cols = matrix.first().map_or(0, Vec::len);
    if cols == 0 {
        return 0;
    }

    let mut dist = vec![vec![u64::MAX; cols]; rows];
    let mut heap = BinaryHeap::new();
    dist[0][0] = matrix[0][0];
    heap.push(Reverse((matrix[0][0], 0usize, 0usize)));

    while let Some(Reverse((d, i, j))) = heap.pop() {
        if (i, j) == (rows - 1, cols - 1) {
            return d;
        }
        if d > dist[i][j] {
            continue;
        }
        let neighbours = [
            i.checked_sub(1).map(|i| (i, j)),
            (i + 1 < rows).then_some((i + 1, j)),
            j.checked_sub(1).map(|j| (i, j)),
            (j + 1 < cols).then_some((i, j + 1)),
        ];
        for (ni, nj) in neighbours.into_iter().flatten() {
            let nd = d + matrix[ni][nj];
            if nd < dist[ni][nj] {
                dist[ni][nj] = nd;
                heap.push(Reverse((nd, ni, nj)));
            }
        }
    }
    dist[rows - 1][cols - 1]
}

/// PE83: Path Sum: Four Ways
pub fn solve(data_dir: &Path) -> Result<String> {
    let content = data::read(data_dir, "matrix.txt")?;
    let matrix = data::square_matrix(&content, "matrix.txt")?;
    Ok(min_path_four_ways(&matrix).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solutions::pe81::EXAMPLE_MATRIX;

    #[test]
    fn test_example() {
        let matrix = data::square_matrix(EXAMPLE_MATRIX, "example").unwrap();
        assert_eq!(min_path_four_ways(&matrix), 2297);
    }

    #[test]
    #[ignore = "needs data/matrix.txt"]
    fn test_solve() {
        let dir = data::default_dir();
        assert_eq!(solve(&dir).unwrap(), "425185");
    }
}
