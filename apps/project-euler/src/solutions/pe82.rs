use std::path::Path;

use crate::data;
use crate::error::Result;

/// Minimal path sum from any cell of the left column to any cell of the
/// right column, moving up, down and right.
fn min_path_three_ways(matrix: &[Vec<u64>]) -> u64 {
    let rows = matrix.len();
    let cols = matrix.first().map_or(0, Vec::len);
    if cols == 0 {
        return 0;
    }
    let mut cost: Vec<u64> = matrix.iter().map(|row| row[0]).collect();

    for j in 1..cols {
        for i in 0..rows {
            cost[i] += matrix[i][j];
        }
        for i in 1..rows {
            cost[i] = cost[i].min(cost[i - 1] + matrix[i][j]);
        }
        for i in (0..rows - 1).rev() {
            cost[i] = cost[i].min(cost[i + 1] + matrix[i][j]);
        }
    }
    cost.into_iter().min().unwrap_or(0)
}

/// PE82: Path Sum: Three Ways
pub fn solve(data_dir: &Path) -> Result<String> {
    let content = data::read(data_dir, "matrix.txt")?;
    let matrix = data::square_matrix(&content, "matrix.txt")?;
    Ok(min_path_three_ways(&matrix).to_string())
}
