use std::path::Path;

use super::pe18::max_path_sum;
use crate::data;
use crate::error::Result;

/// PE67: Maximum Path Sum II
pub fn solve(data_dir: &Path) -> Result<String> {
    let content = data::read(data_dir, "triangle.txt")?;
    let triangle = data::triangle(&content, "triangle.txt")?;
    Ok(max_path_sum(&triangle).to_string())
}
