// PE67 is a more complex version of this problem with a larger triangle.

use crate::data;
use crate::error::Result;

const TRIANGLE: &str = "
75
95 64
17 47 82
18 35 87 10
20 04 82 47 65
19 01 23 75 03 34
88 02 77 73 07 63 67
99 65 04 28 06 16 70 92
41 41 26 56 83 40 80 70 33
41 48 72 33 47 32 37 16 94 29
53 71 44 65 25 43 91 52 97 51 14
70 11 33 28 77 73 17 78 39 68 17 57
91 71 52 38 17 14 91 43 58 50 27 29 48
63 66 04 68 89 53 67 30 73 16 69 87 40 31
04 62 98 27 23 09 70 98 73 93 38 53 60 04 23
";

/// Maximum top-to-bottom total, folding each row into the one above it.
pub(crate) fn max_path_sum(triangle: &[Vec<u32>]) -> u32 {
    let Some(last) = triangle.last() else {
        return 0;
    };
    let mut best = last.clone();
    for row in triangle.iter().rev().skip(1) {
        best = row
            .iter()
            .enumerate()
            .map(|(j, &v)| v + best[j].max(best[j + 1]))
            .collect();
    }
    best[0]
}

pub fn solve() -> Result<String> {
    let triangle = data::triangle(TRIANGLE, "inline triangle")?;
    Ok(max_path_sum(&triangle).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example() {
        let triangle = vec![vec![3], vec![7, 4], vec![2, 4, 6], vec![8, 5, 9, 3]];
        assert_eq!(max_path_sum(&triangle), 23);
    }

    #[test]
    fn test_empty_triangle() {
        assert_eq!(max_path_sum(&[]), 0);
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve().unwrap(), "1074");
    }
}
