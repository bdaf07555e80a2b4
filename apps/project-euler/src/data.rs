//! Loading and parsing of the bundled problem data files.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};

/// `apps/project-euler/data`, where the data files live in a checkout.
pub fn default_dir() -> PathBuf {
    [env!("CARGO_MANIFEST_DIR"), "data"].iter().collect()
}

pub fn read(dir: &Path, file: &str) -> Result<String> {
    let path = dir.join(file);
    let content = fs::read_to_string(&path).map_err(|source| Error::Io {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "loaded data file");
    Ok(content)
}

/// Split a single line of comma-separated, double-quoted words:
/// `"MARY","PATRICIA",...`.
pub fn quoted_list(content: &str) -> Vec<&str> {
    content
        .trim()
        .split(',')
        .map(|w| w.trim().trim_matches('"'))
        .filter(|w| !w.is_empty())
        .collect()
}

/// Parse one row of numbers separated by `sep` (`None` for whitespace).
pub fn number_row<T: FromStr>(
    line: &str,
    sep: Option<char>,
    file: &'static str,
    line_no: usize,
) -> Result<Vec<T>> {
    let fields: Box<dyn Iterator<Item = &str>> = match sep {
        Some(sep) => Box::new(line.split(sep)),
        None => Box::new(line.split_whitespace()),
    };
    fields
        .map(|field| {
            let field = field.trim();
            field
                .parse()
                .map_err(|_| Error::parse(file, line_no, format!("invalid number {:?}", field)))
        })
        .collect()
}

/// Parse a grid of numbers, one row per non-empty line.
pub fn number_grid<T: FromStr>(
    content: &str,
    sep: Option<char>,
    file: &'static str,
) -> Result<Vec<Vec<T>>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| number_row(line, sep, file, i + 1))
        .collect()
}

/// Like [`number_grid`], but every row must have the same width as the number
/// of rows.
pub fn square_matrix(content: &str, file: &'static str) -> Result<Vec<Vec<u64>>> {
    let matrix: Vec<Vec<u64>> = number_grid(content, Some(','), file)?;
    if matrix.is_empty() {
        return Err(Error::parse(file, 1, "empty matrix"));
    }
    for (i, row) in matrix.iter().enumerate() {
        if row.len() != matrix.len() {
            return Err(Error::parse(
                file,
                i + 1,
                format!("expected {} columns, found {}", matrix.len(), row.len()),
            ));
        }
    }
    Ok(matrix)
}

/// A number triangle: row `i` (0-based) must hold exactly `i + 1` entries.
pub fn triangle(content: &str, file: &'static str) -> Result<Vec<Vec<u32>>> {
    let mut rows = Vec::new();
    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row: Vec<u32> = number_row(line, None, file, i + 1)?;
        if row.len() != rows.len() + 1 {
            return Err(Error::parse(
                file,
                i + 1,
                format!("expected {} entries, found {}", rows.len() + 1, row.len()),
            ));
        }
        rows.push(row);
    }
    if rows.is_empty() {
        return Err(Error::parse(file, 1, "empty triangle"));
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_list() {
        assert_eq!(
            quoted_list("\"MARY\",\"PATRICIA\",\"LINDA\"\n"),
            vec!["MARY", "PATRICIA", "LINDA"]
        );
        assert!(quoted_list("").is_empty());
    }

    #[test]
    fn test_number_grid_whitespace() {
        let grid: Vec<Vec<u32>> = number_grid("3\n7 4\n\n2 4 6\n", None, "t.txt").unwrap();
        assert_eq!(grid, vec![vec![3], vec![7, 4], vec![2, 4, 6]]);
    }

    #[test]
    fn test_number_grid_reports_line() {
        let err = number_grid::<u32>("1,2\n3,x\n", Some(','), "m.txt").unwrap_err();
        match err {
            Error::Parse { file, line, .. } => {
                assert_eq!(file, "m.txt");
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_square_matrix_rejects_ragged() {
        assert!(square_matrix("1,2\n3\n", "m.txt").is_err());
        assert_eq!(square_matrix("1,2\n3,4\n", "m.txt").unwrap()[1][1], 4);
    }

    #[test]
    fn test_triangle() {
        let rows = triangle("\n3\n7 4\n2 4 6\n", "t.txt").unwrap();
        assert_eq!(rows, vec![vec![3], vec![7, 4], vec![2, 4, 6]]);
    }

    #[test]
    fn test_triangle_rejects_ragged_rows() {
        match triangle("3\n7\n", "triangle.txt").unwrap_err() {
            Error::Parse { file, line, reason } => {
                assert_eq!(file, "triangle.txt");
                assert_eq!(line, 2);
                assert!(reason.contains("expected 2 entries, found 1"), "{reason}");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(triangle("1\n2 3 4\n", "t.txt").is_err());
        assert!(triangle("", "t.txt").is_err());
    }

    #[test]
    fn test_read_missing_file() {
        let dir = std::env::temp_dir().join("project-euler-no-such-dir");
        let err = read(&dir, "names.txt").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("names.txt"));
    }
}
