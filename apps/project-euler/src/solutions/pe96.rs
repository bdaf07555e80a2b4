use std::path::Path;

use tracing::debug;

use crate::data;
use crate::error::{Error, Result};

const FILE: &str = "sudoku.txt";

/// A 9×9 grid with 0 for empty cells, plus bitmasks of the digits already
/// used in each row, column and box.
#[derive(Clone)]
struct Sudoku {
    cells: [u8; 81],
    rows: [u16; 9],
    cols: [u16; 9],
    boxes: [u16; 9],
}

fn box_of(cell: usize) -> usize {
    (cell / 27) * 3 + (cell % 9) / 3
}

impl Sudoku {
    fn empty() -> Self {
        Sudoku {
            cells: [0; 81],
            rows: [0; 9],
            cols: [0; 9],
            boxes: [0; 9],
        }
    }

    fn candidates(&self, cell: usize) -> u16 {
        let used = self.rows[cell / 9] | self.cols[cell % 9] | self.boxes[box_of(cell)];
        !used & 0b11_1111_1110
    }

    /// Place `digit` if the row, column and box allow it.
    fn place(&mut self, cell: usize, digit: u8) -> bool {
        let bit = 1 << digit;
        if self.candidates(cell) & bit == 0 {
            return false;
        }
        self.cells[cell] = digit;
        self.rows[cell / 9] |= bit;
        self.cols[cell % 9] |= bit;
        self.boxes[box_of(cell)] |= bit;
        true
    }

    fn clear(&mut self, cell: usize) {
        let bit = !(1u16 << self.cells[cell]);
        self.cells[cell] = 0;
        self.rows[cell / 9] &= bit;
        self.cols[cell % 9] &= bit;
        self.boxes[box_of(cell)] &= bit;
    }

    /// Backtracking search, always branching on the empty cell with the
    /// fewest candidates.
    fn solve(&mut self) -> bool {
        let Some(cell) = (0..81)
            .filter(|&c| self.cells[c] == 0)
            .min_by_key(|&c| self.candidates(c).count_ones())
        else {
            return true;
        };

        let options = self.candidates(cell);
        for digit in 1..=9u8 {
            if options & (1 << digit) == 0 {
                continue;
            }
            self.place(cell, digit);
            if self.solve() {
                return true;
            }
            self.clear(cell);
        }
        false
    }

    /// The three-digit number in the top left corner.
    fn corner(&self) -> u32 {
        self.cells[..3].iter().fold(0, |acc, &d| acc * 10 + d as u32)
    }
}

/// Parse puzzles laid out as a `Grid NN` header followed by nine rows of
/// nine digits.
fn parse_puzzles(content: &str) -> Result<Vec<Sudoku>> {
    let mut puzzles = Vec::new();
    let mut current: Option<(Sudoku, usize)> = None;

    for (i, line) in content.lines().enumerate() {
        let line_no = i + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("Grid") {
            if let Some((_, rows)) = current.take() {
                return Err(Error::parse(FILE, line_no, format!("previous grid has {} rows", rows)));
            }
            current = Some((Sudoku::empty(), 0));
            continue;
        }

        let Some((grid, row)) = current.as_mut() else {
            return Err(Error::parse(FILE, line_no, "digits before a Grid header"));
        };
        if line.len() != 9 || !line.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::parse(FILE, line_no, format!("expected 9 digits, found {:?}", line)));
        }
        for (col, b) in line.bytes().enumerate() {
            let digit = b - b'0';
            if digit != 0 && !grid.place(*row * 9 + col, digit) {
                return Err(Error::parse(FILE, line_no, format!("digit {} repeats", digit)));
            }
        }
        *row += 1;
        if *row == 9 {
            if let Some((grid, _)) = current.take() {
                puzzles.push(grid);
            }
        }
    }

    if let Some((_, rows)) = current {
        return Err(Error::parse(
            FILE,
            content.lines().count(),
            format!("last grid has {} rows", rows),
        ));
    }
    Ok(puzzles)
}

/// PE96: Su Doku
pub fn solve(data_dir: &Path) -> Result<String> {
    let content = data::read(data_dir, FILE)?;
    let puzzles = parse_puzzles(&content)?;
    debug!(puzzles = puzzles.len(), "parsed grids");

    let mut total = 0;
    for (i, mut puzzle) in puzzles.into_iter().enumerate() {
        if !puzzle.solve() {
            debug!(grid = i + 1, "no solution");
            return Err(Error::NoSolution("a sudoku grid has no solution"));
        }
        total += puzzle.corner();
    }
    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Grid 01
003020600
900305001
001806400
008102900
700000008
006708200
002609500
800203009
005010300
";

    #[test]
    fn test_example_grid() {
        let mut puzzles = parse_puzzles(EXAMPLE).unwrap();
        assert_eq!(puzzles.len(), 1);
        let grid = &mut puzzles[0];
        assert!(grid.solve());
        assert_eq!(grid.corner(), 483);
        assert!(grid.cells.iter().all(|&d| d != 0));
    }

    #[test]
    fn test_short_grid_is_rejected() {
        let short: String = EXAMPLE.lines().take(5).collect::<Vec<_>>().join("\n");
        assert!(matches!(parse_puzzles(&short), Err(Error::Parse { .. })));
        assert!(parse_puzzles("Grid 01\n12345\n").is_err());
    }

    #[test]
    #[ignore = "needs data/sudoku.txt"]
    fn test_solve() {
        let dir = data::default_dir();
        assert_eq!(solve(&dir).unwrap(), "24702");
    }
}
