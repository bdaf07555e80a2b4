use std::path::Path;

use tracing::debug;

use crate::data;
use crate::error::{Error, Result};

const FILE: &str = "base_exp.txt";

/// log(base^exp), which orders the powers without computing them.
fn log_value(base: u64, exp: u64) -> f64 {
    exp as f64 * (base as f64).ln()
}

/// 1-based line number of the largest base^exp pair.
fn largest_line(content: &str) -> Result<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row: Vec<u64> = data::number_row(line, Some(','), FILE, i + 1)?;
        let &[base, exp] = row.as_slice() else {
            let reason = format!("expected base,exp, found {} fields", row.len());
            return Err(Error::parse(FILE, i + 1, reason));
        };
        let value = log_value(base, exp);
        if best.is_none_or(|(_, b)| value > b) {
            best = Some((i + 1, value));
        }
    }
    let (line, value) = best.ok_or_else(|| Error::parse(FILE, 1, "no pairs"))?;
    debug!(line, log10 = value / std::f64::consts::LN_10, "largest pair");
    Ok(line)
}

/// PE99: Largest Exponential
pub fn solve(data_dir: &Path) -> Result<String> {
    let content = data::read(data_dir, FILE)?;
    Ok(largest_line(&content)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_pair() {
        // 2^11 = 2048 < 3^7 = 2187
        assert!(log_value(2, 11) < log_value(3, 7));
        // 632382^518061 > 519432^525806
        assert!(log_value(632382, 518061) > log_value(519432, 525806));
        assert_eq!(largest_line("632382,518061\n519432,525806\n").unwrap(), 1);
    }

    #[test]
    fn test_malformed() {
        assert!(largest_line("1,2,3\n").is_err());
        assert!(largest_line("").is_err());
    }

    #[test]
    #[ignore = "needs data/base_exp.txt"]
    fn test_solve() {
        let dir = data::default_dir();
        assert_eq!(solve(&dir).unwrap(), "709");
    }
}
