use std::path::Path;

use tracing::debug;

use crate::data;
use crate::error::Result;

pub(crate) fn alphabetical_value(word: &str) -> u64 {
    word.bytes()
        .filter(u8::is_ascii_uppercase)
        .map(|b| (b - b'A' + 1) as u64)
        .sum()
}

fn total_name_score(names: &mut [&str]) -> u64 {
    names.sort_unstable();

    let mut total: u64 = 0;
    for (i, name) in names.iter().enumerate() {
        let position = (i + 1) as u64;
        let score = alphabetical_value(name) * position;
        debug!("{}: {} -> score={}", position, name, score);
        total += score;
    }
    total
}

/// PE22: Names Scores
pub fn solve(data_dir: &Path) -> Result<String> {
    let content = data::read(data_dir, "names.txt")?;
    let mut names = data::quoted_list(&content);
    Ok(total_name_score(&mut names).to_string())
}
