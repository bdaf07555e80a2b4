use std::path::Path;

use math::sequence::is_triangular;

use super::pe22::alphabetical_value;
use crate::data;
use crate::error::Result;

/// PE42: Coded Triangle Numbers
pub fn solve(data_dir: &Path) -> Result<String> {
    let content = data::read(data_dir, "words.txt")?;
    let count = data::quoted_list(&content)
        .into_iter()
        .filter(|w| is_triangular(alphabetical_value(w)))
        .count();
    Ok(count.to_string())
}
