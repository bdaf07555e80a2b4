use std::path::Path;

use crate::data;
use crate::error::{Error, Result};

const NUMERALS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

fn symbol_value(c: u8) -> Option<u32> {
    Some(match c {
        b'I' => 1,
        b'V' => 5,
        b'X' => 10,
        b'L' => 50,
        b'C' => 100,
        b'D' => 500,
        b'M' => 1000,
        _ => return None,
    })
}

/// Value of a valid (not necessarily minimal) Roman numeral.
fn parse_roman(s: &str) -> Option<u32> {
    let values: Vec<u32> = s.bytes().map(symbol_value).collect::<Option<_>>()?;
    let mut total = 0;
    for (i, &v) in values.iter().enumerate() {
        // A smaller symbol before a larger one is subtracted.
        match values.get(i + 1) {
            Some(&next) if v < next => total -= v as i64,
            _ => total += v as i64,
        }
    }
    u32::try_from(total).ok()
}

fn to_minimal_roman(mut n: u32) -> String {
    let mut out = String::new();
    for &(value, symbol) in &NUMERALS {
        while n >= value {
            out.push_str(symbol);
            n -= value;
        }
    }
    out
}

fn characters_saved(numeral: &str) -> Option<usize> {
    let minimal = to_minimal_roman(parse_roman(numeral)?);
    Some(numeral.len().saturating_sub(minimal.len()))
}

/// PE89: Roman Numerals
pub fn solve(data_dir: &Path) -> Result<String> {
    let content = data::read(data_dir, "roman.txt")?;
    let mut saved = 0;
    for (i, line) in content.lines().enumerate() {
        let numeral = line.trim();
        if numeral.is_empty() {
            continue;
        }
        saved += characters_saved(numeral).ok_or_else(|| {
            Error::parse("roman.txt", i + 1, format!("invalid numeral {:?}", numeral))
        })?;
    }
    Ok(saved.to_string())
}
