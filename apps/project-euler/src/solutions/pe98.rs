use std::collections::HashMap;
use std::path::Path;

use math::{digits, is_perfect_square};
use tracing::debug;

use crate::data;
use crate::error::Result;

/// Map each letter of `word` to the digit in the same position of `square`,
/// rejecting mappings that send one letter to two digits or two letters to
/// one digit.
fn letter_mapping(word: &[u8], square: u64) -> Option<HashMap<u8, u8>> {
    let digits = digits(square);
    if digits.len() != word.len() {
        return None;
    }
    let mut mapping = HashMap::new();
    let mut used = [false; 10];
    for (&letter, &digit) in word.iter().zip(&digits) {
        match mapping.get(&letter) {
            Some(&d) if d != digit => return None,
            Some(_) => {}
            None => {
                if used[digit as usize] {
                    return None;
                }
                used[digit as usize] = true;
                mapping.insert(letter, digit);
            }
        }
    }
    Some(mapping)
}

/// Largest square formed by either word of an anagram pair when the same
/// letter-to-digit mapping turns both into squares.
fn largest_square_pair(a: &str, b: &str) -> Option<u64> {
    let len = a.len() as u32;
    let (lo, hi) = (10u64.pow(len - 1), 10u64.pow(len));
    let mut best = None;

    for root in math::isqrt(lo - 1) + 1.. {
        let square = root * root;
        if square >= hi {
            break;
        }
        let Some(mapping) = letter_mapping(a.as_bytes(), square) else {
            continue;
        };
        // The mapping was built from a, so b's letters are all present.
        let other = b
            .bytes()
            .try_fold(0u64, |acc, l| mapping.get(&l).map(|&d| acc * 10 + d as u64));
        if let Some(other) = other {
            if other >= lo && is_perfect_square(other) {
                best = best.max(Some(square.max(other)));
            }
        }
    }
    best
}

/// Every pair of distinct words that are anagrams of each other.
fn anagram_pairs<'a>(words: &[&'a str]) -> Vec<(&'a str, &'a str)> {
    let mut groups: HashMap<Vec<u8>, Vec<&'a str>> = HashMap::new();
    for &word in words {
        let mut key = word.as_bytes().to_vec();
        key.sort_unstable();
        groups.entry(key).or_default().push(word);
    }

    let mut pairs = Vec::new();
    for group in groups.values() {
        for (i, &a) in group.iter().enumerate() {
            for &b in &group[i + 1..] {
                if a != b {
                    pairs.push((a, b));
                }
            }
        }
    }
    pairs
}

/// PE98: Anagramic Squares
pub fn solve(data_dir: &Path) -> Result<String> {
    let content = data::read(data_dir, "anagram_words.txt")?;
    let words = data::quoted_list(&content);
    let pairs = anagram_pairs(&words);
    debug!(pairs = pairs.len(), "anagram pairs");

    let best = pairs
        .iter()
        .filter_map(|&(a, b)| largest_square_pair(a, b))
        .max()
        .unwrap_or(0);
    Ok(best.to_string())
}
