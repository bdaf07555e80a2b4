use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use data_structures::Queue;
use tracing::debug;

use crate::data;
use crate::error::{Error, Result};

/// Shortest passcode consistent with every login attempt, assuming no digit
/// repeats: a topological order of the "comes before" relation.
///
/// Digits with no remaining predecessors are taken in ascending order so the
/// result is deterministic.
fn derive_passcode(attempts: &[&str]) -> Result<String> {
    let mut successors: BTreeMap<u8, BTreeSet<u8>> = BTreeMap::new();
    let mut in_degree: BTreeMap<u8, usize> = BTreeMap::new();

    for attempt in attempts {
        let digits = attempt.as_bytes();
        for &d in digits {
            successors.entry(d).or_default();
            in_degree.entry(d).or_default();
        }
        for pair in digits.windows(2) {
            let added = successors.entry(pair[0]).or_default().insert(pair[1]);
            if added {
                *in_degree.entry(pair[1]).or_default() += 1;
            }
        }
    }

    let mut ready: Queue<u8> = in_degree
        .iter()
        .filter(|&(_, &deg)| deg == 0)
        .map(|(&d, _)| d)
        .collect();
    let mut passcode = String::new();

    while let Some(d) = ready.dequeue() {
        passcode.push(d as char);
        for next in &successors[&d] {
            if let Some(deg) = in_degree.get_mut(next) {
                *deg -= 1;
                if *deg == 0 {
                    ready.enqueue(*next);
                }
            }
        }
    }

    if passcode.len() != in_degree.len() {
        return Err(Error::NoSolution("login attempts order digits in a cycle"));
    }
    Ok(passcode)
}

fn parse_attempts(content: &str) -> Result<Vec<&str>> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(i, line)| {
            if line.bytes().all(|b| b.is_ascii_digit()) {
                Ok(line)
            } else {
                Err(Error::parse("keylog.txt", i + 1, format!("not a digit string: {:?}", line)))
            }
        })
        .collect()
}

/// PE79: Passcode Derivation
pub fn solve(data_dir: &Path) -> Result<String> {
    let content = data::read(data_dir, "keylog.txt")?;
    let attempts = parse_attempts(&content)?;
    debug!(attempts = attempts.len(), "parsed keylog");
    derive_passcode(&attempts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain() {
        assert_eq!(derive_passcode(&["123", "234", "345"]).unwrap(), "12345");
    }

    #[test]
    fn test_ties_resolve_in_digit_order() {
        assert_eq!(derive_passcode(&["319", "680"]).unwrap(), "361890");
    }

    #[test]
    fn test_cycle_is_an_error() {
        assert!(derive_passcode(&["121"]).is_err());
        assert!(parse_attempts("319\n6a0\n").is_err());
    }

    #[test]
    #[ignore = "needs data/keylog.txt"]
    fn test_solve() {
        let dir = data::default_dir();
        assert_eq!(solve(&dir).unwrap(), "73162890");
    }
}
