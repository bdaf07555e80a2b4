use math::polygonal;
use tracing::debug;

use crate::error::{Error, Result};

/// Four-digit `sides`-gonal numbers.
fn four_digit(sides: u64) -> Vec<u64> {
    (1..)
        .map(|n| polygonal(sides, n))
        .skip_while(|&p| p < 1000)
        .take_while(|&p| p < 10_000)
        .collect()
}

fn search(chain: &mut Vec<u64>, remaining: &mut Vec<Vec<u64>>) -> bool {
    let last = chain[chain.len() - 1];
    if remaining.is_empty() {
        return last % 100 == chain[0] / 100;
    }

    for i in 0..remaining.len() {
        let family = remaining.swap_remove(i);
        for &n in family.iter().filter(|&&n| n / 100 == last % 100) {
            chain.push(n);
            if search(chain, remaining) {
                return true;
            }
            chain.pop();
        }
        remaining.push(family);
        let end = remaining.len() - 1;
        remaining.swap(i, end);
    }
    false
}

/// An ordered cycle of four-digit numbers, one from each polygonal family,
/// where the last two digits of each are the first two of the next.
fn cyclic_set(sides: &[u64]) -> Option<Vec<u64>> {
    let (&first, rest) = sides.split_last()?;
    let mut remaining: Vec<Vec<u64>> = rest.iter().map(|&s| four_digit(s)).collect();

    for start in four_digit(first) {
        let mut chain = vec![start];
        if search(&mut chain, &mut remaining) {
            return Some(chain);
        }
    }
    None
}

/// PE61: Cyclical Figurate Numbers
pub fn solve() -> Result<String> {
    let chain = cyclic_set(&[3, 4, 5, 6, 7, 8])
        .ok_or(Error::NoSolution("no cyclic set of six figurate numbers"))?;
    debug!("cycle: {:?}", chain);
    Ok(chain.iter().sum::<u64>().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_families() {
        let mut chain = cyclic_set(&[3, 4, 5]).unwrap();
        chain.sort_unstable();
        assert_eq!(chain, vec![2882, 8128, 8281]);
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve().unwrap(), "28684");
    }
}
