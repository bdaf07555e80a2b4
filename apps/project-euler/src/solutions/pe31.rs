const COINS: [usize; 8] = [1, 2, 5, 10, 20, 50, 100, 200];

/// Number of ways to make `target` from unlimited coins of each denomination.
fn ways_to_make(target: usize, coins: &[usize]) -> u64 {
    let mut ways = vec![0u64; target + 1];
    ways[0] = 1;
    for &coin in coins {
        for j in coin..=target {
            ways[j] += ways[j - coin];
        }
    }
    ways[target]
}

/// PE31: Coin Sums
pub fn solve() -> String {
    ways_to_make(200, &COINS).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_amounts() {
        // 5 = 5 = 2+2+1 = 2+1+1+1 = 1+1+1+1+1
        assert_eq!(ways_to_make(5, &COINS), 4);
        assert_eq!(ways_to_make(0, &COINS), 1);
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "73682");
    }
}
