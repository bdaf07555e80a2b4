/// Least n whose partition count p(n) is divisible by `modulus`.
///
/// Uses Euler's pentagonal number recurrence
/// p(n) = Σ ±p(n − k(3k∓1)/2), with signs + + − − repeating.
fn first_partition_divisible_by(modulus: i64) -> usize {
    let mut p: Vec<i64> = vec![1];
    let mut n = 0;
    loop {
        n += 1;
        let mut total = 0i64;
        for k in 1.. {
            let sign = if k % 2 == 1 { 1 } else { -1 };
            let g1 = k * (3 * k - 1) / 2;
            if g1 > n {
                break;
            }
            total += sign * p[n - g1];
            let g2 = k * (3 * k + 1) / 2;
            if g2 <= n {
                total += sign * p[n - g2];
            }
        }
        let value = total.rem_euclid(modulus);
        if value == 0 {
            return n;
        }
        p.push(value);
    }
}

/// PE78: Coin Partitions
pub fn solve() -> String {
    first_partition_divisible_by(1_000_000).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_moduli() {
        // p(5) = 7
        assert_eq!(first_partition_divisible_by(7), 5);
        // p(4) = 5
        assert_eq!(first_partition_divisible_by(5), 4);
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "55374");
    }
}
