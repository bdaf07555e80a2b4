/// All divisors of n smaller than n, in ascending order.
///
/// ```
/// use math::divisors::proper_divisors;
///
/// assert_eq!(proper_divisors(28), vec![1, 2, 4, 7, 14]);
/// assert_eq!(proper_divisors(1), Vec::<u64>::new());
/// ```
pub fn proper_divisors(n: u64) -> Vec<u64> {
    if n < 2 {
        return vec![];
    }
    let mut small = vec![1];
    let mut large = Vec::new();
    let mut i = 2;
    while i * i <= n {
        if n.is_multiple_of(i) {
            small.push(i);
            if i * i != n {
                large.push(n / i);
            }
        }
        i += 1;
    }
    small.extend(large.into_iter().rev());
    small
}

pub fn sum_proper_divisors(n: u64) -> u64 {
    if n < 2 {
        return 0;
    }
    let mut sum = 1;
    let mut i = 2;
    while i * i <= n {
        if n.is_multiple_of(i) {
            sum += i;
            if i * i != n {
                sum += n / i;
            }
        }
        i += 1;
    }
    sum
}

/// Sum of proper divisors for every n in `0..=limit`, by sieving each
/// divisor into its multiples.
pub fn proper_divisor_sums(limit: usize) -> Vec<u64> {
    let mut sums = vec![0u64; limit + 1];
    for i in 1..=limit / 2 {
        for j in (2 * i..=limit).step_by(i) {
            sums[j] += i as u64;
        }
    }
    sums
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_proper_divisors() {
        assert_eq!(sum_proper_divisors(220), 284);
        assert_eq!(sum_proper_divisors(284), 220);
        assert_eq!(sum_proper_divisors(12), 16);
        assert_eq!(sum_proper_divisors(1), 0);
    }

    #[test]
    fn test_sieve_matches_direct() {
        let sums = proper_divisor_sums(2_000);
        for n in 0..=2_000u64 {
            assert_eq!(sums[n as usize], sum_proper_divisors(n), "n = {}", n);
            assert_eq!(
                sums[n as usize],
                proper_divisors(n).iter().sum::<u64>(),
                "n = {}",
                n
            );
        }
    }
}
