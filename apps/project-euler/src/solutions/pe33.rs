use math::gcd;
use tracing::debug;

/// Two-digit fractions num/den < 1 that stay equal when a shared digit is
/// naively cancelled, excluding the trivial trailing-zero cases.
fn curious_fractions() -> Vec<(u64, u64)> {
    let mut found = Vec::new();
    for den in 11..100u64 {
        for num in 10..den {
            let (n1, n2) = (num / 10, num % 10);
            let (d1, d2) = (den / 10, den % 10);
            if n2 == 0 && d2 == 0 {
                continue;
            }
            // The only non-trivial cancellation is the num's second digit
            // against the den's first: 49/98 -> 4/8.
            if n2 == d1 && d2 != 0 && num * d2 == den * n1 {
                found.push((num, den));
            }
        }
    }
    found
}

/// PE33: Digit Cancelling Fractions
pub fn solve() -> String {
    let fractions = curious_fractions();
    debug!("curious fractions: {:?}", fractions);

    let (num, den) = fractions
        .iter()
        .fold((1, 1), |(pn, pd), &(n, d)| (pn * n, pd * d));
    (den / gcd(num, den)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_fractions() {
        assert_eq!(
            curious_fractions(),
            vec![(16, 64), (26, 65), (19, 95), (49, 98)]
        );
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "100");
    }
}
