use math::digits::is_pandigital;

/// Concatenate x·1, x·2, ... until at least nine digits are produced.
fn concatenated_product(x: u64) -> String {
    let mut s = String::new();
    let mut n = 1;
    while s.len() < 9 {
        s.push_str(&(x * n).to_string());
        n += 1;
    }
    s
}

/// PE38: Pandigital Multiples
/// n > 1 means x has at most four digits.
pub fn solve() -> String {
    (1..10_000u64)
        .map(concatenated_product)
        .filter(|s| is_pandigital(s, 1, 9))
        .max()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples() {
        assert_eq!(concatenated_product(192), "192384576");
        assert_eq!(concatenated_product(9), "918273645");
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "932718654");
    }
}
