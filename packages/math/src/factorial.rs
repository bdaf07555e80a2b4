use crate::BigInt;

/// Compute factorial of n (n!)
pub fn factorial(n: u64) -> u64 {
    match n {
        0 | 1 => 1,
        _ => n * factorial(n - 1),
    }
}

/// Compute factorial of n (n!) as BigInt for arbitrary precision
pub fn big_factorial(n: u32) -> BigInt {
    let mut result = BigInt::from_u32(1);
    for i in 1..=n {
        result = result * i;
    }
    result
}

/// Binomial coefficient C(n, k).
///
/// Multiplies and divides alternately so every intermediate value is itself a
/// binomial coefficient times a small factor.
pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result = 1u64;
    for i in 1..=k {
        result = result * (n - k + i) / i;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(5), 120);
        assert_eq!(factorial(10), 3628800);
    }

    #[test]
    fn test_big_factorial() {
        assert_eq!(big_factorial(10).to_string(), "3628800");
        assert_eq!(big_factorial(25).to_string(), "15511210043330985984000000");
    }

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(5, 3), 10);
        assert_eq!(binomial(23, 10), 1144066);
        assert_eq!(binomial(4, 0), 1);
        assert_eq!(binomial(3, 4), 0);
        assert_eq!(binomial(40, 20), 137846528820);
    }
}
