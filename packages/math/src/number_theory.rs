//! Integer arithmetic helpers: gcd/lcm, modular exponentiation, square roots.

pub fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

pub fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    a / gcd(a, b) * b
}

/// (a * b) % m without overflow for any u64 operands.
pub fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

/// base^exp mod m by square-and-multiply.
///
/// ```
/// use math::number_theory::mod_pow;
///
/// assert_eq!(mod_pow(2, 10, 1000), 24);
/// assert_eq!(mod_pow(7, 0, 13), 1);
/// ```
pub fn mod_pow(base: u64, mut exp: u64, m: u64) -> u64 {
    if m == 1 {
        return 0;
    }
    let mut result = 1;
    let mut base = base % m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}

/// Floor of the square root.
pub fn isqrt(n: u64) -> u64 {
    // Start from the float estimate and correct the rounding error.
    let mut r = (n as f64).sqrt() as u64;
    while r.checked_mul(r).is_none_or(|sq| sq > n) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).is_some_and(|sq| sq <= n) {
        r += 1;
    }
    r
}

pub fn is_perfect_square(n: u64) -> bool {
    let r = isqrt(n);
    r * r == n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_lcm() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(17, 5), 1);
        assert_eq!(gcd(0, 9), 9);
        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm(0, 6), 0);
        assert_eq!((1u64..=10).fold(1, lcm), 2520);
    }

    #[test]
    fn test_mod_pow_large_modulus() {
        // Last ten digits of 2^100 = 1267650600228229401496703205376
        assert_eq!(mod_pow(2, 100, 10_000_000_000), 6703205376);
        assert_eq!(mod_pow(10, 18, u64::MAX), 1_000_000_000_000_000_000);
    }

    #[test]
    fn test_isqrt() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(1), 1);
        assert_eq!(isqrt(15), 3);
        assert_eq!(isqrt(16), 4);
        assert_eq!(isqrt(u64::MAX), 4_294_967_295);
        assert_eq!(isqrt(999_999_999_999), 999_999);
    }

    #[test]
    fn test_is_perfect_square() {
        assert!(is_perfect_square(0));
        assert!(is_perfect_square(144));
        assert!(!is_perfect_square(145));
    }
}
