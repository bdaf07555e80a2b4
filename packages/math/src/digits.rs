use crate::factorial::factorial;

/// Decimal digits of n, most significant first. `digits(0)` is `[0]`.
pub fn digits(mut n: u64) -> Vec<u8> {
    if n == 0 {
        return vec![0];
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push((n % 10) as u8);
        n /= 10;
    }
    out.reverse();
    out
}

/// Number of decimal digits in n.
pub fn num_digits(n: u64) -> u32 {
    n.checked_ilog10().map_or(1, |d| d + 1)
}

pub fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reverse the decimal digits: 1230 -> 321.
pub fn reverse_digits(mut n: u128) -> u128 {
    let mut rev = 0;
    while n > 0 {
        rev = rev * 10 + n % 10;
        n /= 10;
    }
    rev
}

/// Check whether n reads the same forwards and backwards in the given base.
pub fn is_palindrome(n: u64, base: u64) -> bool {
    let mut rev = 0;
    let mut x = n;
    while x > 0 {
        rev = rev * base + x % base;
        x /= base;
    }
    rev == n
}

/// Count of each decimal digit in n.
///
/// Two numbers are digit permutations of each other exactly when their
/// signatures are equal.
pub fn digit_signature(mut n: u64) -> [u8; 10] {
    let mut counts = [0u8; 10];
    if n == 0 {
        counts[0] = 1;
    }
    while n > 0 {
        counts[(n % 10) as usize] += 1;
        n /= 10;
    }
    counts
}

/// True if `s` uses every digit from `lo` to `hi` exactly once and nothing else.
///
/// ```
/// use math::digits::is_pandigital;
///
/// assert!(is_pandigital("391867254", 1, 9));
/// assert!(!is_pandigital("391867250", 1, 9));
/// ```
pub fn is_pandigital(s: &str, lo: u8, hi: u8) -> bool {
    if s.len() != (hi - lo + 1) as usize {
        return false;
    }
    let mut seen = [false; 10];
    for b in s.bytes() {
        let d = b.wrapping_sub(b'0');
        if d < lo || d > hi || seen[d as usize] {
            return false;
        }
        seen[d as usize] = true;
    }
    true
}

/// Concatenate the decimal representations: concat(12, 345) = 12345.
pub fn concat(a: u64, b: u64) -> u64 {
    a * 10u64.pow(num_digits(b)) + b
}

/// Compute the sum of factorials of each digit in n.
///
/// Example: digit_factorial_sum(145) = 1! + 4! + 5! = 1 + 24 + 120 = 145
pub fn digit_factorial_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        let digit = n % 10;
        sum += factorial(digit);
        n /= 10;
    }
    sum
}
