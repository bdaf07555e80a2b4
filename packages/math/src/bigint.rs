use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

/// A big integer represented as a vector of digits (least significant first).
///
/// Non-negative only. The digit vector never carries leading zeros, and zero
/// is stored as a single `0` digit.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BigInt {
    digits: Vec<u8>,
}

impl BigInt {
    /// Create a BigInt representing zero.
    pub fn zero() -> Self {
        BigInt { digits: vec![0] }
    }

    /// Create a BigInt from a u32.
    pub fn from_u32(n: u32) -> Self {
        BigInt::from_u64(n as u64)
    }

    /// Create a BigInt from a u64.
    pub fn from_u64(mut n: u64) -> Self {
        if n == 0 {
            return BigInt::zero();
        }
        let mut digits = Vec::new();
        while n > 0 {
            digits.push((n % 10) as u8);
            n /= 10;
        }
        BigInt { digits }
    }

    fn from_digits(mut digits: Vec<u8>) -> Self {
        while digits.len() > 1 && digits.last() == Some(&0) {
            digits.pop();
        }
        if digits.is_empty() {
            digits.push(0);
        }
        BigInt { digits }
    }

    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    /// Number of decimal digits (zero has one digit).
    pub fn num_digits(&self) -> usize {
        self.digits.len()
    }

    /// Sum of the decimal digits.
    pub fn digit_sum(&self) -> u64 {
        self.digits.iter().map(|&d| d as u64).sum()
    }

    /// Decimal digits, most significant first.
    pub fn digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.digits.iter().rev().copied()
    }

    /// The number with its decimal digits reversed: 1230 -> 321.
    pub fn reversed(&self) -> BigInt {
        BigInt::from_digits(self.digits.iter().rev().copied().collect())
    }

    pub fn is_palindrome(&self) -> bool {
        self.digits.iter().eq(self.digits.iter().rev())
    }

    /// Raise to a small power by repeated multiplication.
    pub fn pow(&self, exp: u32) -> BigInt {
        let mut result = BigInt::from_u32(1);
        for _ in 0..exp {
            result = &result * self;
        }
        result
    }
}

impl From<u64> for BigInt {
    fn from(n: u64) -> Self {
        BigInt::from_u64(n)
    }
}

impl FromStr for BigInt {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: Vec<u8> = s
            .chars()
            .rev()
            .filter_map(|c| c.to_digit(10).map(|d| d as u8))
            .collect();
        Ok(BigInt::from_digits(digits))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.iter().rev().cmp(other.digits.iter().rev()))
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(self, other: BigInt) -> BigInt {
        &self + &other
    }
}

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, other: &BigInt) -> BigInt {
        let mut result = Vec::new();
        let mut carry = 0u8;
        let max_len = self.digits.len().max(other.digits.len());

        for i in 0..max_len {
            let a = self.digits.get(i).copied().unwrap_or(0);
            let b = other.digits.get(i).copied().unwrap_or(0);
            let sum = a + b + carry;
            result.push(sum % 10);
            carry = sum / 10;
        }

        if carry > 0 {
            result.push(carry);
        }

        BigInt { digits: result }
    }
}

impl Sub for BigInt {
    type Output = BigInt;

    fn sub(self, other: BigInt) -> BigInt {
        &self - &other
    }
}

impl Sub for &BigInt {
    type Output = BigInt;

    /// Panics if `other` is larger than `self`.
    fn sub(self, other: &BigInt) -> BigInt {
        assert!(self >= other, "BigInt subtraction underflow");

        let mut result = Vec::with_capacity(self.digits.len());
        let mut borrow = 0i8;

        for (i, &a) in self.digits.iter().enumerate() {
            let b = other.digits.get(i).copied().unwrap_or(0) as i8;
            let mut diff = a as i8 - b - borrow;
            if diff < 0 {
                diff += 10;
                borrow = 1;
            } else {
                borrow = 0;
            }
            result.push(diff as u8);
        }

        BigInt::from_digits(result)
    }
}

impl Mul<u32> for BigInt {
    type Output = BigInt;

    fn mul(self, other: u32) -> BigInt {
        &self * other
    }
}

impl Mul<u32> for &BigInt {
    type Output = BigInt;

    fn mul(self, other: u32) -> BigInt {
        let mut result = Vec::new();
        let mut carry = 0u64;

        for &d in &self.digits {
            let product = (d as u64) * (other as u64) + carry;
            result.push((product % 10) as u8);
            carry = product / 10;
        }

        while carry > 0 {
            result.push((carry % 10) as u8);
            carry /= 10;
        }

        BigInt::from_digits(result)
    }
}

impl Mul<u64> for &BigInt {
    type Output = BigInt;

    fn mul(self, other: u64) -> BigInt {
        let mut result = Vec::with_capacity(self.digits.len() + 20);
        let mut carry = 0u128;

        for &d in &self.digits {
            let product = (d as u128) * (other as u128) + carry;
            result.push((product % 10) as u8);
            carry = product / 10;
        }

        while carry > 0 {
            result.push((carry % 10) as u8);
            carry /= 10;
        }

        BigInt::from_digits(result)
    }
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, other: &BigInt) -> BigInt {
        let mut acc = vec![0u32; self.digits.len() + other.digits.len()];

        for (i, &a) in self.digits.iter().enumerate() {
            for (j, &b) in other.digits.iter().enumerate() {
                acc[i + j] += a as u32 * b as u32;
            }
            // Keep the column sums small enough that they never overflow.
            let mut carry = 0;
            for slot in acc.iter_mut() {
                let v = *slot + carry;
                *slot = v % 10;
                carry = v / 10;
            }
        }

        BigInt::from_digits(acc.into_iter().map(|d| d as u8).collect())
    }
}

impl Mul for BigInt {
    type Output = BigInt;

    fn mul(self, other: BigInt) -> BigInt {
        &self * &other
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.digits.is_empty() {
            return write!(f, "0");
        }
        for &d in self.digits.iter().rev() {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}
