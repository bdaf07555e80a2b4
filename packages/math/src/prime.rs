//! Prime number utilities including sieves, iterators, and factorization.

use crate::number_theory::{mod_pow, mul_mod};
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};

/// Iterator that generates prime numbers.
///
/// Maintains an internal list of found primes and checks each candidate
/// only against primes up to its square root.
///
/// # Example
///
/// ```
/// use math::prime::Primes;
///
/// let first_ten: Vec<u64> = Primes::new().take(10).collect();
/// assert_eq!(first_ten, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
/// ```
pub struct Primes {
    found: Vec<u64>,
    candidate: u64,
}

impl Primes {
    pub fn new() -> Self {
        Primes {
            found: Vec::new(),
            candidate: 2,
        }
    }
}

impl Default for Primes {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Primes {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let c = self.candidate;
            self.candidate += if c == 2 { 1 } else { 2 };

            let sqrt_c = (c as f64).sqrt() as u64;
            let is_prime = self.found.iter()
                .take_while(|&&p| p <= sqrt_c)
                .all(|&p| c % p != 0);

            if is_prime {
                self.found.push(c);
                return Some(c);
            }
        }
    }
}

/// Returns an iterator over prime numbers: 2, 3, 5, 7, 11, ...
///
/// # Example
///
/// ```
/// use math::prime::primes;
///
/// let first_five: Vec<u64> = primes().take(5).collect();
/// assert_eq!(first_five, vec![2, 3, 5, 7, 11]);
/// ```
pub fn primes() -> Primes {
    Primes::new()
}

/// Returns the nth prime number (1-indexed: nth_prime(1) = 2, nth_prime(2) = 3, ...).
///
/// Returns None if n is 0.
///
/// # Example
///
/// ```
/// use math::prime::nth_prime;
///
/// assert_eq!(nth_prime(1), Some(2));
/// assert_eq!(nth_prime(6), Some(13));
/// assert_eq!(nth_prime(0), None);
/// ```
pub fn nth_prime(n: usize) -> Option<u64> {
    if n == 0 {
        return None;
    }
    Primes::new().nth(n - 1)
}

/// Returns the largest prime factor of n.
///
/// Returns None if n < 2.
///
/// # Example
///
/// ```
/// use math::prime::largest_prime_factor;
///
/// assert_eq!(largest_prime_factor(84), Some(7)); // 84 = 2^2 * 3 * 7
/// assert_eq!(largest_prime_factor(2), Some(2));
/// assert_eq!(largest_prime_factor(1), None);
/// ```
pub fn largest_prime_factor(mut n: u64) -> Option<u64> {
    if n < 2 {
        return None;
    }

    let mut largest = None;
    let mut factor = 2;

    while factor * factor <= n {
        while n.is_multiple_of(factor) {
            largest = Some(factor);
            n /= factor;
        }
        factor += 1;
    }
    if n > 1 {
        largest = Some(n);
    }
    largest
}

/// Count the number of divisors of n using prime factorization.
///
/// Takes a slice of primes that must include all primes up to sqrt(n).
/// Panics if the last prime in the slice is less than sqrt(n).
///
/// # Example
///
/// ```
/// use math::prime::count_divisors;
///
/// let primes = vec![2, 3, 5, 7];
/// assert_eq!(count_divisors(28, &primes), 6); // 1, 2, 4, 7, 14, 28
/// assert_eq!(count_divisors(12, &primes), 6); // 1, 2, 3, 4, 6, 12
/// ```
pub fn count_divisors(mut n: u64, primes: &[u64]) -> u32 {
    if n <= 1 {
        return n as u32;
    }

    let sqrt_n = (n as f64).sqrt() as u64;
    let last_prime = *primes.last().expect("primes slice cannot be empty");
    if last_prime < sqrt_n {
        panic!(
            "primes slice insufficient: last prime {} < sqrt({})",
            last_prime, n
        );
    }

    let mut count = 1u32;

    for &p in primes {
        if p * p > n {
            break;
        }
        let mut exp = 0;
        while n % p == 0 {
            exp += 1;
            n /= p;
        }
        if exp > 0 {
            count *= exp + 1;
        }
    }

    // If remainder > 1, it's a prime factor with exponent 1
    if n > 1 {
        count *= 2;
    }

    count
}

/// Check if a number is prime.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n.is_multiple_of(2) {
        return false;
    }
    let sqrt_n = (n as f64).sqrt() as u64;
    for i in (3..=sqrt_n).step_by(2) {
        if n.is_multiple_of(i) {
            return false;
        }
    }
    true
}

/// Deterministic Miller-Rabin primality test, valid for every `u64`.
///
/// Faster than [`is_prime`] once n grows past a few million, which matters
/// for searches that test concatenations of primes.
pub fn is_prime_u64(n: u64) -> bool {
    const SMALL: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

    if n < 2 {
        return false;
    }
    for &p in &SMALL {
        if n.is_multiple_of(p) {
            return n == p;
        }
    }

    let mut d = n - 1;
    let mut s = 0;
    while d.is_multiple_of(2) {
        d /= 2;
        s += 1;
    }

    // The first twelve primes are a sufficient witness set below 2^64.
    'witness: for &a in &SMALL {
        let mut x = mod_pow(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// Primality table for `0..=limit`.
pub fn sieve(limit: usize) -> Vec<bool> {
    let mut is_prime = vec![true; limit + 1];
    is_prime[0] = false;
    if limit >= 1 {
        is_prime[1] = false;
    }

    let mut i = 2;
    while i * i <= limit {
        if is_prime[i] {
            for multiple in (i * i..=limit).step_by(i) {
                is_prime[multiple] = false;
            }
        }
        i += 1;
    }
    is_prime
}

/// Number of distinct prime factors of every n in `0..=limit`.
pub fn distinct_prime_factor_counts(limit: usize) -> Vec<u8> {
    let mut counts = vec![0u8; limit + 1];
    for i in 2..=limit {
        if counts[i] == 0 {
            for j in (i..=limit).step_by(i) {
                counts[j] += 1;
            }
        }
    }
    counts
}

/// Euler's totient φ(n) for every n in `0..=limit`.
pub fn totients(limit: usize) -> Vec<u64> {
    let mut phi: Vec<u64> = (0..=limit as u64).collect();
    for i in 2..=limit {
        if phi[i] == i as u64 {
            for j in (i..=limit).step_by(i) {
                phi[j] -= phi[j] / i as u64;
            }
        }
    }
    phi
}

/// Finds all prime numbers less than a given limit `n`. (Sequential)
pub fn primes_below(n: u32) -> Vec<u32> {
    if n < 3 {
        return vec![];
    }
    let n_usize = n as usize;
    let mut sieve = vec![true; n_usize];
    sieve[0] = false;
    sieve[1] = false;

    for i in 2..=(n_usize as f64).sqrt() as usize {
        if sieve[i] {
            for multiple in (i * i..n_usize).step_by(i) {
                sieve[multiple] = false;
            }
        }
    }

    (2..n_usize)
        .filter_map(|i| if sieve[i] { Some(i as u32) } else { None })
        .collect()
}

/// Finds all prime numbers less than `n` by parallelizing the outer loop.
pub fn primes_below_parallel_outer(n: u32) -> Vec<u32> {
    if n < 3 {
        return vec![];
    }
    let n_usize = n as usize;
    let sieve: Vec<AtomicBool> = (0..n_usize).map(|_| AtomicBool::new(true)).collect();
    sieve[0].store(false, Ordering::Relaxed);
    sieve[1].store(false, Ordering::Relaxed);

    let sqrt_n = (n_usize as f64).sqrt() as usize;

    (2..=sqrt_n).into_par_iter().for_each(|i| {
        if sieve[i].load(Ordering::Relaxed) {
            for multiple in (i * i..n_usize).step_by(i) {
                sieve[multiple].store(false, Ordering::Relaxed);
            }
        }
    });

    (2..n_usize)
        .filter_map(|i| {
            if sieve[i].load(Ordering::Relaxed) {
                Some(i as u32)
            } else {
                None
            }
        })
        .collect()
}

/// Finds all prime numbers less than `n` by parallelizing the inner loop.
pub fn primes_below_parallel_inner(n: u32) -> Vec<u32> {
    if n < 3 {
        return vec![];
    }
    let n_usize = n as usize;
    let sieve: Vec<AtomicBool> = (0..n_usize).map(|_| AtomicBool::new(true)).collect();
    sieve[0].store(false, Ordering::Relaxed);
    sieve[1].store(false, Ordering::Relaxed);

    let sqrt_n = (n_usize as f64).sqrt() as usize;

    for i in 2..=sqrt_n {
        if sieve[i].load(Ordering::Relaxed) {
            // Corrected limit calculation: ensures `multiple` is strictly less than `n_usize`.
            let limit = (n_usize.saturating_sub(1).saturating_sub(i * i)) / i;
            (0..=limit).into_par_iter().for_each(|k| {
                let multiple = i * i + k * i;
                sieve[multiple].store(false, Ordering::Relaxed);
            });
        }
    }

    (2..n_usize)
        .filter_map(|i| {
            if sieve[i].load(Ordering::Relaxed) {
                Some(i as u32)
            } else {
                None
            }
        })
        .collect()
}
