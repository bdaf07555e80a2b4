//! Continued fractions: periodic expansions of square roots and the
//! convergents of arbitrary term sequences.

use crate::BigInt;
use crate::number_theory::isqrt;

/// The continued fraction of √n: `[a0; (period)]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SqrtExpansion {
    pub a0: u64,
    pub period: Vec<u64>,
}

impl SqrtExpansion {
    /// All terms `a0, a1, a2, ...`, cycling through the period forever.
    pub fn terms(&self) -> impl Iterator<Item = u64> + '_ {
        std::iter::once(self.a0).chain(self.period.iter().copied().cycle())
    }
}

/// Expand √n as a continued fraction. Returns `None` when n is a perfect
/// square, which has no repeating part.
///
/// ```
/// use math::continued_fraction::sqrt_expansion;
///
/// let e = sqrt_expansion(23).unwrap();
/// assert_eq!(e.a0, 4);
/// assert_eq!(e.period, vec![1, 3, 1, 8]);
/// assert!(sqrt_expansion(16).is_none());
/// ```
pub fn sqrt_expansion(n: u64) -> Option<SqrtExpansion> {
    let a0 = isqrt(n);
    if a0 * a0 == n {
        return None;
    }

    let mut period = Vec::new();
    let (mut m, mut d, mut a) = (0u64, 1u64, a0);
    // The period always ends with the first term equal to 2·a0.
    while a != 2 * a0 {
        m = d * a - m;
        d = (n - m * m) / d;
        a = (a0 + m) / d;
        period.push(a);
    }
    Some(SqrtExpansion { a0, period })
}

/// Iterator over the convergents `h/k` of a continued fraction given by its
/// terms.
pub struct Convergents<I> {
    terms: I,
    h: (BigInt, BigInt),
    k: (BigInt, BigInt),
}

impl<I: Iterator<Item = u64>> Convergents<I> {
    pub fn new(terms: I) -> Self {
        Convergents {
            terms,
            h: (BigInt::zero(), BigInt::from_u32(1)),
            k: (BigInt::from_u32(1), BigInt::zero()),
        }
    }
}

impl<I: Iterator<Item = u64>> Iterator for Convergents<I> {
    type Item = (BigInt, BigInt);

    fn next(&mut self) -> Option<Self::Item> {
        let a = self.terms.next()?;
        let h = &(&self.h.1 * a) + &self.h.0;
        let k = &(&self.k.1 * a) + &self.k.0;
        self.h.0 = std::mem::replace(&mut self.h.1, h.clone());
        self.k.0 = std::mem::replace(&mut self.k.1, k.clone());
        Some((h, k))
    }
}

pub fn convergents<I: IntoIterator<Item = u64>>(terms: I) -> Convergents<I::IntoIter> {
    Convergents::new(terms.into_iter())
}

/// Terms of the continued fraction of e: `[2; 1, 2, 1, 1, 4, 1, 1, 6, ...]`.
pub fn e_terms() -> impl Iterator<Item = u64> {
    std::iter::once(2).chain((1..).flat_map(|k| [1, 2 * k, 1]))
}
