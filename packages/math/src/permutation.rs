//! Lexicographic permutations and combinations over slices.

/// Rearrange `items` into the next lexicographically greater permutation.
///
/// Returns `false` (leaving the slice sorted ascending) when `items` was
/// already the last permutation.
///
/// ```
/// use math::permutation::next_permutation;
///
/// let mut v = [0, 1, 2];
/// let mut seen = vec![v];
/// while next_permutation(&mut v) {
///     seen.push(v);
/// }
/// assert_eq!(seen.len(), 6);
/// assert_eq!(seen[1], [0, 2, 1]);
/// ```
pub fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    let Some(pivot) = items.windows(2).rposition(|w| w[0] < w[1]) else {
        items.reverse();
        return false;
    };
    let Some(successor) = items.iter().rposition(|x| x > &items[pivot]) else {
        return false;
    };
    items.swap(pivot, successor);
    items[pivot + 1..].reverse();
    true
}

/// Rearrange `items` into the next lexicographically smaller permutation.
pub fn prev_permutation<T: Ord>(items: &mut [T]) -> bool {
    let Some(pivot) = items.windows(2).rposition(|w| w[0] > w[1]) else {
        items.reverse();
        return false;
    };
    let Some(predecessor) = items.iter().rposition(|x| x < &items[pivot]) else {
        return false;
    };
    items.swap(pivot, predecessor);
    items[pivot + 1..].reverse();
    true
}

/// Iterator over all `k`-element subsets of a slice, in lexicographic order of
/// positions.
pub struct Combinations<'a, T> {
    pool: &'a [T],
    indices: Vec<usize>,
    done: bool,
}

impl<'a, T> Combinations<'a, T> {
    pub fn new(pool: &'a [T], k: usize) -> Self {
        Combinations {
            pool,
            indices: (0..k).collect(),
            done: k > pool.len(),
        }
    }
}

impl<T: Clone> Iterator for Combinations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.indices.iter().map(|&i| self.pool[i].clone()).collect();

        let n = self.pool.len();
        let k = self.indices.len();
        match (0..k).rev().find(|&i| self.indices[i] != i + n - k) {
            Some(i) => {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => self.done = true,
        }
        Some(current)
    }
}

pub fn combinations<T>(pool: &[T], k: usize) -> Combinations<'_, T> {
    Combinations::new(pool, k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_permutation_wraps() {
        let mut v = [3, 2, 1];
        assert!(!next_permutation(&mut v));
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn test_next_permutation_with_duplicates() {
        let mut v = [1, 1, 2];
        let mut count = 1;
        while next_permutation(&mut v) {
            count += 1;
        }
        assert_eq!(count, 3);
    }

    #[test]
    fn test_millionth_permutation() {
        let mut digits = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        for _ in 1..1_000_000 {
            next_permutation(&mut digits);
        }
        assert_eq!(digits, [2, 7, 8, 3, 9, 1, 5, 4, 6, 0]);
    }

    #[test]
    fn test_prev_permutation() {
        let mut v = [3, 2, 1];
        assert!(prev_permutation(&mut v));
        assert_eq!(v, [3, 1, 2]);

        let mut first = [1, 2, 3];
        assert!(!prev_permutation(&mut first));
        assert_eq!(first, [3, 2, 1]);
    }

    #[test]
    fn test_combinations() {
        let all: Vec<Vec<char>> = combinations(&['a', 'b', 'c', 'd'], 2).collect();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], vec!['a', 'b']);
        assert_eq!(all[5], vec!['c', 'd']);

        assert_eq!(combinations(&[0; 10], 6).count(), 210);
        assert_eq!(combinations(&[1, 2], 3).count(), 0);
        assert_eq!(combinations(&[1, 2], 0).count(), 1);
    }
}
