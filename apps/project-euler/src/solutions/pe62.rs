use std::collections::HashMap;

use math::digit_signature;
use math::digits::num_digits;

/// Smallest cube with exactly `count` digit permutations (itself included)
/// that are also cubes.
///
/// Families can only be complete once every cube of the same length has been
/// seen, so they are checked each time the digit count grows.
fn smallest_cube_family(count: usize) -> u64 {
    let mut families: HashMap<[u8; 10], Vec<u64>> = HashMap::new();
    let mut width = 1;

    let mut n = 0u64;
    loop {
        n += 1;
        let cube = n * n * n;
        if num_digits(cube) > width {
            if let Some(smallest) = families
                .values()
                .filter(|cubes| cubes.len() == count)
                .map(|cubes| cubes[0])
                .min()
            {
                return smallest;
            }
            families.clear();
            width = num_digits(cube);
        }
        families.entry(digit_signature(cube)).or_default().push(cube);
    }
}

/// PE62: Cubic Permutations
pub fn solve() -> String {
    smallest_cube_family(5).to_string()
}
