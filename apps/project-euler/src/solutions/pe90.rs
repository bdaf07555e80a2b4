use math::combinations;

const SQUARES: [(u8, u8); 9] = [
    (0, 1),
    (0, 4),
    (0, 9),
    (1, 6),
    (2, 5),
    (3, 6),
    (4, 9),
    (6, 4),
    (8, 1),
];

/// A die face set as a bitmask, with 6 and 9 standing in for each other.
fn face_mask(faces: &[u8]) -> u16 {
    let mut mask = faces.iter().fold(0u16, |m, &d| m | 1 << d);
    if mask & (1 << 6 | 1 << 9) != 0 {
        mask |= 1 << 6 | 1 << 9;
    }
    mask
}

fn shows_all_squares(a: u16, b: u16) -> bool {
    let has = |mask: u16, d: u8| mask & (1 << d) != 0;
    SQUARES
        .iter()
        .all(|&(x, y)| (has(a, x) && has(b, y)) || (has(a, y) && has(b, x)))
}

/// PE90: Cube Digit Pairs
pub fn solve() -> String {
    let digits: Vec<u8> = (0..10).collect();
    let dice: Vec<u16> = combinations(&digits, 6).map(|f| face_mask(&f)).collect();

    let mut count = 0;
    for i in 0..dice.len() {
        for j in i..dice.len() {
            if shows_all_squares(dice[i], dice[j]) {
                count += 1;
            }
        }
    }
    count.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_arrangement() {
        let a = face_mask(&[0, 5, 6, 7, 8, 9]);
        let b = face_mask(&[1, 2, 3, 4, 8, 9]);
        assert!(shows_all_squares(a, b));
        assert_eq!(a, face_mask(&[0, 5, 6, 7, 8, 6]));
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "1217");
    }
}
