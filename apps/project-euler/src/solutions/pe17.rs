const ONES: [&str; 20] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// British spelling without spaces or hyphens: 342 -> "threehundredandfortytwo".
fn spell(n: u32) -> String {
    match n {
        0..=19 => ONES[n as usize].to_string(),
        20..=99 => format!("{}{}", TENS[(n / 10) as usize], ONES[(n % 10) as usize]),
        100..=999 => {
            let hundreds = format!("{}hundred", ONES[(n / 100) as usize]);
            match n % 100 {
                0 => hundreds,
                rest => format!("{}and{}", hundreds, spell(rest)),
            }
        }
        1000 => "onethousand".to_string(),
        _ => String::new(),
    }
}

fn letter_count(n: u32) -> usize {
    spell(n).len()
}

/// PE17: Number Letter Counts
pub fn solve() -> String {
    let total: usize = (1..=1000).map(letter_count).sum();
    total.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_count_1_to_5() {
        // one, two, three, four, five
        assert_eq!((1..=5).map(letter_count).sum::<usize>(), 19);
    }

    #[test]
    fn test_letter_count_20_to_99() {
        assert_eq!(letter_count(20), 6); // "twenty"
        assert_eq!(letter_count(22), 9); // "twentytwo"
        assert_eq!(letter_count(47), 10); // "fortyseven"
    }

    #[test]
    fn test_british_and() {
        assert_eq!(spell(342), "threehundredandfortytwo");
        assert_eq!(letter_count(342), 23);
        assert_eq!(letter_count(115), 20);
        assert_eq!(spell(300), "threehundred");
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "21124");
    }
}
