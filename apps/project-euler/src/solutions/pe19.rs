use tracing::debug;

fn is_leap(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        1 => {
            if is_leap(year) {
                29
            } else {
                28
            }
        }
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

/// PE19: Counting Sundays
/// Months are 0-based; 1 Jan 1900 was a Monday.
pub fn solve() -> String {
    let mut day = 1; // 0 = Sunday, 1 = Monday, ...

    // Advance through 1900 to find what day 1 Jan 1901 is
    for month in 0..12 {
        day = (day + days_in_month(1900, month)) % 7;
    }
    debug!("1 Jan 1901 is day {}", day);

    let mut count = 0;
    for year in 1901..=2000 {
        for month in 0..12 {
            if day == 0 {
                count += 1;
            }
            day = (day + days_in_month(year, month)) % 7;
        }
    }

    count.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2000, 1), 29); // 2000 is leap (divisible by 400)
        assert_eq!(days_in_month(1900, 1), 28); // 1900 is not leap (divisible by 100 but not 400)
        assert_eq!(days_in_month(2004, 1), 29); // 2004 is leap
        assert_eq!(days_in_month(2001, 1), 28); // 2001 is not leap
        assert_eq!(days_in_month(2001, 8), 30); // September
        assert_eq!((0..12).map(|m| days_in_month(2001, m)).sum::<u32>(), 365);
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "171");
    }
}
