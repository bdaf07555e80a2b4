/// The n-th digit (1-based) of 0.123456789101112...
fn champernowne_digit(n: u64) -> u32 {
    let mut n = n - 1;
    let mut width = 1;
    let mut count = 9;
    let mut start = 1;

    while n >= width * count {
        n -= width * count;
        width += 1;
        count *= 10;
        start *= 10;
    }

    let number = start + n / width;
    let offset = (n % width) as usize;
    number.to_string().as_bytes()[offset] as u32 - '0' as u32
}

/// PE40: Champernowne's Constant
pub fn solve() -> String {
    (0..7)
        .map(|e| champernowne_digit(10u64.pow(e)))
        .product::<u32>()
        .to_string()
}
