use math::is_palindrome;

/// PE4: Largest Palindrome Product
/// Find the largest palindrome made from the product of two 3-digit numbers.
pub fn solve() -> String {
    largest_palindrome_product(100, 999).to_string()
}

fn largest_palindrome_product(lo: u64, hi: u64) -> u64 {
    let mut largest = 0;

    for i in (lo..=hi).rev() {
        for j in (lo..=i).rev() {
            let product = i * j;
            if product <= largest {
                break;
            }
            if is_palindrome(product, 10) {
                largest = product;
            }
        }
    }
    largest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_digit_factors() {
        assert_eq!(largest_palindrome_product(10, 99), 9009);
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(), "906609");
    }
}
