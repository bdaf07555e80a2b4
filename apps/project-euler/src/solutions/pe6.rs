/// PE6: Sum Square Difference
/// Find the difference between the square of the sum and the sum of squares
/// for the first 100 natural numbers.
pub fn solve() -> String {
    sum_square_difference(100).to_string()
}

fn sum_square_difference(n: u64) -> u64 {
    let sum = n * (n + 1) / 2;
    let sum_of_squares = n * (n + 1) * (2 * n + 1) / 6;
    sum * sum - sum_of_squares
}
