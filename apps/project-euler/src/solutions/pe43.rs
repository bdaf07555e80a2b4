use tracing::debug;

const DIVISORS: [u64; 7] = [2, 3, 5, 7, 11, 13, 17];

/// Extend `prefix` one digit at a time, checking each new three-digit window
/// d(k-2)d(k-1)d(k) against its divisor as soon as it is complete.
fn extend(prefix: &mut Vec<u64>, used: &mut [bool; 10], found: &mut Vec<u64>) {
    let len = prefix.len();
    if len >= 4 {
        let window = prefix[len - 3] * 100 + prefix[len - 2] * 10 + prefix[len - 1];
        if window % DIVISORS[len - 4] != 0 {
            return;
        }
    }
    if len == 10 {
        found.push(prefix.iter().fold(0, |acc, &d| acc * 10 + d));
        return;
    }

    for d in 0..10 {
        if used[d as usize] || (len == 0 && d == 0) {
            continue;
        }
        used[d as usize] = true;
        prefix.push(d);
        extend(prefix, used, found);
        prefix.pop();
        used[d as usize] = false;
    }
}

fn substring_divisible_pandigitals() -> Vec<u64> {
    let mut found = Vec::new();
    extend(&mut Vec::with_capacity(10), &mut [false; 10], &mut found);
    found
}

/// PE43: Sub-string Divisibility
pub fn solve() -> String {
    let found = substring_divisible_pandigitals();
    debug!("pandigitals: {:?}", found);
    found.iter().sum::<u64>().to_string()
}
