use tracing::debug;

/// The 1000-digit number, in 50-digit rows.
const SERIES: [&str; 20] = [
    "73167176531330624919225119674426574742355349194934",
    "96983520312774506326239578318016984801869478851843",
    "85861560789112949495459501737958331952853208805511",
    "12540698747158523863050715693290963295227443043557",
    "66896648950445244523161731856403098711121722383113",
    "62229893423380308135336276614282806444486645238749",
    "30358907296290491560440772390713810515859307960866",
    "70172427121883998797908792274921901699720888093776",
    "65727333001053367881220235421809751254540594752243",
    "52584907711670556013604839586446706324415722155397",
    "53697817977846174064955149290862569321978468622482",
    "83972241375657056057490261407972968652414535100474",
    "82166370484403199890008895243450658541227588666881",
    "16427171479924442928230863465674813919123162824586",
    "17866458359124566529476545682848912883142607690042",
    "24219022671055626321111109370544217506941658960408",
    "07198403850962455444362981230987879927244284909188",
    "84580156166097919133875499200524063689912560717606",
    "05886116467109405077541002256983155200055935729725",
    "71636269561882670428252483600823257530420752963450",
];

/// PE8: Largest Product in a Series
/// Find the thirteen adjacent digits with the greatest product.
pub fn solve() -> String {
    let digits: Vec<u64> = SERIES
        .iter()
        .flat_map(|row| row.bytes())
        .map(|b| (b - b'0') as u64)
        .collect();
    largest_window_product(&digits, 13).to_string()
}

fn largest_window_product(digits: &[u64], width: usize) -> u64 {
    let mut best = 0;
    let mut best_start = 0;
    let mut start = 0;

    while start + width <= digits.len() {
        let window = &digits[start..start + width];
        // Any window containing a zero is worthless; jump past the last zero.
        if let Some(zero) = window.iter().rposition(|&d| d == 0) {
            start += zero + 1;
            continue;
        }
        let product = window.iter().product();
        if product > best {
            best = product;
            best_start = start;
        }
        start += 1;
    }

    debug!(best_start, "largest product window");
    best
}
