use std::collections::BTreeSet;

use math::{combinations, gcd};
use tracing::debug;

/// An exact rational number with a positive denominator, kept in lowest terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frac {
    num: i64,
    den: i64,
}

impl Frac {
    fn new(num: i64, den: i64) -> Option<Frac> {
        if den == 0 {
            return None;
        }
        let sign = den.signum();
        let g = gcd(num.unsigned_abs(), den.unsigned_abs()).max(1) as i64;
        Some(Frac {
            num: sign * num / g,
            den: sign * den / g,
        })
    }

    fn int(n: i64) -> Frac {
        Frac { num: n, den: 1 }
    }

    /// Every value obtainable from `self` and `other` with one operator, in
    /// either order.
    fn combine(self, other: Frac) -> impl Iterator<Item = Frac> {
        let (a, b, c, d) = (self.num, self.den, other.num, other.den);
        [
            Frac::new(a * d + c * b, b * d),
            Frac::new(a * d - c * b, b * d),
            Frac::new(c * b - a * d, b * d),
            Frac::new(a * c, b * d),
            Frac::new(a * d, b * c),
            Frac::new(c * b, d * a),
        ]
        .into_iter()
        .flatten()
    }
}

/// Collect the positive integers reachable by reducing `values` pairwise to
/// a single number. Picking any two and replacing them with their
/// combination covers every ordering and bracketing.
fn reachable(values: &[Frac], out: &mut BTreeSet<i64>) {
    if let [only] = values {
        if only.den == 1 && only.num > 0 {
            out.insert(only.num);
        }
        return;
    }
    for i in 0..values.len() {
        for j in i + 1..values.len() {
            let rest: Vec<Frac> = values
                .iter()
                .enumerate()
                .filter(|&(k, _)| k != i && k != j)
                .map(|(_, &v)| v)
                .collect();
            for combined in values[i].combine(values[j]) {
                let mut next = rest.clone();
                next.push(combined);
                reachable(&next, out);
            }
        }
    }
}

/// Length of the run 1, 2, ..., n of targets expressible from `digits`.
fn consecutive_run(digits: &[u8]) -> i64 {
    let values: Vec<Frac> = digits.iter().map(|&d| Frac::int(d as i64)).collect();
    let mut targets = BTreeSet::new();
    reachable(&values, &mut targets);
    (1..).take_while(|n| targets.contains(n)).count() as i64
}

/// PE93: Arithmetic Expressions
pub fn solve() -> String {
    let digits: Vec<u8> = (1..10).collect();
    let mut best: (i64, Vec<u8>) = (0, Vec::new());
    for set in combinations(&digits, 4) {
        let run = consecutive_run(&set);
        if run > best.0 {
            debug!(run, digits = ?set, "longer run");
            best = (run, set);
        }
    }
    best.1.iter().map(|d| d.to_string()).collect()
}
