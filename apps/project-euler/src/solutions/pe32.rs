use std::collections::BTreeSet;

use math::digits::is_pandigital;
use tracing::debug;

/// PE32: Pandigital Products
/// Only 1-digit × 4-digit and 2-digit × 3-digit factors can give a
/// 9-digit identity.
pub fn solve() -> String {
    let mut products = BTreeSet::new();

    for (a_range, b_range) in [(1..10u32, 1000..10000u32), (10..100, 100..1000)] {
        for a in a_range {
            for b in b_range.clone() {
                let product = a * b;
                let identity = format!("{}{}{}", a, b, product);
                if identity.len() > 9 {
                    break;
                }
                if is_pandigital(&identity, 1, 9) {
                    debug!("{} × {} = {}", a, b, product);
                    products.insert(product);
                }
            }
        }
    }

    products.iter().sum::<u32>().to_string()
}
