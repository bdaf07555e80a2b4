use std::collections::BTreeSet;

/// Walk factorizations with factors ≥ `min_factor`. A product N of f factors
/// summing to s is a product-sum number for k = N − s + f, padding with ones.
fn search(product: usize, sum: usize, factors: usize, min_factor: usize, best: &mut [usize]) {
    let k_max = best.len() - 1;
    if factors >= 2 {
        let k = product - sum + factors;
        if k > k_max {
            return;
        }
        best[k] = best[k].min(product);
    }
    // The minimal N for k is at most 2k.
    let mut f = min_factor;
    while product * f <= 2 * k_max {
        search(product * f, sum + f, factors + 1, f, best);
        f += 1;
    }
}

/// Sum of the distinct minimal product-sum numbers for 2 ≤ k ≤ k_max.
fn minimal_product_sum_total(k_max: usize) -> usize {
    let mut best = vec![usize::MAX; k_max + 1];
    search(1, 0, 0, 2, &mut best);
    best[2..].iter().copied().collect::<BTreeSet<_>>().iter().sum()
}

/// PE88: Product-sum Numbers
pub fn solve() -> String {
    minimal_product_sum_total(12_000).to_string()
}
