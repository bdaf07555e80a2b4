use math::binomial;

/// PE15: Lattice Paths
/// Every route through an n×n grid is a choice of which n of the 2n moves go
/// right.
pub fn solve() -> String {
    lattice_paths(20).to_string()
}

fn lattice_paths(size: u64) -> u64 {
    binomial(2 * size, size)
}
