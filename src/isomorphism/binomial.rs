/// Binomial coefficient C(n, k), zero when `k > n`.
///
/// Intermediate products are carried in u128, so any coefficient that fits
/// in the result is computed exactly.
pub fn choose(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1u128, |acc, i| acc * (n - i) as u128 / (i + 1) as u128) as u64
}

/// Colexicographic rank of a set of ranks among all sets of the same size.
///
/// The i-th lowest set bit at position p contributes C(p, i + 1).
pub fn colex(set: u16) -> u64 {
    let mut set = set;
    let mut rank = 0;
    let mut i = 1;
    while set != 0 {
        rank += choose(set.trailing_zeros() as u64, i);
        set &= set - 1;
        i += 1;
    }
    rank
}
