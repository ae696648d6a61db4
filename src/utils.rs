//! Assorted utilities and helpers.

/// Default minimum amount of split evaluations on one diagonal before the
/// engine fans it out across threads.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1 << 14;

/// Number of split evaluations needed to fill the diagonal of intervals of
/// length `len` over `n` items.
///
/// There are `n - len + 1` such intervals, each with `len - 1` split points.
/// Returns 0 for lengths that have no splits or do not fit.
#[inline]
pub fn diagonal_work(n: usize, len: usize) -> usize {
    if len < 2 || len > n {
        0
    } else {
        (n - len + 1) * (len - 1)
    }
}
