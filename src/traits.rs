//! Core trait definition for interval dynamic programs.
//!
//! To run a recurrence on [`IntervalEngine`](crate::engine::IntervalEngine),
//! implement [`IntervalProblem`] for a struct that captures your instance
//! (dimensions, weights, keys, ...).
//!
//! The trait encodes the classic "optimal split" family of recurrences:
//! - Items `0..n` are arranged in a fixed order.
//! - Every closed interval `[i, j]` has an optimal cost.
//! - Single-item intervals have a base cost.
//! - A longer interval picks the split `k` in `[i, j)` minimising
//!   `combine(i, k, j, cost[i..=k], cost[k+1..=j])`.
//!
//! The engine fills intervals by increasing length, so `combine` may assume
//! both halves are already optimal.

/// Trait for an interval DP instance.
///
/// Semantics:
/// - There are `n = num_items()` leaves.
/// - `cost[i][i] = base_cost(i)`.
/// - `cost[i][j] = min_k combine(i, k, j, cost[i][k], cost[k+1][j])` for `i < j`.
/// - The answer is `cost[0][n-1]`, or `empty_cost()` when `n == 0`.
pub trait IntervalProblem {
    /// Objective / cost type.
    ///
    /// Must support ordering so the engine can pick the minimum.
    type Cost: Copy + Ord;

    /// Number of leaves `n`.
    fn num_items(&self) -> usize;

    /// Answer for an instance with no items.
    fn empty_cost(&self) -> Self::Cost;

    /// Cost of the single-item interval `[i, i]`.
    fn base_cost(&self, i: usize) -> Self::Cost;

    /// Candidate cost of `[i, j]` when split into `[i, k]` and `[k+1, j]`.
    ///
    /// Requirements:
    /// - `i <= k < j`.
    /// - Must be a pure function of its arguments and the fixed problem data.
    fn combine(
        &self,
        i: usize,
        k: usize,
        j: usize,
        left: Self::Cost,
        right: Self::Cost,
    ) -> Self::Cost;
}
