//! Generic interval DP engine.
//!
//! This module fills the interval table of an [`IntervalProblem`] one
//! diagonal at a time:
//! 1. Single-item intervals take their base cost.
//! 2. Each longer interval `[i, j]` scans every split `k` in `[i, j)` and
//!    keeps the first minimum.
//!
//! Intervals of the same length only read shorter intervals, so a whole
//! diagonal can be evaluated independently. With the `parallel` feature the
//! engine hands large diagonals to rayon.
//!
//! The engine is completely generic over implementations of [`IntervalProblem`].

use crate::table::IntervalTable;
use crate::traits::IntervalProblem;
use crate::utils::{diagonal_work, DEFAULT_PARALLEL_THRESHOLD};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Thread-safety bound required of problems and costs.
///
/// Resolves to `Send + Sync` with the `parallel` feature and to nothing
/// otherwise, so sequential builds accept any problem type.
#[cfg(feature = "parallel")]
pub trait MaybeSync: Send + Sync {}
#[cfg(feature = "parallel")]
impl<T: Send + Sync> MaybeSync for T {}

#[cfg(not(feature = "parallel"))]
pub trait MaybeSync {}
#[cfg(not(feature = "parallel"))]
impl<T> MaybeSync for T {}

/// One optimal split decision: `[i, j]` is evaluated as `[i, k] * [k+1, j]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Split {
    pub i: usize,
    pub j: usize,
    pub k: usize,
}

/// Filled tables for one problem instance.
#[derive(Clone, Debug)]
pub struct IntervalSolution<C> {
    costs: IntervalTable<C>,
    splits: Option<IntervalTable<usize>>,
    empty_cost: C,
}

impl<C: Copy> IntervalSolution<C> {
    /// Optimal cost of the full interval `[0, n-1]`.
    pub fn cost(&self) -> C {
        match self.costs.size() {
            0 => self.empty_cost,
            n => self.costs[(0, n - 1)],
        }
    }

    /// Optimal cost of every interval.
    pub fn costs(&self) -> &IntervalTable<C> {
        &self.costs
    }

    /// Split table, present when the solution was built by
    /// [`IntervalEngine::solve`].
    pub fn splits(&self) -> Option<&IntervalTable<usize>> {
        self.splits.as_ref()
    }

    /// Best split point of `[i, j]`. `None` for single items, out-of-range
    /// intervals, or when splits were not recorded.
    pub fn split_at(&self, i: usize, j: usize) -> Option<usize> {
        if i >= j {
            return None;
        }
        self.splits.as_ref()?.get(i, j).copied()
    }

    /// Split decisions for the full interval in preorder (parent, then left
    /// subtree, then right subtree). Empty for fewer than two items.
    pub fn split_sequence(&self) -> Vec<Split> {
        let n = self.costs.size();
        let mut out = Vec::with_capacity(n.saturating_sub(1));
        if n < 2 {
            return out;
        }
        let mut stack = vec![(0usize, n - 1)];
        while let Some((i, j)) = stack.pop() {
            let Some(k) = self.split_at(i, j) else {
                continue;
            };
            out.push(Split { i, j, k });
            stack.push((k + 1, j));
            stack.push((i, k));
        }
        out
    }
}

/// Interval DP engine for a given problem instance `P`.
///
/// Typical usage:
/// ```
/// use chain_dp::{IntervalEngine, problems::matrix_chain::MatrixChainProblem};
///
/// let problem = MatrixChainProblem::from_dimensions(&[30, 35, 15, 5, 10, 20, 25]);
/// let engine = IntervalEngine::new(problem);
/// let (cost, splits) = engine.run();
/// assert_eq!(cost, 15125);
/// assert_eq!(splits.len(), 5);
/// ```
pub struct IntervalEngine<P: IntervalProblem> {
    problem: P,
    parallel_threshold: usize,
}

impl<P: IntervalProblem> IntervalEngine<P> {
    /// Create a new engine with the default parallel threshold.
    pub fn new(problem: P) -> Self {
        Self::with_parallel_threshold(problem, DEFAULT_PARALLEL_THRESHOLD)
    }

    /// Create a new engine that parallelises diagonals needing at least
    /// `threshold` split evaluations. Has no effect without the `parallel`
    /// feature.
    ///
    /// # Panics
    /// Panics if `threshold == 0`.
    pub fn with_parallel_threshold(problem: P, threshold: usize) -> Self {
        assert!(threshold > 0, "parallel_threshold must be positive");
        Self {
            problem,
            parallel_threshold: threshold,
        }
    }

    /// Expose immutable reference to the underlying problem.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Expose mutable reference if callers need to adjust configuration.
    pub fn problem_mut(&mut self) -> &mut P {
        &mut self.problem
    }

    /// Return the configured parallel threshold.
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Evaluate the best split of `[i, j]` given all shorter intervals.
    ///
    /// Ties keep the smallest `k`.
    fn best_split(&self, costs: &IntervalTable<P::Cost>, i: usize, j: usize) -> (P::Cost, usize) {
        debug_assert!(i < j);
        let eval = |k: usize| {
            self.problem
                .combine(i, k, j, costs[(i, k)], costs[(k + 1, j)])
        };
        let mut best = (eval(i), i);
        for k in (i + 1)..j {
            let cand = eval(k);
            if cand < best.0 {
                best = (cand, k);
            }
        }
        best
    }
}

impl<P> IntervalEngine<P>
where
    P: IntervalProblem + MaybeSync,
    P::Cost: MaybeSync,
{
    /// Optimal cost of the full interval, without recording splits.
    pub fn min_cost(&self) -> P::Cost {
        self.fill(false).cost()
    }

    /// Fill both the cost table and the split table.
    pub fn solve(&self) -> IntervalSolution<P::Cost> {
        self.fill(true)
    }

    /// Run the full DP.
    ///
    /// Returns `(optimal_cost, split_decisions)` with the splits in preorder,
    /// so the first entry (if any) is the top-level split of `[0, n-1]`.
    pub fn run(&self) -> (P::Cost, Vec<Split>) {
        let solution = self.solve();
        (solution.cost(), solution.split_sequence())
    }

    fn fill(&self, record_splits: bool) -> IntervalSolution<P::Cost> {
        let n = self.problem.num_items();
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("interval_run", n, record_splits);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let empty_cost = self.problem.empty_cost();
        let mut costs = IntervalTable::filled(n, empty_cost);
        let mut splits = record_splits.then(|| IntervalTable::filled(n, 0usize));

        for i in 0..n {
            costs.set(i, i, self.problem.base_cost(i));
        }

        for len in 2..=n {
            let cells = self.fill_diagonal(&costs, len);
            for (i, (cost, k)) in cells.into_iter().enumerate() {
                let j = i + len - 1;
                costs.set(i, j, cost);
                if let Some(splits) = splits.as_mut() {
                    splits.set(i, j, k);
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(n, cells = costs.len(), "interval table filled");

        IntervalSolution {
            costs,
            splits,
            empty_cost,
        }
    }

    /// Best `(cost, split)` for every interval of length `len`, indexed by
    /// start position.
    fn fill_diagonal(&self, costs: &IntervalTable<P::Cost>, len: usize) -> Vec<(P::Cost, usize)> {
        let n = costs.size();
        let count = n - len + 1;
        let parallel = diagonal_work(n, len) >= self.parallel_threshold;
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("fill_diagonal", len, count, parallel);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        #[cfg(feature = "parallel")]
        if parallel {
            return (0..count)
                .into_par_iter()
                .map(|i| self.best_split(costs, i, i + len - 1))
                .collect();
        }
        #[cfg(not(feature = "parallel"))]
        let _ = parallel;

        (0..count)
            .map(|i| self.best_split(costs, i, i + len - 1))
            .collect()
    }
}
