//! Interval dynamic programming with an optimal matrix-chain solver.
//!
//! This crate provides a generic engine for "optimal split" recurrences over
//! a fixed sequence of items, and a ready-made instance for the classic
//! matrix-chain multiplication problem.
//!
//! ## Core idea
//! 1. Model your recurrence as an interval DP: every range `[i, j]` is solved
//!    by picking the best split `k` and combining `[i, k]` with `[k+1, j]`.
//! 2. Implement the [`IntervalProblem`] trait for that recurrence.
//! 3. Let [`IntervalEngine`] fill the table diagonal by diagonal to obtain the
//!    optimal cost, and optionally the split decisions behind it.
//!
//! The engine takes `O(n^3)` time and `O(n^2)` space. With the `parallel`
//! feature, large diagonals are evaluated on the rayon thread pool.
//!
//! ## Quick start
//! ```
//! use chain_dp::problems::matrix_chain::{min_multiplication_cost, optimal_order, MatrixDescriptor};
//!
//! let chain = [
//!     MatrixDescriptor::new(10, 100),
//!     MatrixDescriptor::new(100, 5),
//!     MatrixDescriptor::new(5, 50),
//! ];
//! assert_eq!(min_multiplication_cost(&chain), 7500);
//! assert_eq!(optimal_order(&chain).unwrap().to_string(), "((A1A2)A3)");
//! ```
//!
//! ## Features
//! - `parallel`: evaluate large diagonals with rayon.
//! - `tracing`: emit spans and events through the `tracing` crate.
//! - `heavy`: enable long-running stress tests.

pub mod builder;
pub mod engine;
pub mod error;
pub mod problems;
pub mod table;
pub mod traits;
pub mod utils;

pub use crate::builder::IntervalEngineBuilder;
pub use crate::engine::{IntervalEngine, IntervalSolution, Split};
pub use crate::error::{ChainError, InvalidChainError};
pub use crate::traits::IntervalProblem;
