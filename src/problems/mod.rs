//! Reference problem implementations for the interval DP engine.
//!
//! These modules show how to implement
//! [`IntervalProblem`](crate::traits::IntervalProblem) for concrete dynamic
//! programs:
//! - [`matrix_chain`]  : Matrix-chain multiplication.

pub mod matrix_chain;
