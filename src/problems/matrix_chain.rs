//! Matrix-chain multiplication as an interval DP instance.
//!
//! Classic DP:
//! - Given matrices A_0..A_{n-1} where A_i is `rows_i x cols_i`,
//! - find the parenthesization minimizing scalar multiplications.
//!
//! Multiplying an `a x b` matrix by a `b x c` matrix takes `a * b * c`
//! scalar multiplications, so splitting `[i, j]` after `k` costs
//! `rows_i * cols_k * cols_j` on top of the two halves.
//!
//! Costs are `u128` and every addition and multiplication saturates, so the
//! computation is total over all `u64` shapes. Adjacent shapes are only
//! checked by the `try_*` entry points; the unchecked ones compute the
//! recurrence on whatever shapes they are given.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::{IntervalEngine, IntervalSolution};
use crate::error::{InvalidChainError, Result};
use crate::traits::IntervalProblem;

/// Shape of one matrix in a chain. Carries no element data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatrixDescriptor {
    pub rows: u64,
    pub cols: u64,
}

impl MatrixDescriptor {
    pub const fn new(rows: u64, cols: u64) -> Self {
        Self { rows, cols }
    }

    /// Shape of the transpose.
    pub const fn transposed(self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Whether `self * rhs` is defined.
    pub const fn conforms_to(self, rhs: Self) -> bool {
        self.cols == rhs.rows
    }
}

impl From<(u64, u64)> for MatrixDescriptor {
    fn from((rows, cols): (u64, u64)) -> Self {
        Self { rows, cols }
    }
}

/// Scalar multiplications for an `a x b` times `b x c` product.
#[inline]
fn product_cost(a: u64, b: u64, c: u64) -> u128 {
    // a * b always fits in 128 bits; the third factor may not.
    (u128::from(a) * u128::from(b)).saturating_mul(u128::from(c))
}

/// Matrix-chain DP instance.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixChainProblem {
    pub chain: Vec<MatrixDescriptor>,
}

impl MatrixChainProblem {
    /// Wrap a chain without checking adjacent shapes.
    pub fn new(chain: Vec<MatrixDescriptor>) -> Self {
        Self { chain }
    }

    /// Wrap a chain, rejecting it at the first pair of non-conforming
    /// neighbours.
    pub fn try_new(chain: Vec<MatrixDescriptor>) -> Result<Self> {
        validate(&chain)?;
        Ok(Self { chain })
    }

    /// Build a chain from dimensions `p[0..=n]`, with matrix `i` of size
    /// `p[i] x p[i+1]`. Fewer than two dimensions describe an empty chain.
    pub fn from_dimensions(p: &[u64]) -> Self {
        let chain = p
            .windows(2)
            .map(|w| MatrixDescriptor::new(w[0], w[1]))
            .collect();
        Self { chain }
    }

    /// Number of matrices.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// The reversed chain of transposes, i.e. the chain for `(A_0 ... A_{n-1})^T`.
    /// It has the same optimal cost as `self`.
    pub fn transposed(&self) -> Self {
        Self {
            chain: self.chain.iter().rev().map(|m| m.transposed()).collect(),
        }
    }

    /// Rebuild the optimal order from a solution of this problem.
    ///
    /// Returns `None` for an empty chain or when the solution carries no
    /// split table.
    pub fn order_from(&self, solution: &IntervalSolution<u128>) -> Option<Parenthesization> {
        if self.is_empty() {
            return None;
        }
        Parenthesization::from_solution(solution, 0, self.len() - 1)
    }
}

impl IntervalProblem for MatrixChainProblem {
    type Cost = u128;

    fn num_items(&self) -> usize {
        self.chain.len()
    }

    fn empty_cost(&self) -> Self::Cost {
        0
    }

    fn base_cost(&self, _i: usize) -> Self::Cost {
        0
    }

    fn combine(
        &self,
        i: usize,
        k: usize,
        j: usize,
        left: Self::Cost,
        right: Self::Cost,
    ) -> Self::Cost {
        let step = product_cost(self.chain[i].rows, self.chain[k].cols, self.chain[j].cols);
        left.saturating_add(right).saturating_add(step)
    }
}

/// Check that every neighbour pair of `chain` can be multiplied.
pub fn validate(chain: &[MatrixDescriptor]) -> std::result::Result<(), InvalidChainError> {
    match chain
        .windows(2)
        .position(|w| !w[0].conforms_to(w[1]))
    {
        Some(index) => Err(InvalidChainError {
            index,
            cols: chain[index].cols,
            next_rows: chain[index + 1].rows,
        }),
        None => Ok(()),
    }
}

/// Minimum number of scalar multiplications needed to reduce `chain` to a
/// single matrix.
///
/// Returns 0 for empty and single-matrix chains. Adjacent shapes are not
/// checked.
///
/// ```
/// use chain_dp::problems::matrix_chain::{min_multiplication_cost, MatrixDescriptor};
///
/// let chain = [MatrixDescriptor::new(2, 3), MatrixDescriptor::new(3, 2)];
/// assert_eq!(min_multiplication_cost(&chain), 12);
/// ```
pub fn min_multiplication_cost(chain: &[MatrixDescriptor]) -> u128 {
    IntervalEngine::new(MatrixChainProblem::new(chain.to_vec())).min_cost()
}

/// Like [`min_multiplication_cost`] but rejects non-conforming chains.
pub fn try_min_multiplication_cost(chain: &[MatrixDescriptor]) -> Result<u128> {
    let problem = MatrixChainProblem::try_new(chain.to_vec())?;
    Ok(IntervalEngine::new(problem).min_cost())
}

/// Optimal multiplication order for `chain`, or `None` when it is empty.
pub fn optimal_order(chain: &[MatrixDescriptor]) -> Option<Parenthesization> {
    let problem = MatrixChainProblem::new(chain.to_vec());
    let engine = IntervalEngine::new(problem);
    let solution = engine.solve();
    engine.problem().order_from(&solution)
}

/// A full binary tree over matrix indices describing evaluation order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Parenthesization {
    Leaf(usize),
    Product(Box<Parenthesization>, Box<Parenthesization>),
}

impl Parenthesization {
    fn from_solution(solution: &IntervalSolution<u128>, i: usize, j: usize) -> Option<Self> {
        if i == j {
            return Some(Self::Leaf(i));
        }
        let k = solution.split_at(i, j)?;
        let left = Self::from_solution(solution, i, k)?;
        let right = Self::from_solution(solution, k + 1, j)?;
        Some(Self::Product(Box::new(left), Box::new(right)))
    }

    /// Matrix indices in left-to-right order.
    pub fn leaves(&self) -> Vec<usize> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves(&self, out: &mut Vec<usize>) {
        match self {
            Self::Leaf(i) => out.push(*i),
            Self::Product(l, r) => {
                l.collect_leaves(out);
                r.collect_leaves(out);
            }
        }
    }

    /// Height of the tree; a single matrix has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf(_) => 0,
            Self::Product(l, r) => 1 + l.depth().max(r.depth()),
        }
    }

    /// Scalar multiplications needed to evaluate this order over `chain`.
    ///
    /// Returns `None` if a leaf index is outside `chain`.
    pub fn cost(&self, chain: &[MatrixDescriptor]) -> Option<u128> {
        self.evaluate(chain).map(|(_, _, cost)| cost)
    }

    /// `(rows, cols, cost)` of the sub-product.
    fn evaluate(&self, chain: &[MatrixDescriptor]) -> Option<(u64, u64, u128)> {
        match self {
            Self::Leaf(i) => chain.get(*i).map(|m| (m.rows, m.cols, 0)),
            Self::Product(l, r) => {
                let (l_rows, l_cols, l_cost) = l.evaluate(chain)?;
                let (_, r_cols, r_cost) = r.evaluate(chain)?;
                let cost = l_cost
                    .saturating_add(r_cost)
                    .saturating_add(product_cost(l_rows, l_cols, r_cols));
                Some((l_rows, r_cols, cost))
            }
        }
    }
}

impl fmt::Display for Parenthesization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(i) => write!(f, "A{}", i + 1),
            Self::Product(l, r) => write!(f, "({l}{r})"),
        }
    }
}
