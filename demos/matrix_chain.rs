//! Example: Matrix-chain multiplication on the interval DP engine.
//!
//! Run with:
//! `cargo run --example matrix_chain`

use chain_dp::{problems::matrix_chain::MatrixChainProblem, IntervalEngine};

fn main() {
    // Example from CLRS:
    // Matrices A1..A6 with dimensions:
    // 30x35, 35x15, 15x5, 5x10, 10x20, 20x25
    let problem = MatrixChainProblem::from_dimensions(&[30, 35, 15, 5, 10, 20, 25]);
    let engine = IntervalEngine::new(problem);

    let solution = engine.solve();
    println!("Optimal multiplication cost: {}", solution.cost());
    if let Some(order) = engine.problem().order_from(&solution) {
        println!("Optimal order: {order}");
    }
    println!("Split decisions (i,j,k):");
    for s in solution.split_sequence() {
        println!("  Split A[{}..{}] after A{}", s.i + 1, s.j + 1, s.k + 1);
    }
}
