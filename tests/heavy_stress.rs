#![cfg(feature = "heavy")]
use chain_dp::{problems::matrix_chain::MatrixChainProblem, IntervalEngine};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn heavy_stress_matrix_chain_medium() {
    let mut rng = StdRng::seed_from_u64(123);
    let p: Vec<u64> = (0..=1_500).map(|_| rng.gen_range(1..1_000)).collect();
    let problem = MatrixChainProblem::from_dimensions(&p);
    let engine = IntervalEngine::new(problem);
    let (cost, splits) = engine.run();
    // Left-to-right evaluation is one valid order, so it bounds the optimum.
    let naive: u128 = (1..p.len() - 1)
        .map(|k| u128::from(p[0]) * u128::from(p[k]) * u128::from(p[k + 1]))
        .sum();
    assert!(cost <= naive);
    assert_eq!(splits.len(), 1_499);
}
