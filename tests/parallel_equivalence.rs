#![cfg(feature = "parallel")]

use chain_dp::{
    builder::IntervalEngineBuilder, problems::matrix_chain::MatrixChainProblem, IntervalEngine,
};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_dims(rng: &mut StdRng, n: usize) -> Vec<u64> {
    (0..=n).map(|_| rng.gen_range(1..500)).collect()
}

proptest! {
    #[test]
    fn parallel_matches_sequential(p in proptest::collection::vec(1u64..200, 0..40)) {
        let problem = MatrixChainProblem::from_dimensions(&p);
        let sequential = IntervalEngine::with_parallel_threshold(problem.clone(), usize::MAX).solve();
        let parallel = IntervalEngineBuilder::new(problem).always_parallel().build().solve();
        prop_assert_eq!(sequential.costs(), parallel.costs());
        prop_assert_eq!(sequential.splits(), parallel.splits());
    }
}

#[test]
fn parallel_matches_sequential_large() {
    let mut rng = StdRng::seed_from_u64(7);
    let p = random_dims(&mut rng, 200);
    let problem = MatrixChainProblem::from_dimensions(&p);
    let sequential = IntervalEngine::with_parallel_threshold(problem.clone(), usize::MAX).run();
    let parallel = IntervalEngineBuilder::new(problem)
        .with_parallel_threshold(64)
        .build()
        .run();
    assert_eq!(sequential, parallel);
}
