use chain_dp::{
    problems::matrix_chain::{min_multiplication_cost, optimal_order, MatrixChainProblem},
    IntervalEngine,
};
use proptest::prelude::*;

/// Exhaustive search over every parenthesization of `p[i..=j]`.
fn brute_force(p: &[u64], i: usize, j: usize) -> u128 {
    if j - i < 2 {
        return 0;
    }
    (i + 1..j)
        .map(|k| {
            brute_force(p, i, k)
                + brute_force(p, k, j)
                + u128::from(p[i]) * u128::from(p[k]) * u128::from(p[j])
        })
        .min()
        .unwrap_or(0)
}

fn full_table(p: &[u64]) -> u128 {
    let n = p.len().saturating_sub(1);
    if n < 2 {
        return 0;
    }
    let mut dp = vec![vec![0u128; n]; n];
    for len in 2..=n {
        for i in 0..=(n - len) {
            let j = i + len - 1;
            dp[i][j] = u128::MAX;
            for k in i..j {
                let cand = dp[i][k]
                    + dp[k + 1][j]
                    + u128::from(p[i]) * u128::from(p[k + 1]) * u128::from(p[j + 1]);
                dp[i][j] = dp[i][j].min(cand);
            }
        }
    }
    dp[0][n - 1]
}

proptest! {
    #[test]
    fn matches_exhaustive_search(p in proptest::collection::vec(1u64..50, 0..9)) {
        let problem = MatrixChainProblem::from_dimensions(&p);
        let expected = if p.len() < 2 { 0 } else { brute_force(&p, 0, p.len() - 1) };
        prop_assert_eq!(min_multiplication_cost(&problem.chain), expected);
    }

    #[test]
    fn matches_full_table(p in proptest::collection::vec(0u64..200, 0..24)) {
        let problem = MatrixChainProblem::from_dimensions(&p);
        let (cost, _splits) = IntervalEngine::new(problem).run();
        prop_assert_eq!(cost, full_table(&p));
    }

    #[test]
    fn reconstructed_order_is_optimal(p in proptest::collection::vec(1u64..100, 2..16)) {
        let chain = MatrixChainProblem::from_dimensions(&p).chain;
        let order = optimal_order(&chain).unwrap();
        prop_assert_eq!(order.cost(&chain), Some(min_multiplication_cost(&chain)));
        prop_assert_eq!(order.leaves(), (0..chain.len()).collect::<Vec<_>>());
    }
}
