use chain_dp::{
    problems::matrix_chain::{
        min_multiplication_cost, optimal_order, try_min_multiplication_cost, MatrixChainProblem,
        MatrixDescriptor,
    },
    ChainError, IntervalEngine,
};

fn clrs() -> MatrixChainProblem {
    MatrixChainProblem::from_dimensions(&[30, 35, 15, 5, 10, 20, 25])
}

#[test]
fn matrix_chain_clrs_integration() {
    let engine = IntervalEngine::new(clrs());
    let (cost, splits) = engine.run();
    assert_eq!(cost, 15125);
    // Splits list every internal node of the optimal tree; top split is after A3.
    assert_eq!(splits.len(), 5);
    assert_eq!((splits[0].i, splits[0].j, splits[0].k), (0, 5, 2));
}

#[test]
fn reference_properties() {
    let d = MatrixDescriptor::new;
    assert_eq!(min_multiplication_cost(&[]), 0);
    assert_eq!(min_multiplication_cost(&[d(1, 1)]), 0);
    assert_eq!(min_multiplication_cost(&[d(2, 3), d(3, 2)]), 12);
    assert_eq!(min_multiplication_cost(&clrs().chain), 15125);
}

#[test]
fn known_chains() {
    // (dimensions, expected minimum)
    let cases: &[(&[u64], u128)] = &[
        (&[1, 2, 3, 4], 18),
        (&[40, 20, 30, 10, 30], 26000),
        (&[1, 2, 3, 4, 3, 5, 7, 6, 10], 182),
        (&[4, 10, 3, 12, 20, 7], 1344),
        (&[10, 20], 0),
    ];
    for &(dims, expected) in cases {
        let chain = MatrixChainProblem::from_dimensions(dims).chain;
        assert_eq!(min_multiplication_cost(&chain), expected, "dims={dims:?}");
        let reversed: Vec<u64> = dims.iter().rev().copied().collect();
        let chain = MatrixChainProblem::from_dimensions(&reversed).chain;
        assert_eq!(min_multiplication_cost(&chain), expected, "reversed dims={dims:?}");
    }
}

#[test]
fn order_cost_matches_minimum() {
    let chain = MatrixChainProblem::from_dimensions(&[4, 10, 3, 12, 20, 7]).chain;
    let order = optimal_order(&chain).expect("non-empty chain");
    assert_eq!(order.cost(&chain), Some(1344));
    assert_eq!(order.leaves().len(), chain.len());
}

#[test]
fn validated_entry_point_rejects_mismatch() {
    let d = MatrixDescriptor::new;
    let err = try_min_multiplication_cost(&[d(2, 3), d(4, 5)]).unwrap_err();
    match err {
        ChainError::InvalidChain(inner) => {
            assert_eq!(inner.index, 0);
            assert_eq!(inner.cols, 3);
            assert_eq!(inner.next_rows, 4);
        }
    }
}
