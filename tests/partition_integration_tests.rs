//! Integration tests for the partition pipeline
//!
//! Covers the library surface end to end:
//! 1. Validation of raw grids
//! 2. Heuristic upper bounds
//! 3. Exact minimum via z3, bounded by rank and fooling sets
//! 4. Benchmark generation

use binary_rank::benchmark::{matrix_with_known_optimal, matrix_with_rank_gap, random_matrix};
use binary_rank::smt::largest_fooling_set;
use binary_rank::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn exact(matrix: &BinaryMatrix) -> ExactResult {
    exact_partition(matrix, None, &ExactConfig::default()).unwrap()
}

#[test]
fn test_identity_matrix() {
    init_logger();
    let m = BinaryMatrix::validate(&[vec![1, 0], vec![0, 1]]).unwrap();
    let result = exact(&m);
    assert_eq!(result.len(), 2);
    assert!(result.is_optimal);
    assert!(check_partition(&m, &result.partition).is_ok());
}

#[test]
fn test_all_ones_matrix() {
    init_logger();
    let m = BinaryMatrix::validate(&[vec![1; 3], vec![1; 3], vec![1; 3]]).unwrap();
    assert_eq!(heuristic_partition(&m, 10).unwrap().len(), 1);
    assert_eq!(exact(&m).len(), 1);
}

#[test]
fn test_heuristic_and_trivial_bound_the_minimum() {
    init_logger();
    let m = BinaryMatrix::validate(&[vec![1, 1, 0], vec![0, 1, 1], vec![1, 1, 1]]).unwrap();
    let result = exact(&m);
    assert!(result.is_optimal);
    assert_eq!(result.len(), 3);
    assert!(trivial_partition(&m).unwrap().len() >= result.len());
    assert!(heuristic_partition(&m, 20).unwrap().len() >= result.len());
}

#[test]
fn test_zero_matrix() {
    init_logger();
    let m = BinaryMatrix::validate(&[vec![0, 0], vec![0, 0], vec![0, 0]]).unwrap();
    let result = exact(&m);
    assert!(result.is_empty());
    assert!(check_partition(&m, &result.partition).is_ok());
    assert!(heuristic_partition(&m, 5).unwrap().is_empty());
    assert!(trivial_partition(&m).unwrap().is_empty());
}

#[test]
fn test_planted_fooling_set() {
    init_logger();
    // three disjoint blocks: the block diagonal is a maximum fooling set
    let m = BinaryMatrix::validate(&[
        vec![1, 1, 0, 0, 0],
        vec![1, 1, 0, 0, 0],
        vec![0, 0, 1, 0, 0],
        vec![0, 0, 0, 1, 1],
    ])
    .unwrap();
    assert!(fooling_set_exists(&m, 3).unwrap());
    assert!(!fooling_set_exists(&m, 4).unwrap());
    assert_eq!(exact(&m).len(), 3);
}

#[test]
fn test_validation_errors() {
    assert_eq!(
        BinaryMatrix::validate(&[]).unwrap_err(),
        ValidationError::NullInput
    );
    assert!(matches!(
        BinaryMatrix::validate(&[vec![1, 0], vec![1]]),
        Err(ValidationError::RaggedRows { row: 1, .. })
    ));
    assert!(matches!(
        BinaryMatrix::validate(&[vec![1, 0], vec![3, 1]]),
        Err(ValidationError::NonBinaryEntry { row: 1, col: 0, .. })
    ));
}

#[test]
fn test_random_matrices_bounds_chain() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(42);
    for &p in &[0.2, 0.5, 0.8] {
        for _ in 0..3 {
            let m = random_matrix(5, 5, p, &mut rng).unwrap();
            let upper = heuristic_partition(&m, 20).unwrap();
            assert!(check_partition(&m, &upper).is_ok());

            let result = exact_partition(&m, Some(&upper), &ExactConfig::default()).unwrap();
            assert!(result.is_optimal);
            assert!(check_partition(&m, &result.partition).is_ok());
            assert!(result.len() <= upper.len());
            assert!(result.len() >= m.algebraic_rank());
            assert!(result.len() >= largest_fooling_set(&m).unwrap().len());
            assert!(result
                .accepted_sizes
                .windows(2)
                .all(|pair| pair[1] < pair[0]));
        }
    }
}

#[test]
fn test_transpose_symmetry() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..3 {
        let m = random_matrix(4, 6, 0.5, &mut rng).unwrap();
        let t = m.transpose();
        assert_eq!(exact(&m).len(), exact(&t).len());

        let p = heuristic_partition(&m, 10).unwrap();
        assert!(check_partition(&t, &p.transpose()).is_ok());
    }
}

#[test]
fn test_planted_rank_is_an_upper_bound() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(3);
    for rank in 1..=4 {
        let m = matrix_with_known_optimal(6, 6, rank, &mut rng).unwrap();
        // planted rectangles are disjoint and independent, so rank pins the minimum
        assert_eq!(exact(&m).len(), rank);
    }
}

#[test]
fn test_rank_gap_matrix() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(11);
    let m = matrix_with_rank_gap(6, 6, 2, &mut rng).unwrap();
    let result = exact(&m);
    assert!(result.is_optimal);
    assert!(result.len() >= m.algebraic_rank());
    assert!(check_partition(&m, &result.partition).is_ok());
}

#[test]
fn test_partition_json_shape() {
    let m = BinaryMatrix::validate(&[vec![1, 1], vec![0, 0]]).unwrap();
    let p = trivial_partition(&m).unwrap();
    let json = serde_json::to_value(&p).unwrap();
    assert_eq!(json, serde_json::json!([{"rows": [0], "cols": [0, 1]}]));
    let back: Partition = serde_json::from_value(json).unwrap();
    assert!(check_partition(&m, &back).is_ok());
}
