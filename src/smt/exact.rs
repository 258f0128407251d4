/**
 * File: /src/smt/exact.rs
 * Created Date: Wednesday, October 14th 2026
 * Author: Zihan
 * -----
 * Last Modified: Friday, 16th October 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-14		Zihan	Exact minimum partition by iterative tightening
 */

use std::time::Instant;

use log::{debug, info, warn};
use z3::Context;

use crate::config::{ExactConfig, HeuristicConfig};
use crate::error::Result;
use crate::heuristics::row_packing_partition;
use crate::matrix::BinaryMatrix;
use crate::partition::{check_partition, Partition};
use crate::smt::session::{SatOutcome, SolverSession};

/// Outcome of `exact_partition`
#[derive(Debug, Clone)]
pub struct ExactResult {
    /// Best validated partition found
    pub partition: Partition,
    /// Proven minimal (UNSAT or rank bound reached), false after a cutoff
    pub is_optimal: bool,
    /// Algebraic rank of the matrix
    pub lower_bound: usize,
    /// Sizes accepted round by round, starting with the seed; strictly decreasing
    pub accepted_sizes: Vec<usize>,
    /// Number of solver checks performed
    pub rounds: usize,
}

impl ExactResult {
    pub fn len(&self) -> usize {
        self.partition.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partition.is_empty()
    }
}

/// Minimum rectangle partition of `matrix`.
///
/// # Algorithm
/// 1. Start from `seed` (checked first) or a row packing run
/// 2. Ask z3 for an assignment using fewer ids than the current best
/// 3. On SAT keep the decoded partition and ask for one id fewer than it uses;
///    on UNSAT the current best is minimal
/// 4. Stop without asking once the next size would be below the algebraic rank
///
/// With `config.timeout` or `config.max_rounds` set, hitting the limit returns
/// the last validated partition with `is_optimal = false`.
pub fn exact_partition(
    matrix: &BinaryMatrix,
    seed: Option<&Partition>,
    config: &ExactConfig,
) -> Result<ExactResult> {
    let start_time = Instant::now();

    let seed_partition = match seed {
        Some(partition) => {
            check_partition(matrix, partition)?;
            partition.clone()
        }
        None => row_packing_partition(
            matrix,
            &HeuristicConfig {
                trials: config.seed_trials,
                seed: config.seed,
                parallel: true,
            },
        )?,
    };

    // empty rectangles cover nothing and would only inflate the starting bound
    let seed_partition = seed_partition.without_empty();
    let lower_bound = matrix.algebraic_rank();
    let b0 = seed_partition.len();
    let mut result = ExactResult {
        partition: seed_partition,
        is_optimal: false,
        lower_bound,
        accepted_sizes: vec![b0],
        rounds: 0,
    };

    if b0 <= lower_bound {
        debug!("seed partition of size {} meets the rank bound", b0);
        result.is_optimal = true;
        return Ok(result);
    }

    let z3_config = z3::Config::new();
    let ctx = Context::new(&z3_config);
    let session = SolverSession::new(&ctx, matrix, b0 - 1);
    session.encode_partition_constraints(matrix);

    let mut bound = b0 - 1;
    session.restrict_ids_below(bound);

    loop {
        if bound < lower_bound {
            result.is_optimal = true;
            break;
        }
        if let Some(max_rounds) = config.max_rounds {
            if result.rounds >= max_rounds {
                info!("exact solver stopped after {} rounds", result.rounds);
                break;
            }
        }
        if let Some(timeout) = config.timeout {
            let elapsed = start_time.elapsed();
            if elapsed >= timeout {
                info!("exact solver out of time after {:?}", elapsed);
                break;
            }
            session.set_timeout(timeout - elapsed);
        }

        debug!("trying {} rectangles", bound);
        result.rounds += 1;
        match session.check_sat() {
            SatOutcome::Unsat => {
                debug!("{} rectangles UNSAT", bound);
                result.is_optimal = true;
                break;
            }
            SatOutcome::Sat(model) => {
                let partition = session.extract_assignment(matrix, &model)?;
                debug!("{} rectangles SAT, model uses {}", bound, partition.len());
                result.accepted_sizes.push(partition.len());
                let next = partition.len().checked_sub(1);
                result.partition = partition;
                match next {
                    Some(next) => {
                        bound = next;
                        if bound >= lower_bound {
                            session.restrict_ids_below(bound);
                        }
                    }
                    None => {
                        result.is_optimal = true;
                        break;
                    }
                }
            }
            SatOutcome::Unknown(reason) => {
                warn!("solver returned unknown ({}), keeping best so far", reason);
                break;
            }
        }
    }

    info!(
        "exact solver: {} rectangles ({}), rank bound {}, {} rounds in {:?}",
        result.partition.len(),
        if result.is_optimal { "optimal" } else { "best effort" },
        lower_bound,
        result.rounds,
        start_time.elapsed()
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BinaryRankError;
    use crate::rectangle::Rectangle;
    use std::time::Duration;

    fn singletons(matrix: &BinaryMatrix) -> Partition {
        Partition::new(
            matrix
                .ones()
                .into_iter()
                .map(|(i, j)| Rectangle::new(vec![i], vec![j]))
                .collect(),
        )
    }

    #[test]
    fn test_identity_is_two() {
        let m = BinaryMatrix::validate(&[vec![1, 0], vec![0, 1]]).unwrap();
        let result = exact_partition(&m, None, &ExactConfig::default()).unwrap();
        assert_eq!(result.len(), 2);
        assert!(result.is_optimal);
    }

    #[test]
    fn test_all_ones_from_singletons() {
        let m = BinaryMatrix::validate(&[vec![1; 3], vec![1; 3], vec![1; 3]]).unwrap();
        let seed = singletons(&m);
        let result = exact_partition(&m, Some(&seed), &ExactConfig::default()).unwrap();
        assert_eq!(result.len(), 1);
        assert!(result.is_optimal);
        assert_eq!(result.accepted_sizes.first(), Some(&9));
        assert_eq!(result.accepted_sizes.last(), Some(&1));
        assert!(result
            .accepted_sizes
            .windows(2)
            .all(|pair| pair[1] < pair[0]));
    }

    #[test]
    fn test_zero_matrix_is_empty() {
        let m = BinaryMatrix::validate(&[vec![0, 0, 0]]).unwrap();
        let result = exact_partition(&m, None, &ExactConfig::default()).unwrap();
        assert!(result.is_empty());
        assert!(result.is_optimal);
        assert_eq!(result.rounds, 0);
    }

    #[test]
    fn test_partition_number_above_rank() {
        // rows 0 + 1 == rows 2 + 3: real rank 3, but every rectangle has at
        // most two cells and there are eight ones
        let m = BinaryMatrix::validate(&[
            vec![1, 1, 0, 0],
            vec![0, 0, 1, 1],
            vec![1, 0, 1, 0],
            vec![0, 1, 0, 1],
        ])
        .unwrap();
        assert_eq!(m.algebraic_rank(), 3);
        let result = exact_partition(&m, None, &ExactConfig::default()).unwrap();
        assert_eq!(result.len(), 4);
        assert!(result.is_optimal);
        assert_eq!(result.rounds, 1);
    }

    #[test]
    fn test_rank_three_example() {
        let m = BinaryMatrix::validate(&[vec![1, 1, 0], vec![0, 1, 1], vec![1, 1, 1]]).unwrap();
        let seed = singletons(&m);
        let result = exact_partition(&m, Some(&seed), &ExactConfig::default()).unwrap();
        assert_eq!(result.len(), 3);
        assert!(result.is_optimal);
        assert!(check_partition(&m, &result.partition).is_ok());
    }

    #[test]
    fn test_round_cutoff_is_best_effort() {
        let m = BinaryMatrix::validate(&[vec![1; 4], vec![1; 4], vec![1; 4]]).unwrap();
        let seed = singletons(&m);
        let config = ExactConfig {
            max_rounds: Some(0),
            ..Default::default()
        };
        let result = exact_partition(&m, Some(&seed), &config).unwrap();
        assert!(!result.is_optimal);
        assert_eq!(result.len(), 12);
        assert_eq!(result.rounds, 0);
    }

    #[test]
    fn test_zero_timeout_is_best_effort() {
        let m = BinaryMatrix::validate(&[vec![1, 1], vec![1, 1]]).unwrap();
        let seed = singletons(&m);
        let config = ExactConfig {
            timeout: Some(Duration::ZERO),
            ..Default::default()
        };
        let result = exact_partition(&m, Some(&seed), &config).unwrap();
        assert!(!result.is_optimal);
        assert!(check_partition(&m, &result.partition).is_ok());
    }

    #[test]
    fn test_zero_matrix_with_empty_rectangle_seed() {
        let m = BinaryMatrix::validate(&[vec![0, 0], vec![0, 0]]).unwrap();
        let seed = Partition::new(vec![Rectangle::new(vec![], vec![])]);
        assert!(check_partition(&m, &seed).is_ok());
        let result = exact_partition(&m, Some(&seed), &ExactConfig::default()).unwrap();
        assert!(result.is_empty());
        assert!(result.is_optimal);
        assert_eq!(result.accepted_sizes, vec![0]);
        assert_eq!(result.rounds, 0);
    }

    #[test]
    fn test_padded_seed_is_trimmed() {
        let m = BinaryMatrix::validate(&[vec![1, 1], vec![1, 1]]).unwrap();
        let mut rectangles = singletons(&m).into_rectangles();
        rectangles.push(Rectangle::new(vec![0, 1], vec![]));
        rectangles.push(Rectangle::new(vec![], vec![1]));
        let seed = Partition::new(rectangles);
        let result = exact_partition(&m, Some(&seed), &ExactConfig::default()).unwrap();
        assert_eq!(result.accepted_sizes.first(), Some(&4));
        assert_eq!(result.len(), 1);
        assert!(result.is_optimal);
        assert!(result.partition.iter().all(|r| !r.is_empty()));
    }

    #[test]
    fn test_invalid_seed_rejected() {
        let m = BinaryMatrix::validate(&[vec![1, 0], vec![0, 1]]).unwrap();
        let seed = Partition::new(vec![Rectangle::new(vec![0, 1], vec![0, 1])]);
        assert!(matches!(
            exact_partition(&m, Some(&seed), &ExactConfig::default()),
            Err(BinaryRankError::InvalidPartition(_))
        ));
    }
}
