//! # Row Packing
//!
//! Rows are visited in a random order while a list of basis rows is kept,
//! each basis row owning one rectangle (same index in both arenas):
//! - basis rows contained in the incoming row are subtracted from it, and the
//!   row joins their rectangles;
//! - whatever is left becomes a new basis row with a new rectangle. Existing
//!   basis rows that contain the leftover give up those columns, and their
//!   rows move into the new rectangle.
//!
//! Every trial packs the matrix by rows and by columns and keeps the smaller
//! result. Trials are independent and run on the rayon pool.

/**
 * File: /src/heuristics/row_packing.rs
 * Created Date: Tuesday, October 13th 2026
 * Author: Zihan
 * -----
 * Last Modified: Friday, 16th October 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-13		Zihan	Randomized row packing with parallel trials
 */

use log::{debug, info, warn};
use ndarray::{Array1, ArrayView1};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::config::HeuristicConfig;
use crate::error::{BinaryRankError, Result};
use crate::heuristics::trivial::trivial_partition;
use crate::matrix::BinaryMatrix;
use crate::partition::{check_partition, Partition};
use crate::rectangle::Rectangle;

/// Every 1 of `inner` is also a 1 of `outer`
fn is_contained(inner: ArrayView1<u8>, outer: ArrayView1<u8>) -> bool {
    inner.iter().zip(outer.iter()).all(|(&a, &b)| a <= b)
}

fn ones_of(row: ArrayView1<u8>) -> Vec<usize> {
    row.iter()
        .enumerate()
        .filter(|&(_, &v)| v == 1)
        .map(|(j, _)| j)
        .collect()
}

/// Pack the rows of `matrix` in the given order.
///
/// `order` must be a permutation of `0..matrix.nrows()`. The result is not
/// checked here; callers run it through `check_partition`.
pub fn row_packing(matrix: &BinaryMatrix, order: &[usize]) -> Vec<Rectangle> {
    let mut basis: Vec<Array1<u8>> = Vec::new();
    let mut rectangles: Vec<Rectangle> = Vec::new();

    for &r in order {
        let mut residue = matrix.row(r).to_owned();

        // single pass over the basis, residue shrinks as we go
        let mut joined = Vec::new();
        for (j, b) in basis.iter().enumerate() {
            if is_contained(b.view(), residue.view()) {
                residue -= b;
                joined.push(j);
            }
        }
        for j in joined {
            rectangles[j].rows.push(r);
        }

        if residue.iter().all(|&v| v == 0) {
            continue;
        }

        let mut rows = vec![r];
        for j in 0..basis.len() {
            if is_contained(residue.view(), basis[j].view()) {
                basis[j] -= &residue;
                rectangles[j].cols = ones_of(basis[j].view());
                rows.extend_from_slice(&rectangles[j].rows);
            }
        }
        rectangles.push(Rectangle::new(rows, ones_of(residue.view())));
        basis.push(residue);
    }

    rectangles
}

/// One trial: pack rows with `row_order` and columns with `col_order`,
/// keep the smaller (rows on ties)
fn pack_both_orientations(
    matrix: &BinaryMatrix,
    transposed: &BinaryMatrix,
    row_order: &[usize],
    col_order: &[usize],
) -> Partition {
    let by_row = Partition::new(row_packing(matrix, row_order));
    let by_col = Partition::new(row_packing(transposed, col_order)).transpose();
    if by_row.len() > by_col.len() {
        by_col
    } else {
        by_row
    }
}

fn run_trial(
    matrix: &BinaryMatrix,
    transposed: &BinaryMatrix,
    seed: u64,
    trial: usize,
) -> Option<(usize, Partition)> {
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(trial as u64));
    let mut row_order: Vec<usize> = (0..matrix.nrows()).collect();
    let mut col_order: Vec<usize> = (0..matrix.ncols()).collect();
    row_order.shuffle(&mut rng);
    col_order.shuffle(&mut rng);

    let candidate = pack_both_orientations(matrix, transposed, &row_order, &col_order);
    match check_partition(matrix, &candidate) {
        Ok(()) => Some((trial, candidate)),
        Err(e) => {
            warn!("row packing trial {} discarded: {}", trial, e);
            None
        }
    }
}

/// Keep the smaller partition, lower trial index on ties
fn better(
    current: Option<(usize, Partition)>,
    other: Option<(usize, Partition)>,
) -> Option<(usize, Partition)> {
    match (current, other) {
        (None, x) | (x, None) => x,
        (Some(a), Some(b)) => {
            if (b.1.len(), b.0) < (a.1.len(), a.0) {
                Some(b)
            } else {
                Some(a)
            }
        }
    }
}

/// Best row packing over `config.trials` random restarts.
///
/// Stops early once the best size reaches the algebraic rank, since nothing
/// smaller exists. The result depends only on `config.seed`, not on thread
/// scheduling.
pub fn row_packing_partition(matrix: &BinaryMatrix, config: &HeuristicConfig) -> Result<Partition> {
    if config.trials == 0 {
        return Err(BinaryRankError::InfeasibleRequest(
            "row packing needs at least one trial".to_string(),
        ));
    }

    let lower_bound = matrix.algebraic_rank();
    let transposed = matrix.transpose();
    let batch_size = if config.parallel {
        rayon::current_num_threads().max(1)
    } else {
        1
    };

    let mut best: Option<(usize, Partition)> = None;
    let mut start = 0;
    while start < config.trials {
        let end = (start + batch_size).min(config.trials);
        let batch_best = if config.parallel {
            (start..end)
                .into_par_iter()
                .filter_map(|t| run_trial(matrix, &transposed, config.seed, t))
                .min_by_key(|(t, p)| (p.len(), *t))
        } else {
            (start..end)
                .filter_map(|t| run_trial(matrix, &transposed, config.seed, t))
                .min_by_key(|(t, p)| (p.len(), *t))
        };
        best = better(best, batch_best);
        start = end;

        if let Some((trial, p)) = &best {
            if p.len() == lower_bound {
                debug!(
                    "row packing reached the rank bound {} at trial {} of {}",
                    lower_bound, trial, config.trials
                );
                break;
            }
        }
    }

    match best {
        Some((trial, partition)) => {
            info!(
                "row packing: {} rectangles (trial {}, {} trials, rank bound {})",
                partition.len(),
                trial,
                start,
                lower_bound
            );
            Ok(partition)
        }
        None => {
            warn!("every row packing trial failed the partition check, using trivial partition");
            Ok(trivial_partition(matrix)?)
        }
    }
}

/// Row packing with default settings and the given number of trials
pub fn heuristic_partition(matrix: &BinaryMatrix, trials: usize) -> Result<Partition> {
    row_packing_partition(matrix, &HeuristicConfig::with_trials(trials))
}
