//! # Benchmark Matrices
//!
//! Three families of test matrices:
//! - **random**: uniform over matrices with an exact number of ones
//! - **optimality**: sum of R planted rectangles with disjoint column sets
//!   and independent row indicators, so the partition number is at most R
//! - **gap**: leading row pairs that all sum to the same row, which keeps the
//!   real rank low while the partition number stays high

/**
 * File: /src/benchmark.rs
 * Created Date: Thursday, October 15th 2026
 * Author: Zihan
 * -----
 * Last Modified: Friday, 16th October 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-15		Zihan	Benchmark generators
 */

use std::collections::HashSet;

use log::info;
use ndarray::Array2;
use rand::seq::index;
use rand::Rng;

use crate::error::{BinaryRankError, Result};
use crate::matrix::BinaryMatrix;

/// Attempts per requested matrix before a set is declared impossible
const MAX_ATTEMPTS_PER_MATRIX: usize = 1000;

fn from_grid(rows: usize, cols: usize, flat: Vec<u8>) -> Result<BinaryMatrix> {
    let data = Array2::from_shape_vec((rows, cols), flat)
        .map_err(|e| BinaryRankError::InfeasibleRequest(e.to_string()))?;
    Ok(BinaryMatrix::from_array(data)?)
}

fn check_shape(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(BinaryRankError::InfeasibleRequest(format!(
            "matrix shape {}x{}",
            rows, cols
        )));
    }
    Ok(())
}

/// Each entry is 1 with probability `p`
pub fn random_matrix<R: Rng + ?Sized>(rows: usize, cols: usize, p: f64, rng: &mut R) -> Result<BinaryMatrix> {
    check_shape(rows, cols)?;
    if !(0.0..=1.0).contains(&p) {
        return Err(BinaryRankError::InfeasibleRequest(format!(
            "probability {} outside [0, 1]",
            p
        )));
    }
    let flat = (0..rows * cols).map(|_| rng.random_bool(p) as u8).collect();
    from_grid(rows, cols, flat)
}

/// Exactly `ones` ones at uniformly chosen positions
pub fn random_matrix_with_ones<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    ones: usize,
    rng: &mut R,
) -> Result<BinaryMatrix> {
    check_shape(rows, cols)?;
    if ones > rows * cols {
        return Err(BinaryRankError::InfeasibleRequest(format!(
            "{} ones in a {}x{} matrix",
            ones, rows, cols
        )));
    }
    let mut flat = vec![0u8; rows * cols];
    for pos in index::sample(rng, rows * cols, ones).into_iter() {
        flat[pos] = 1;
    }
    from_grid(rows, cols, flat)
}

/// Collect `count` distinct matrices from `make`
fn distinct<F>(count: usize, mut make: F) -> Result<Vec<BinaryMatrix>>
where
    F: FnMut() -> Result<BinaryMatrix>,
{
    let mut seen = HashSet::new();
    let mut matrices = Vec::with_capacity(count);
    let mut attempts = 0;
    while matrices.len() < count {
        if attempts >= count * MAX_ATTEMPTS_PER_MATRIX {
            return Err(BinaryRankError::InfeasibleRequest(format!(
                "only {} distinct matrices found out of {}",
                matrices.len(),
                count
            )));
        }
        attempts += 1;
        let matrix = make()?;
        if seen.insert(matrix.clone()) {
            matrices.push(matrix);
        }
    }
    Ok(matrices)
}

/// `per_density` distinct matrices for each density, each with exactly
/// `⌊density · rows · cols⌋` ones
pub fn random_benchmark<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    densities: &[f64],
    per_density: usize,
    rng: &mut R,
) -> Result<Vec<BinaryMatrix>> {
    let mut matrices = Vec::new();
    for &density in densities {
        if !(0.0..=1.0).contains(&density) {
            return Err(BinaryRankError::InfeasibleRequest(format!(
                "density {} outside [0, 1]",
                density
            )));
        }
        let ones = (density * (rows * cols) as f64) as usize;
        matrices.extend(distinct(per_density, || {
            random_matrix_with_ones(rows, cols, ones, rng)
        })?);
    }
    info!("generated {} random {}x{} matrices", matrices.len(), rows, cols);
    Ok(matrices)
}

/// Sum of `rank` rectangles: disjoint column supports and linearly
/// independent row indicators. Partition number ≤ `rank`.
pub fn matrix_with_known_optimal<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    rank: usize,
    rng: &mut R,
) -> Result<BinaryMatrix> {
    check_shape(rows, cols)?;
    if rank > rows.min(cols) {
        return Err(BinaryRankError::InfeasibleRequest(
            "required rank is too large for matrix dimensions".to_string(),
        ));
    }

    let row_supports = disjoint_vectors(cols, rank, rng);
    let col_indicators = independent_vectors(rows, rank, rng)?;

    let mut flat = vec![0u8; rows * cols];
    for (indicator, support) in col_indicators.iter().zip(&row_supports) {
        for i in (0..rows).filter(|&i| indicator[i] == 1) {
            for j in (0..cols).filter(|&j| support[j] == 1) {
                flat[i * cols + j] = 1;
            }
        }
    }
    from_grid(rows, cols, flat)
}

/// `count` pairwise disjoint nonzero 0/1 vectors of length `len`
fn disjoint_vectors<R: Rng + ?Sized>(len: usize, count: usize, rng: &mut R) -> Vec<Vec<u8>> {
    let mut vectors = vec![vec![0u8; len]; count];
    let anchors = index::sample(rng, len, count).into_vec();
    for (vector, &anchor) in vectors.iter_mut().zip(&anchors) {
        vector[anchor] = 1;
    }
    for j in (0..len).filter(|j| !anchors.contains(j)) {
        // two extra outcomes leave some columns unused
        let k = rng.random_range(0..count + 2);
        if k < count {
            vectors[k][j] = 1;
        }
    }
    vectors
}

/// `count` linearly independent 0/1 vectors of length `len`
fn independent_vectors<R: Rng + ?Sized>(len: usize, count: usize, rng: &mut R) -> Result<Vec<Vec<u8>>> {
    let mut vectors: Vec<Vec<u8>> = Vec::with_capacity(count);
    while vectors.len() < count {
        let candidate: Vec<u8> = (0..len).map(|_| rng.random_bool(0.5) as u8).collect();
        let mut stacked: Vec<u8> = vectors.iter().flatten().copied().collect();
        stacked.extend_from_slice(&candidate);
        let rank = from_grid(vectors.len() + 1, len, stacked)?.algebraic_rank();
        if rank > vectors.len() {
            vectors.push(candidate);
        }
    }
    Ok(vectors)
}

/// `per_rank` distinct planted matrices for each rank
pub fn optimality_benchmark<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    ranks: &[usize],
    per_rank: usize,
    rng: &mut R,
) -> Result<Vec<BinaryMatrix>> {
    let mut matrices = Vec::new();
    for &rank in ranks {
        matrices.extend(distinct(per_rank, || {
            matrix_with_known_optimal(rows, cols, rank, rng)
        })?);
    }
    info!("generated {} planted {}x{} matrices", matrices.len(), rows, cols);
    Ok(matrices)
}

/// The first `2 · pairs` rows come in pairs that split one shared row into
/// two complementary halves; the remaining rows are uniform random.
pub fn matrix_with_rank_gap<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    pairs: usize,
    rng: &mut R,
) -> Result<BinaryMatrix> {
    check_shape(rows, cols)?;
    if pairs == 0 || pairs * 2 > rows {
        return Err(BinaryRankError::InfeasibleRequest(
            "not enough rows for required row pairs".to_string(),
        ));
    }
    let min_ones = ((1.0 + 4.0 * (pairs - 1) as f64).sqrt().ceil() as usize + 1).max(pairs + 1);
    if min_ones > cols {
        return Err(BinaryRankError::InfeasibleRequest(format!(
            "{} row pairs need at least {} columns",
            pairs, min_ones
        )));
    }

    let num_ones = rng.random_range(min_ones..=cols);
    let shared = index::sample(rng, cols, num_ones).into_vec();

    let mut halves: Vec<Vec<usize>> = Vec::with_capacity(pairs);
    let mut seen: HashSet<Vec<usize>> = HashSet::new();
    while halves.len() < pairs {
        let size = rng.random_range(1..=shared.len() / 2);
        let mut half: Vec<usize> = index::sample(rng, shared.len(), size)
            .into_iter()
            .map(|k| shared[k])
            .collect();
        half.sort_unstable();
        if seen.insert(half.clone()) {
            halves.push(half);
        }
    }

    let mut flat = Vec::with_capacity(rows * cols);
    for half in &halves {
        flat.extend((0..cols).map(|j| half.contains(&j) as u8));
        flat.extend((0..cols).map(|j| (shared.contains(&j) && !half.contains(&j)) as u8));
    }
    for _ in 0..(rows - 2 * pairs) * cols {
        flat.push(rng.random_bool(0.5) as u8);
    }
    from_grid(rows, cols, flat)
}

/// `count` distinct rank-gap matrices
pub fn gap_benchmark<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    pairs: usize,
    count: usize,
    rng: &mut R,
) -> Result<Vec<BinaryMatrix>> {
    let matrices = distinct(count, || matrix_with_rank_gap(rows, cols, pairs, rng))?;
    info!("generated {} rank gap {}x{} matrices", matrices.len(), rows, cols);
    Ok(matrices)
}
