//! # Fooling Sets
//!
//! A fooling set is a set of 1-cells no two of which can share a rectangle:
//! distinct rows, distinct columns, and for any two members (i, j), (ii, jj)
//! at least one of (i, jj), (ii, j) is 0. Its size is a lower bound on the
//! partition number that does not depend on the exact solver.

/**
 * File: /src/smt/fooling_set.rs
 * Created Date: Thursday, October 15th 2026
 * Author: Zihan
 * -----
 * Last Modified: Friday, 16th October 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-15		Zihan	Fooling set certifier on z3
 */

use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};
use z3::ast::{Bool, Int};
use z3::{Context, SatResult, Solver};

use crate::error::{BinaryRankError, Result};
use crate::matrix::BinaryMatrix;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FoolingSet {
    cells: Vec<(usize, usize)>,
}

impl FoolingSet {
    pub fn new(cells: Vec<(usize, usize)>) -> Self {
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// Check the fooling set properties against `matrix`
    pub fn verify(&self, matrix: &BinaryMatrix) -> bool {
        let (m, n) = matrix.dimensions();
        if self
            .cells
            .iter()
            .any(|&(i, j)| i >= m || j >= n || !matrix.is_one(i, j))
        {
            return false;
        }
        self.cells
            .iter()
            .tuple_combinations()
            .all(|(&a, &b)| !could_share_rectangle(matrix, a, b))
    }
}

/// Two 1-cells that may lie in one rectangle, or that clash on a row/column
fn could_share_rectangle(matrix: &BinaryMatrix, a: (usize, usize), b: (usize, usize)) -> bool {
    let ((i, j), (ii, jj)) = (a, b);
    if i == ii || j == jj {
        return true;
    }
    matrix.is_one(i, jj) && matrix.is_one(ii, j)
}

/// Sum of `ite(v, 1, 0)` over the given booleans
fn count<'ctx, 'a, I>(ctx: &'ctx Context, iter: I) -> Int<'ctx>
where
    'ctx: 'a,
    I: Iterator<Item = &'a Bool<'ctx>>,
{
    let (zero, one) = (Int::from_u64(ctx, 0), Int::from_u64(ctx, 1));
    let mut res = zero.clone();
    for v in iter {
        res += v.ite(&one, &zero);
    }
    res
}

/// A fooling set with at least `size` members, if one exists.
///
/// `size` larger than min(M, N) can never be met and is rejected.
pub fn find_fooling_set(matrix: &BinaryMatrix, size: usize) -> Result<Option<FoolingSet>> {
    let (m, n) = matrix.dimensions();
    if size > m.min(n) {
        return Err(BinaryRankError::InfeasibleRequest(format!(
            "fooling set of size {} in a {}x{} matrix",
            size, m, n
        )));
    }
    if size == 0 {
        return Ok(Some(FoolingSet::default()));
    }

    let z3_config = z3::Config::new();
    let ctx = Context::new(&z3_config);
    let solver = Solver::new(&ctx);

    let selected: Vec<Vec<Bool>> = (0..m)
        .map(|i| {
            (0..n)
                .map(|j| Bool::new_const(&ctx, format!("in_row{}_col{}", i, j)))
                .collect()
        })
        .collect();
    for i in 0..m {
        for j in 0..n {
            if !matrix.is_one(i, j) {
                solver.assert(&selected[i][j].not());
            }
        }
    }

    let ones = matrix.ones();
    let mut exclusions = 0usize;
    for (&a, &b) in ones.iter().tuple_combinations() {
        if could_share_rectangle(matrix, a, b) {
            let both = Bool::and(&ctx, &[&selected[a.0][a.1], &selected[b.0][b.1]]);
            solver.assert(&both.not());
            exclusions += 1;
        }
    }

    let total = count(&ctx, selected.iter().flatten());
    solver.assert(&total.ge(&Int::from_u64(&ctx, size as u64)));
    debug!(
        "fooling set of size {}: {} cells, {} exclusions",
        size,
        ones.len(),
        exclusions
    );

    match solver.check() {
        SatResult::Sat => {
            let model = solver
                .get_model()
                .ok_or_else(|| BinaryRankError::Solver("sat without a model".to_string()))?;
            let cells: Vec<(usize, usize)> = ones
                .into_iter()
                .filter(|&(i, j)| {
                    model
                        .eval(&selected[i][j], true)
                        .and_then(|v| v.as_bool())
                        .unwrap_or(false)
                })
                .collect();
            let witness = FoolingSet::new(cells);
            if witness.len() < size || !witness.verify(matrix) {
                return Err(BinaryRankError::Solver(format!(
                    "model does not decode to a fooling set of size {}",
                    size
                )));
            }
            Ok(Some(witness))
        }
        SatResult::Unsat => Ok(None),
        SatResult::Unknown => Err(BinaryRankError::Solver(
            solver
                .get_reason_unknown()
                .unwrap_or_else(|| "unknown".to_string()),
        )),
    }
}

/// Whether `matrix` has a fooling set of at least `size` members.
///
/// Members sit in distinct rows and columns, so `size > min(M, N)` is an
/// `InfeasibleRequest` error rather than `Ok(false)`. To show that k is the
/// maximum when k = min(M, N), the error itself is the answer; otherwise ask
/// for `k + 1` and expect `Ok(false)`.
pub fn fooling_set_exists(matrix: &BinaryMatrix, size: usize) -> Result<bool> {
    Ok(find_fooling_set(matrix, size)?.is_some())
}

/// A maximum fooling set, found by asking for one more member than the last
/// witness until z3 says no.
pub fn largest_fooling_set(matrix: &BinaryMatrix) -> Result<FoolingSet> {
    let (m, n) = matrix.dimensions();
    let mut best = FoolingSet::default();
    loop {
        let next = best.len() + 1;
        if next > m.min(n) {
            break;
        }
        match find_fooling_set(matrix, next)? {
            Some(witness) => best = witness,
            None => break,
        }
    }
    Ok(best)
}
