/**
 * File: /src/smt/session.rs
 * Created Date: Wednesday, October 14th 2026
 * Author: Zihan
 * -----
 * Last Modified: Friday, 16th October 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-14		Zihan	Incremental z3 session for rectangle id assignment
 */

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::time::Duration;

use itertools::iproduct;
use log::debug;
use z3::ast::{Ast, Bool, BV};
use z3::{Context, Model, Params, SatResult, Solver};

use crate::error::{BinaryRankError, Result};
use crate::matrix::BinaryMatrix;
use crate::partition::Partition;
use crate::rectangle::Rectangle;

/// Result of one satisfiability check
pub enum SatOutcome<'ctx> {
    Sat(Model<'ctx>),
    Unsat,
    /// Timeout or resource limit; carries z3's reason
    Unknown(String),
}

/// One bit-vector "rectangle id" per 1-cell of a matrix, plus the z3 solver
/// holding every constraint added so far.
pub struct SolverSession<'ctx> {
    ctx: &'ctx Context,
    solver: Solver<'ctx>,
    cells: Vec<(usize, usize)>,
    ids: Vec<BV<'ctx>>,
    width: u32,
}

/// Bits needed to write `value`, at least 1
fn bit_width(value: usize) -> u32 {
    (usize::BITS - value.leading_zeros()).max(1)
}

impl<'ctx> SolverSession<'ctx> {
    /// Create id variables wide enough for ids up to `max_id`
    pub fn new(ctx: &'ctx Context, matrix: &BinaryMatrix, max_id: usize) -> Self {
        let width = bit_width(max_id);
        let cells = matrix.ones();
        let ids = cells
            .iter()
            .map(|&(i, j)| BV::new_const(ctx, format!("rect_{}_{}", i, j), width))
            .collect();
        Self {
            ctx,
            solver: Solver::new(ctx),
            cells,
            ids,
            width,
        }
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn add_constraint(&self, constraint: &Bool<'ctx>) {
        self.solver.assert(constraint);
    }

    /// Assignments of ids to 1-cells that correspond to real rectangles.
    ///
    /// For 1-cells (i, j), (ii, jj) with i != ii and j != jj:
    /// - if (i, jj) is 0 they can never share a rectangle;
    /// - otherwise sharing an id forces (i, jj) into the same rectangle.
    ///
    /// Pairs are ordered, so (ii, j) is covered by the swapped pair.
    pub fn encode_partition_constraints(&self, matrix: &BinaryMatrix) {
        let index: HashMap<(usize, usize), usize> = self
            .cells
            .iter()
            .enumerate()
            .map(|(k, &cell)| (cell, k))
            .collect();

        let mut separations = 0usize;
        let mut closures = 0usize;
        for (p, q) in iproduct!(0..self.cells.len(), 0..self.cells.len()) {
            let (i, j) = self.cells[p];
            let (ii, jj) = self.cells[q];
            if i == ii || j == jj {
                continue;
            }
            let same = self.ids[p]._eq(&self.ids[q]);
            match index.get(&(i, jj)) {
                None => {
                    self.add_constraint(&same.not());
                    separations += 1;
                }
                Some(&corner) => {
                    self.add_constraint(&same.implies(&self.ids[p]._eq(&self.ids[corner])));
                    closures += 1;
                }
            }
        }
        debug!(
            "encoded {} cells: {} separation and {} closure constraints",
            self.cells.len(),
            separations,
            closures
        );
    }

    /// Every id must be `< bound`. Constraints only accumulate, so calls with
    /// decreasing bounds tighten the session.
    pub fn restrict_ids_below(&self, bound: usize) {
        let limit = BV::from_u64(self.ctx, bound as u64, self.width);
        for id in &self.ids {
            self.add_constraint(&id.bvult(&limit));
        }
    }

    /// Per-check wall-clock limit handed to z3
    pub fn set_timeout(&self, timeout: Duration) {
        let mut params = Params::new(self.ctx);
        let millis = timeout.as_millis().clamp(1, u32::MAX as u128) as u32;
        params.set_u32("timeout", millis);
        self.solver.set_params(&params);
    }

    pub fn check_sat(&self) -> SatOutcome<'ctx> {
        match self.solver.check() {
            SatResult::Sat => match self.solver.get_model() {
                Some(model) => SatOutcome::Sat(model),
                None => SatOutcome::Unknown("sat without a model".to_string()),
            },
            SatResult::Unsat => SatOutcome::Unsat,
            SatResult::Unknown => SatOutcome::Unknown(
                self.solver
                    .get_reason_unknown()
                    .unwrap_or_else(|| "unknown".to_string()),
            ),
        }
    }

    /// Group 1-cells by their id in `model`; each non-empty group becomes one
    /// rectangle, in increasing id order. The result is checked against
    /// `matrix` before it is returned.
    pub fn extract_assignment(&self, matrix: &BinaryMatrix, model: &Model<'ctx>) -> Result<Partition> {
        let mut groups: BTreeMap<u64, (BTreeSet<usize>, BTreeSet<usize>)> = BTreeMap::new();
        for (&(i, j), id) in self.cells.iter().zip(&self.ids) {
            let value = model
                .eval(id, true)
                .and_then(|v| v.as_u64())
                .ok_or_else(|| {
                    BinaryRankError::Solver(format!("no value for cell ({}, {}) in model", i, j))
                })?;
            let group = groups.entry(value).or_default();
            group.0.insert(i);
            group.1.insert(j);
        }

        let rectangles = groups
            .into_values()
            .map(|(rows, cols)| Rectangle::new(rows.into_iter().collect(), cols.into_iter().collect()))
            .collect();
        Ok(Partition::validated(matrix, rectangles)?)
    }
}
