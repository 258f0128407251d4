//! # SMT-backed Solvers
//!
//! Both exact procedures are built on z3:
//! - `exact`: drives the number of rectangle ids down from a heuristic
//!   partition until z3 reports UNSAT or the algebraic rank is reached
//! - `fooling_set`: decides whether a fooling set of a given size exists,
//!   an independent lower-bound certificate
//!
//! `session::SolverSession` keeps one z3 solver alive across rounds so later
//! checks reuse everything z3 has learned.

/**
 * File: /src/smt/mod.rs
 * Created Date: Wednesday, October 14th 2026
 * Author: Zihan
 * -----
 * Last Modified: Friday, 16th October 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-14		Zihan	Created SMT module
 */

pub mod exact;
pub mod fooling_set;
pub mod session;

pub use exact::{exact_partition, ExactResult};
pub use fooling_set::{find_fooling_set, fooling_set_exists, largest_fooling_set, FoolingSet};
pub use session::{SatOutcome, SolverSession};
