//! # binary_rank
//!
//! Minimum partitions of binary matrices into all-ones rectangles
//! (the Boolean rank under disjoint covers).
//!
//! - [`heuristic_partition`]: randomized row packing, fast upper bound
//! - [`exact_partition`]: z3-backed iterative tightening down to a proven minimum
//! - [`fooling_set_exists`]: independent lower-bound certificate
//! - [`check_partition`]: the reconstruction law every result satisfies
//!
//! ```no_run
//! use binary_rank::{exact_partition, heuristic_partition, BinaryMatrix, ExactConfig};
//!
//! let matrix = BinaryMatrix::validate(&[vec![1, 1, 0], vec![0, 1, 1], vec![1, 1, 1]])?;
//! let upper = heuristic_partition(&matrix, 100)?;
//! let exact = exact_partition(&matrix, Some(&upper), &ExactConfig::default())?;
//! assert!(exact.len() <= upper.len());
//! # Ok::<(), binary_rank::BinaryRankError>(())
//! ```

/**
 * File: /src/lib.rs
 * Created Date: Monday, January 22nd 2024
 * Author: Zihan
 * -----
 * Last Modified: Friday, 16th October 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-16		Zihan	Rectangle partition library layout
 */

pub mod benchmark;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod heuristics;
pub mod matrix;
pub mod partition;
pub mod rectangle;
pub mod smt;

pub use config::{ExactConfig, HeuristicConfig};
pub use error::{BinaryRankError, InvalidPartitionError, Result, ValidationError};
pub use heuristics::{heuristic_partition, row_packing_partition, trivial_partition};
pub use matrix::BinaryMatrix;
pub use partition::{check_partition, Partition};
pub use rectangle::Rectangle;
pub use smt::{exact_partition, fooling_set_exists, ExactResult, FoolingSet};
