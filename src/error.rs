//! # Error Types
//!
//! Failures are either bad input (`ValidationError`), a partition that breaks
//! the reconstruction law (`InvalidPartitionError`), or a request the matrix
//! cannot satisfy. None of them are transient, so nothing here is retried.

/**
 * File: /src/error.rs
 * Created Date: Monday, October 12th 2026
 * Author: Zihan
 * -----
 * Last Modified: Friday, 16th October 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-12		Zihan	Error taxonomy for matrix validation and partition checks
 */

use std::error::Error;
use std::fmt;

/// Reasons a raw grid is rejected before any algorithm runs
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Missing matrix, no rows, or an empty first row
    NullInput,
    /// Row `row` has `found` entries while the first row has `expected`
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Entry at (`row`, `col`) is neither 0 nor 1
    NonBinaryEntry {
        row: usize,
        col: usize,
        value: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValidationError::NullInput => write!(f, "null or empty matrix"),
            ValidationError::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "ragged rows: row {} has {} entries, expected {}",
                row, found, expected
            ),
            ValidationError::NonBinaryEntry { row, col, value } => {
                write!(f, "entry ({}, {}) is not binary: {}", row, col, value)
            }
        }
    }
}

impl Error for ValidationError {}

/// Which index set of a rectangle an out-of-range index came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Col,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Col => write!(f, "col"),
        }
    }
}

/// A partition that does not reconstruct its matrix
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidPartitionError {
    /// Cell `cell` is covered `actual` times but the matrix holds `expected`
    Mismatch {
        cell: (usize, usize),
        expected: u8,
        actual: usize,
    },
    /// Rectangle `rectangle` names an index outside the matrix
    OutOfBounds {
        rectangle: usize,
        axis: Axis,
        index: usize,
        bound: usize,
    },
}

impl fmt::Display for InvalidPartitionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InvalidPartitionError::Mismatch {
                cell,
                expected,
                actual,
            } => write!(
                f,
                "rectangular partition invalid at cell ({}, {}): expected {}, covered {} times",
                cell.0, cell.1, expected, actual
            ),
            InvalidPartitionError::OutOfBounds {
                rectangle,
                axis,
                index,
                bound,
            } => write!(
                f,
                "rectangle {}: {} {} not in range 0..{}",
                rectangle, axis, index, bound
            ),
        }
    }
}

impl Error for InvalidPartitionError {}

/// Errors surfaced by the public operations of this crate
#[derive(Debug)]
pub enum BinaryRankError {
    Validation(ValidationError),
    InvalidPartition(InvalidPartitionError),
    /// Parameters incompatible with the matrix (e.g. fooling set larger than min(M, N))
    InfeasibleRequest(String),
    /// The SMT backend failed in a way that is not a timeout
    Solver(String),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for BinaryRankError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BinaryRankError::Validation(e) => write!(f, "Validation error: {}", e),
            BinaryRankError::InvalidPartition(e) => write!(f, "Invalid partition: {}", e),
            BinaryRankError::InfeasibleRequest(msg) => write!(f, "Infeasible request: {}", msg),
            BinaryRankError::Solver(msg) => write!(f, "Solver error: {}", msg),
            BinaryRankError::Io(e) => write!(f, "I/O error: {}", e),
            BinaryRankError::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl Error for BinaryRankError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BinaryRankError::Validation(e) => Some(e),
            BinaryRankError::InvalidPartition(e) => Some(e),
            BinaryRankError::Io(e) => Some(e),
            BinaryRankError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ValidationError> for BinaryRankError {
    fn from(e: ValidationError) -> Self {
        BinaryRankError::Validation(e)
    }
}

impl From<InvalidPartitionError> for BinaryRankError {
    fn from(e: InvalidPartitionError) -> Self {
        BinaryRankError::InvalidPartition(e)
    }
}

impl From<std::io::Error> for BinaryRankError {
    fn from(e: std::io::Error) -> Self {
        BinaryRankError::Io(e)
    }
}

impl From<serde_json::Error> for BinaryRankError {
    fn from(e: serde_json::Error) -> Self {
        BinaryRankError::Json(e)
    }
}

pub type Result<T> = std::result::Result<T, BinaryRankError>;
