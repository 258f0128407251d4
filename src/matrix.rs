/*
 * File: /matrix.rs
 * Created Date: Thursday November 23rd 2023
 * Author: Zihan
 * -----
 * Last Modified: Friday, 16th October 2026 10:21:07 am
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-12		Zihan	Binary matrix with validation and real rank oracle
 */

use std::fmt;
use std::ops::Index;

use nalgebra as na;
use ndarray::{Array2, ArrayView1};
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::ValidationError;

/// An immutable M×N 0/1 matrix, M ≥ 1 and N ≥ 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BinaryMatrix {
    data: Array2<u8>,
    rows: usize,
    cols: usize,
}

impl BinaryMatrix {
    /// Validate a row-major grid.
    ///
    /// # Examples
    /// ```
    /// use binary_rank::matrix::BinaryMatrix;
    /// let m = BinaryMatrix::validate(&[vec![1, 0], vec![0, 1]]).unwrap();
    /// assert_eq!(m.dimensions(), (2, 2));
    /// assert!(BinaryMatrix::validate(&[vec![1, 2]]).is_err());
    /// ```
    pub fn validate(grid: &[Vec<i64>]) -> Result<Self, ValidationError> {
        let n = match grid.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(ValidationError::NullInput),
        };
        let m = grid.len();

        let mut flat = Vec::with_capacity(m * n);
        for (i, row) in grid.iter().enumerate() {
            if row.len() != n {
                return Err(ValidationError::RaggedRows {
                    row: i,
                    expected: n,
                    found: row.len(),
                });
            }
            for (j, &value) in row.iter().enumerate() {
                match value {
                    0 | 1 => flat.push(value as u8),
                    _ => {
                        return Err(ValidationError::NonBinaryEntry {
                            row: i,
                            col: j,
                            value: value.to_string(),
                        })
                    }
                }
            }
        }

        Self::from_flat(m, n, flat)
    }

    /// Validate a matrix read from JSON. Numbers equal to exactly 0 or 1 are
    /// accepted whether written as integers or floats.
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let rows = match value {
            Value::Array(rows) if !rows.is_empty() => rows,
            _ => return Err(ValidationError::NullInput),
        };
        let n = match &rows[0] {
            Value::Array(first) if !first.is_empty() => first.len(),
            _ => return Err(ValidationError::NullInput),
        };

        let mut flat = Vec::with_capacity(rows.len() * n);
        for (i, row) in rows.iter().enumerate() {
            let row = match row {
                Value::Array(row) => row,
                Value::Null => return Err(ValidationError::NullInput),
                other => {
                    return Err(ValidationError::NonBinaryEntry {
                        row: i,
                        col: 0,
                        value: other.to_string(),
                    })
                }
            };
            if row.len() != n {
                return Err(ValidationError::RaggedRows {
                    row: i,
                    expected: n,
                    found: row.len(),
                });
            }
            for (j, entry) in row.iter().enumerate() {
                match entry.as_f64() {
                    Some(x) if x == 0.0 => flat.push(0),
                    Some(x) if x == 1.0 => flat.push(1),
                    _ => {
                        return Err(ValidationError::NonBinaryEntry {
                            row: i,
                            col: j,
                            value: entry.to_string(),
                        })
                    }
                }
            }
        }

        Self::from_flat(rows.len(), n, flat)
    }

    /// Wrap an existing array, checking shape and entries.
    pub fn from_array(data: Array2<u8>) -> Result<Self, ValidationError> {
        let (rows, cols) = data.dim();
        if rows == 0 || cols == 0 {
            return Err(ValidationError::NullInput);
        }
        if let Some(((i, j), v)) = data.indexed_iter().find(|&(_, &v)| v > 1) {
            return Err(ValidationError::NonBinaryEntry {
                row: i,
                col: j,
                value: v.to_string(),
            });
        }
        Ok(BinaryMatrix { data, rows, cols })
    }

    fn from_flat(rows: usize, cols: usize, flat: Vec<u8>) -> Result<Self, ValidationError> {
        let data =
            Array2::from_shape_vec((rows, cols), flat).map_err(|_| ValidationError::NullInput)?;
        Ok(BinaryMatrix { data, rows, cols })
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.data.get((row, col)).copied()
    }

    pub fn is_one(&self, row: usize, col: usize) -> bool {
        self.data[(row, col)] == 1
    }

    pub fn row(&self, i: usize) -> ArrayView1<'_, u8> {
        self.data.row(i)
    }

    pub fn view(&self) -> &Array2<u8> {
        &self.data
    }

    /// A new matrix with rows and columns swapped
    pub fn transpose(&self) -> BinaryMatrix {
        BinaryMatrix {
            data: self.data.t().to_owned(),
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Coordinates of all 1-entries in row-major order
    pub fn ones(&self) -> Vec<(usize, usize)> {
        self.data
            .indexed_iter()
            .filter(|&(_, &v)| v == 1)
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn count_ones(&self) -> usize {
        self.data.iter().filter(|&&v| v == 1).count()
    }

    pub fn density(&self) -> f64 {
        self.count_ones() as f64 / (self.rows * self.cols) as f64
    }

    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.data.outer_iter().map(|row| row.to_vec()).collect()
    }

    /// Rank over the reals.
    ///
    /// Only ever used as a lower bound on the partition number: any partition
    /// into k rectangles writes the matrix as a sum of k rank-1 terms.
    pub fn algebraic_rank(&self) -> usize {
        let na_matrix: na::DMatrix<f64> =
            na::DMatrix::from_fn(self.rows, self.cols, |i, j| self.data[(i, j)] as f64);
        let singular_values = na_matrix.svd(false, false).singular_values;
        let sigma_max = singular_values.iter().cloned().fold(0.0_f64, f64::max);
        let tol = sigma_max * self.rows.max(self.cols) as f64 * f64::EPSILON;
        singular_values.iter().filter(|&&s| s > tol).count()
    }
}

impl Index<(usize, usize)> for BinaryMatrix {
    type Output = u8;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.data[index]
    }
}

impl Serialize for BinaryMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.data.outer_iter().map(|row| row.to_vec()))
    }
}

/// # Example
/// ```log
/// [1, 0, 1]
/// [0, 1, 1]
/// ```
impl fmt::Display for BinaryMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.outer_iter() {
            let entries: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            writeln!(f, "[{}]", entries.join(", "))?;
        }
        Ok(())
    }
}
