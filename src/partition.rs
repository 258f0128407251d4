//! # Rectangle Partitions
//!
//! A partition is valid when every cell is covered by exactly as many
//! rectangles as its matrix entry (0 or 1). `check_partition` is the single
//! gate every produced partition goes through before reaching a caller.

/**
 * File: /src/partition.rs
 * Created Date: Monday, October 12th 2026
 * Author: Zihan
 * -----
 * Last Modified: Friday, 16th October 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-12		Zihan	Partition type, reconstruction check and visualization
 */

use std::fmt;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::error::{Axis, InvalidPartitionError};
use crate::matrix::BinaryMatrix;
use crate::rectangle::{Rectangle, RectangleView};

/// Ordered list of rectangles; serializes as a JSON list of `{rows, cols}`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Partition {
    rectangles: Vec<Rectangle>,
}

impl Partition {
    pub fn new(rectangles: Vec<Rectangle>) -> Self {
        Self { rectangles }
    }

    /// Build a partition and run it through `check_partition`
    pub fn validated(
        matrix: &BinaryMatrix,
        rectangles: Vec<Rectangle>,
    ) -> Result<Self, InvalidPartitionError> {
        let partition = Self::new(rectangles);
        check_partition(matrix, &partition)?;
        Ok(partition)
    }

    pub fn len(&self) -> usize {
        self.rectangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rectangles.is_empty()
    }

    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rectangle> {
        self.rectangles.iter()
    }

    pub fn into_rectangles(self) -> Vec<Rectangle> {
        self.rectangles
    }

    /// Same partition without rectangles that have no rows or no columns
    pub fn without_empty(self) -> Partition {
        Partition::new(
            self.into_rectangles()
                .into_iter()
                .filter(|r| !r.is_empty())
                .collect(),
        )
    }

    /// Partition of the transposed matrix
    pub fn transpose(&self) -> Partition {
        Partition {
            rectangles: self.rectangles.iter().map(Rectangle::transpose).collect(),
        }
    }

    /// Per-cell coverage counts; indices outside the matrix are ignored
    pub fn coverage(&self, shape: (usize, usize)) -> Array2<usize> {
        let mut counts = Array2::<usize>::zeros(shape);
        for rect in &self.rectangles {
            for (r, c) in rect.cells() {
                if let Some(count) = counts.get_mut((r, c)) {
                    *count += 1;
                }
            }
        }
        counts
    }

    /// Pair the partition with its matrix for printing
    pub fn display<'a>(&'a self, matrix: &'a BinaryMatrix) -> PartitionDisplay<'a> {
        PartitionDisplay {
            matrix,
            partition: self,
        }
    }
}

impl<'a> IntoIterator for &'a Partition {
    type Item = &'a Rectangle;
    type IntoIter = std::slice::Iter<'a, Rectangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.rectangles.iter()
    }
}

/// Recount the coverage of every cell and fail on the first mismatch.
///
/// Index bounds are checked first, then cells in row-major order.
///
/// # Examples
/// ```
/// use binary_rank::matrix::BinaryMatrix;
/// use binary_rank::partition::{check_partition, Partition};
/// use binary_rank::rectangle::Rectangle;
///
/// let m = BinaryMatrix::validate(&[vec![1, 0], vec![0, 1]]).unwrap();
/// let p = Partition::new(vec![
///     Rectangle::new(vec![0], vec![0]),
///     Rectangle::new(vec![1], vec![1]),
/// ]);
/// assert!(check_partition(&m, &p).is_ok());
/// ```
pub fn check_partition(
    matrix: &BinaryMatrix,
    partition: &Partition,
) -> Result<(), InvalidPartitionError> {
    let (m, n) = matrix.dimensions();
    for (k, rect) in partition.iter().enumerate() {
        if let Some(&index) = rect.rows.iter().find(|&&r| r >= m) {
            return Err(InvalidPartitionError::OutOfBounds {
                rectangle: k,
                axis: Axis::Row,
                index,
                bound: m,
            });
        }
        if let Some(&index) = rect.cols.iter().find(|&&c| c >= n) {
            return Err(InvalidPartitionError::OutOfBounds {
                rectangle: k,
                axis: Axis::Col,
                index,
                bound: n,
            });
        }
    }

    let counts = partition.coverage((m, n));
    for ((i, j), &actual) in counts.indexed_iter() {
        let expected = matrix[(i, j)];
        if actual != expected as usize {
            return Err(InvalidPartitionError::Mismatch {
                cell: (i, j),
                expected,
                actual,
            });
        }
    }
    Ok(())
}

/// Matrix followed by each rectangle as a mask, then the total
pub struct PartitionDisplay<'a> {
    matrix: &'a BinaryMatrix,
    partition: &'a Partition,
}

impl<'a> fmt::Display for PartitionDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-------------------original matrix-------------------")?;
        write!(f, "{}", self.matrix)?;
        for (i, rect) in self.partition.iter().enumerate() {
            writeln!(f, "-------------------rectangle {}-------------------", i)?;
            match RectangleView::new(self.matrix, rect) {
                Some(view) => write!(f, "{}", view)?,
                None => writeln!(f, "(out of bounds) {:?}", rect)?,
            }
        }
        writeln!(
            f,
            "-------------------{} rectangles in total",
            self.partition.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> BinaryMatrix {
        BinaryMatrix::validate(&[vec![1, 0], vec![0, 1]]).unwrap()
    }

    #[test]
    fn test_valid_partition() {
        let p = Partition::new(vec![
            Rectangle::new(vec![0], vec![0]),
            Rectangle::new(vec![1], vec![1]),
        ]);
        assert!(check_partition(&identity(), &p).is_ok());
        // checking twice gives the same answer
        assert!(check_partition(&identity(), &p).is_ok());
    }

    #[test]
    fn test_rectangle_covering_zero() {
        let p = Partition::new(vec![Rectangle::new(vec![0, 1], vec![0, 1])]);
        assert_eq!(
            check_partition(&identity(), &p),
            Err(InvalidPartitionError::Mismatch {
                cell: (0, 1),
                expected: 0,
                actual: 1
            })
        );
    }

    #[test]
    fn test_missing_cell() {
        let p = Partition::new(vec![Rectangle::new(vec![0], vec![0])]);
        assert_eq!(
            check_partition(&identity(), &p),
            Err(InvalidPartitionError::Mismatch {
                cell: (1, 1),
                expected: 1,
                actual: 0
            })
        );
    }

    #[test]
    fn test_overlapping_rectangles() {
        let ones = BinaryMatrix::validate(&[vec![1, 1], vec![1, 1]]).unwrap();
        let p = Partition::new(vec![
            Rectangle::new(vec![0, 1], vec![0, 1]),
            Rectangle::new(vec![1], vec![1]),
        ]);
        assert_eq!(
            check_partition(&ones, &p),
            Err(InvalidPartitionError::Mismatch {
                cell: (1, 1),
                expected: 1,
                actual: 2
            })
        );
    }

    #[test]
    fn test_out_of_bounds() {
        let p = Partition::new(vec![
            Rectangle::new(vec![0], vec![0]),
            Rectangle::new(vec![1], vec![2]),
        ]);
        assert_eq!(
            check_partition(&identity(), &p),
            Err(InvalidPartitionError::OutOfBounds {
                rectangle: 1,
                axis: Axis::Col,
                index: 2,
                bound: 2
            })
        );
    }

    #[test]
    fn test_empty_partition_of_zero_matrix() {
        let zeros = BinaryMatrix::validate(&[vec![0, 0], vec![0, 0]]).unwrap();
        assert!(check_partition(&zeros, &Partition::default()).is_ok());
        assert!(check_partition(&identity(), &Partition::default()).is_err());
    }

    #[test]
    fn test_without_empty_keeps_coverage() {
        let m = identity();
        let padded = Partition::new(vec![
            Rectangle::new(vec![0], vec![0]),
            Rectangle::new(vec![], vec![]),
            Rectangle::new(vec![1], vec![1]),
            Rectangle::new(vec![0, 1], vec![]),
        ]);
        assert!(check_partition(&m, &padded).is_ok());
        let trimmed = padded.without_empty();
        assert_eq!(trimmed.len(), 2);
        assert!(check_partition(&m, &trimmed).is_ok());
    }

    #[test]
    fn test_transpose_partition() {
        let m = BinaryMatrix::validate(&[vec![1, 1, 0], vec![0, 0, 1]]).unwrap();
        let p = Partition::validated(
            &m,
            vec![
                Rectangle::new(vec![0], vec![0, 1]),
                Rectangle::new(vec![1], vec![2]),
            ],
        )
        .unwrap();
        assert!(check_partition(&m.transpose(), &p.transpose()).is_ok());
    }

    #[test]
    fn test_serde_round_trip_shape() {
        let p = Partition::new(vec![Rectangle::new(vec![0], vec![1, 2])]);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"[{"rows":[0],"cols":[1,2]}]"#);
    }

    #[test]
    fn test_display_counts_rectangles() {
        let p = Partition::new(vec![
            Rectangle::new(vec![0], vec![0]),
            Rectangle::new(vec![1], vec![1]),
        ]);
        let m = identity();
        let text = format!("{}", p.display(&m));
        assert!(text.contains("rectangle 1"));
        assert!(text.ends_with("2 rectangles in total\n"));
    }
}
