/**
 * File: /src/rectangle.rs
 * Created Date: Monday January 22nd 2024
 * Author: Zihan
 * -----
 * Last Modified: Friday, 16th October 2026 11:02:40 am
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-12		Zihan	Combinatorial rectangle and its view over a binary matrix
**/

use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::matrix::BinaryMatrix;

/// A row-subset × column-subset claimed to be all ones in its matrix.
/// The claim is checked for whole partitions, see `partition::check_partition`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    pub rows: Vec<usize>,
    pub cols: Vec<usize>,
}

impl Rectangle {
    pub fn new(rows: Vec<usize>, cols: Vec<usize>) -> Self {
        Self { rows, cols }
    }

    pub fn size(&self) -> (usize, usize) {
        (self.rows.len(), self.cols.len())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.cols.is_empty()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.rows.contains(&row) && self.cols.contains(&col)
    }

    /// Same rectangle with row and column roles swapped
    pub fn transpose(&self) -> Rectangle {
        Rectangle {
            rows: self.cols.clone(),
            cols: self.rows.clone(),
        }
    }

    /// Sort both index lists, for comparisons that ignore order
    pub fn normalized(&self) -> Rectangle {
        let mut rows = self.rows.clone();
        let mut cols = self.cols.clone();
        rows.sort_unstable();
        cols.sort_unstable();
        Rectangle { rows, cols }
    }

    /// All cells rows × cols
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows
            .iter()
            .flat_map(move |&r| self.cols.iter().map(move |&c| (r, c)))
    }
}

///
/// # Example
/// ```
/// use binary_rank::matrix::BinaryMatrix;
/// use binary_rank::rectangle::{Rectangle, RectangleView};
/// let a = BinaryMatrix::validate(&[vec![1, 1, 0], vec![0, 1, 1], vec![1, 1, 1]]).unwrap();
/// let rect = Rectangle::new(vec![1, 2], vec![1, 2]);
/// let b = RectangleView::new(&a, &rect).unwrap();
///
/// assert_eq!(b[(0, 0)], 1);
/// assert!(b.is_all_ones());
/// ```
pub struct RectangleView<'a> {
    matrix: &'a BinaryMatrix,
    rect: &'a Rectangle,
}

impl<'a> RectangleView<'a> {
    /// `None` when the rectangle names an index outside the matrix
    pub fn new(matrix: &'a BinaryMatrix, rect: &'a Rectangle) -> Option<Self> {
        let (m, n) = matrix.dimensions();
        if rect.rows.iter().any(|&r| r >= m) || rect.cols.iter().any(|&c| c >= n) {
            None
        } else {
            Some(RectangleView { matrix, rect })
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&u8> {
        self.rect.rows.get(row).and_then(|&r| {
            self.rect
                .cols
                .get(col)
                .map(|&c| &self.matrix[(r, c)])
        })
    }

    /// Whether the rectangle really is combinatorial in its matrix
    pub fn is_all_ones(&self) -> bool {
        self.rect.cells().all(|(r, c)| self.matrix.is_one(r, c))
    }
}

impl<'a> Index<(usize, usize)> for RectangleView<'a> {
    type Output = u8;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        self.get(index.0, index.1)
            .unwrap_or_else(|| panic!("index {:?} outside rectangle", index))
    }
}

/// Full-size 0/1 mask of the rectangle over its matrix
/// # Example
/// ```log
/// [0, 0, 0]
/// [0, 1, 1]
/// [0, 1, 1]
/// ```
impl<'a> std::fmt::Display for RectangleView<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (m, n) = self.matrix.dimensions();
        let mut s = String::new();
        for i in 0..m {
            s.push('[');
            let entries: Vec<&str> = (0..n)
                .map(|j| if self.rect.contains(i, j) { "1" } else { "0" })
                .collect();
            s.push_str(&entries.join(", "));
            s.push_str("]\n");
        }

        write!(f, "{}", s)
    }
}
