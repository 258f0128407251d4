/**
 * File: /src/heuristics/trivial.rs
 * Created Date: Tuesday, October 13th 2026
 * Author: Zihan
 * -----
 * Last Modified: Tuesday, 13th October 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-13		Zihan	Equal-row grouping partition
 */

use ndarray::ArrayView1;

use crate::error::InvalidPartitionError;
use crate::matrix::BinaryMatrix;
use crate::partition::Partition;
use crate::rectangle::Rectangle;

/// Group identical nonzero rows; each group is one rectangle spanning the
/// group's 1-columns. Zero rows produce nothing.
pub fn trivial_row_partition(matrix: &BinaryMatrix) -> Vec<Rectangle> {
    let mut representatives: Vec<ArrayView1<u8>> = Vec::new();
    let mut rectangles: Vec<Rectangle> = Vec::new();

    for i in 0..matrix.nrows() {
        let row = matrix.row(i);
        if row.iter().all(|&v| v == 0) {
            continue;
        }
        match representatives.iter().position(|rep| *rep == row) {
            Some(k) => rectangles[k].rows.push(i),
            None => {
                let cols = row
                    .iter()
                    .enumerate()
                    .filter(|&(_, &v)| v == 1)
                    .map(|(j, _)| j)
                    .collect();
                rectangles.push(Rectangle::new(vec![i], cols));
                representatives.push(row);
            }
        }
    }

    rectangles
}

/// Best of the row grouping and the column grouping (rows win ties)
pub fn trivial_partition(matrix: &BinaryMatrix) -> Result<Partition, InvalidPartitionError> {
    let by_row = Partition::new(trivial_row_partition(matrix));
    let by_col = Partition::new(trivial_row_partition(&matrix.transpose())).transpose();

    let best = if by_row.len() > by_col.len() {
        by_col
    } else {
        by_row
    };
    crate::partition::check_partition(matrix, &best)?;
    Ok(best)
}
