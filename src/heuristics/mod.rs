//! # Heuristic Partitions
//!
//! Two ways to get a valid rectangle partition quickly:
//! 1. **Trivial**: one rectangle per group of identical rows (or columns)
//! 2. **Row packing**: randomized incremental packing over many trials,
//!    keeping the smallest result
//!
//! Both results go through `check_partition` before they are returned.

/**
 * File: /src/heuristics/mod.rs
 * Created Date: Tuesday, October 13th 2026
 * Author: Zihan
 * -----
 * Last Modified: Friday, 16th October 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-13		Zihan	Created heuristics module
 */

pub mod row_packing;
pub mod trivial;

pub use row_packing::{heuristic_partition, row_packing, row_packing_partition};
pub use trivial::{trivial_partition, trivial_row_partition};
