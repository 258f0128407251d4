/**
 * File: /src/evaluation.rs
 * Created Date: Thursday, October 15th 2026
 * Author: Zihan
 * -----
 * Last Modified: Friday, 16th October 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-15		Zihan	Batch evaluation and benchmark file generation
 */

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use serde_json::Value;

use crate::benchmark::{gap_benchmark, optimality_benchmark, random_benchmark};
use crate::config::{EvaluateArgs, GenerateFamily};
use crate::error::Result;
use crate::heuristics::{row_packing_partition, trivial_partition};
use crate::matrix::BinaryMatrix;
use crate::partition::Partition;
use crate::smt::exact_partition;

pub const STATS_HEADER: &str = "id, density, linear rank, best, packing, trivial, runtime";

/// One line of the stats file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixStats {
    pub index: usize,
    pub density: f64,
    pub linear_rank: usize,
    pub best: usize,
    pub packing: usize,
    pub trivial: usize,
    /// Seconds spent on the "best" computation only
    pub runtime_secs: f64,
}

impl MatrixStats {
    pub fn to_line(&self) -> String {
        format!(
            "{}, {}, {}, {}, {}, {}, {}",
            self.index,
            self.density,
            self.linear_rank,
            self.best,
            self.packing,
            self.trivial,
            self.runtime_secs
        )
    }
}

/// Statistics and the best partition for one matrix.
///
/// Without `smt`: packing is a single trial, best uses `trials` trials.
/// With `smt`: packing uses `trials` trials and seeds the exact solver.
pub fn evaluate_matrix(
    index: usize,
    matrix: &BinaryMatrix,
    args: &EvaluateArgs,
) -> Result<(MatrixStats, Partition)> {
    let trivial = trivial_partition(matrix)?;
    let packing_trials = if args.smt { args.trials } else { 1 };
    let packing = row_packing_partition(matrix, &args.heuristic_config(packing_trials))?;

    let start_time = Instant::now();
    let best = if args.smt {
        exact_partition(matrix, Some(&packing), &args.exact_config())?.partition
    } else {
        row_packing_partition(matrix, &args.heuristic_config(args.trials))?
    };
    let runtime_secs = start_time.elapsed().as_secs_f64();

    let stats = MatrixStats {
        index,
        density: matrix.density(),
        linear_rank: matrix.algebraic_rank(),
        best: best.len(),
        packing: packing.len(),
        trivial: trivial.len(),
        runtime_secs,
    };
    Ok((stats, best))
}

/// Read a JSON list of matrices; each element is validated on its own
pub fn load_matrices(path: &Path) -> Result<Vec<Value>> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Evaluate every matrix in `args.file`, writing the stats file (and the
/// partitions file with `--partition`). Matrices that fail validation are
/// logged and skipped; their partitions entry is `null`.
pub fn run_evaluation(args: &EvaluateArgs) -> Result<Vec<MatrixStats>> {
    let matrices = load_matrices(&args.file)?;
    info!(
        "evaluating {} matrices from {} (trials: {}, smt: {})",
        matrices.len(),
        args.file.display(),
        args.trials,
        args.smt
    );

    let stats_path = args.stats_path();
    let mut stats_file = BufWriter::new(File::create(&stats_path)?);
    writeln!(stats_file, "{}", STATS_HEADER)?;
    stats_file.flush()?;

    let mut all_stats = Vec::with_capacity(matrices.len());
    let mut partitions: Vec<Option<Partition>> = Vec::with_capacity(matrices.len());
    for (index, value) in matrices.iter().enumerate() {
        let matrix = match BinaryMatrix::from_json(value) {
            Ok(matrix) => matrix,
            Err(e) => {
                warn!("skipping matrix {}: {}", index, e);
                partitions.push(None);
                continue;
            }
        };

        let (stats, best) = evaluate_matrix(index, &matrix, args)?;
        info!(
            "matrix {}: best {}, packing {}, trivial {}, rank {} in {:.3}s",
            index, stats.best, stats.packing, stats.trivial, stats.linear_rank, stats.runtime_secs
        );
        writeln!(stats_file, "{}", stats.to_line())?;
        stats_file.flush()?;
        all_stats.push(stats);
        partitions.push(Some(best));
    }

    if args.partition {
        let partition_path = args.partition_path();
        let writer = BufWriter::new(File::create(&partition_path)?);
        serde_json::to_writer(writer, &partitions)?;
        info!("partitions written to {}", partition_path.display());
    }
    info!("stats written to {}", stats_path.display());
    Ok(all_stats)
}

/// Generate a benchmark family and write it as a JSON list of matrices.
/// Returns the number of matrices written.
pub fn run_generate(family: &GenerateFamily) -> Result<usize> {
    let (matrices, output) = match family {
        GenerateFamily::Random {
            rows,
            cols,
            densities,
            per_density,
            output,
            seed,
        } => {
            let mut rng = StdRng::seed_from_u64(*seed);
            (
                random_benchmark(*rows, *cols, densities, *per_density, &mut rng)?,
                output,
            )
        }
        GenerateFamily::Optimality {
            rows,
            cols,
            ranks,
            per_rank,
            output,
            seed,
        } => {
            let mut rng = StdRng::seed_from_u64(*seed);
            (
                optimality_benchmark(*rows, *cols, ranks, *per_rank, &mut rng)?,
                output,
            )
        }
        GenerateFamily::Gap {
            rows,
            cols,
            pairs,
            count,
            output,
            seed,
        } => {
            let mut rng = StdRng::seed_from_u64(*seed);
            (gap_benchmark(*rows, *cols, *pairs, *count, &mut rng)?, output)
        }
    };

    let writer = BufWriter::new(File::create(output)?);
    serde_json::to_writer(writer, &matrices)?;
    info!("wrote {} matrices to {}", matrices.len(), output.display());
    Ok(matrices.len())
}
