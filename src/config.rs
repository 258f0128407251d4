/**
 * File: /src/config.rs
 * Created Date: Friday, January 26th 2024
 * Author: Zihan
 * -----
 * Last Modified: Friday, 16th October 2026 2:40:12 pm
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-13		Zihan	Heuristic / exact solver configs and CLI arguments
 */
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

/// Configuration for the randomized row packing heuristic
#[derive(Debug, Clone)]
pub struct HeuristicConfig {
    /// Number of independent random restarts (at least 1)
    pub trials: usize,
    /// Trial `t` draws its permutations from `StdRng::seed_from_u64(seed + t)`
    pub seed: u64,
    /// Run trials on the rayon pool
    pub parallel: bool,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            trials: 100,
            seed: 0,
            parallel: true,
        }
    }
}

impl HeuristicConfig {
    pub fn with_trials(trials: usize) -> Self {
        Self {
            trials,
            ..Default::default()
        }
    }
}

/// Configuration for the exact solver
#[derive(Debug, Clone)]
pub struct ExactConfig {
    /// Row packing trials used when no seed partition is given
    pub seed_trials: usize,
    /// RNG seed for that row packing run
    pub seed: u64,
    /// Wall-clock budget over all rounds
    pub timeout: Option<Duration>,
    /// Maximum number of solver checks
    pub max_rounds: Option<usize>,
}

impl Default for ExactConfig {
    fn default() -> Self {
        Self {
            seed_trials: 10,
            seed: 0,
            timeout: None,
            max_rounds: None,
        }
    }
}

/// Minimum rectangle partitions of binary matrices
#[derive(Debug, Parser)]
#[command(name = "binary_rank", version, about)]
pub struct Cli {
    /// Log file written next to stdout
    #[arg(long, default_value = "binary_rank.log")]
    pub log_file: PathBuf,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute partition statistics for every matrix in a benchmark file
    Evaluate(EvaluateArgs),
    /// Write a benchmark file of generated matrices
    Generate {
        #[command(subcommand)]
        family: GenerateFamily,
    },
}

#[derive(Debug, Clone, Args)]
pub struct EvaluateArgs {
    /// JSON file containing a list of matrices
    pub file: PathBuf,
    /// Number of row packing trials
    #[arg(long, default_value_t = 100)]
    pub trials: usize,
    /// Suffix appended to the output file names
    #[arg(long, default_value = "100")]
    pub suffix: String,
    /// Run the exact solver seeded by the heuristic
    #[arg(long)]
    pub smt: bool,
    /// Also write the best partition of every matrix
    #[arg(long)]
    pub partition: bool,
    /// Wall-clock budget per matrix for the exact solver
    #[arg(long)]
    pub timeout_secs: Option<u64>,
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

impl EvaluateArgs {
    pub fn heuristic_config(&self, trials: usize) -> HeuristicConfig {
        HeuristicConfig {
            trials,
            seed: self.seed,
            parallel: true,
        }
    }

    pub fn exact_config(&self) -> ExactConfig {
        ExactConfig {
            seed: self.seed,
            timeout: self.timeout_secs.map(Duration::from_secs),
            ..Default::default()
        }
    }

    /// `<stem>_stats_<suffix>` next to the input file
    pub fn stats_path(&self) -> PathBuf {
        self.sibling(format!("{}_stats_{}", self.stem(), self.suffix))
    }

    /// `<stem>_partition_<suffix>.json` next to the input file
    pub fn partition_path(&self) -> PathBuf {
        self.sibling(format!("{}_partition_{}.json", self.stem(), self.suffix))
    }

    fn stem(&self) -> String {
        self.file
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.split('.').next())
            .unwrap_or("benchmark")
            .to_string()
    }

    fn sibling(&self, name: String) -> PathBuf {
        match self.file.parent() {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum GenerateFamily {
    /// Uniform matrices with an exact number of ones per density
    Random {
        rows: usize,
        cols: usize,
        /// Comma separated densities, e.g. 0.1,0.5,0.9
        #[arg(long, value_delimiter = ',', default_value = "0.1,0.2,0.3,0.4,0.5,0.6,0.7,0.8,0.9")]
        densities: Vec<f64>,
        #[arg(long, default_value_t = 10)]
        per_density: usize,
        #[arg(short, long)]
        output: PathBuf,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Matrices built from R planted rectangles
    Optimality {
        rows: usize,
        cols: usize,
        /// Comma separated planted ranks
        #[arg(long, value_delimiter = ',')]
        ranks: Vec<usize>,
        #[arg(long, default_value_t = 10)]
        per_rank: usize,
        #[arg(short, long)]
        output: PathBuf,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Matrices whose leading row pairs open a gap between real and Boolean rank
    Gap {
        rows: usize,
        cols: usize,
        pairs: usize,
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(short, long)]
        output: PathBuf,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs() {
        let heuristic = HeuristicConfig::default();
        assert_eq!(heuristic.trials, 100);
        assert!(heuristic.parallel);

        let exact = ExactConfig::default();
        assert_eq!(exact.seed_trials, 10);
        assert!(exact.timeout.is_none());
        assert!(exact.max_rounds.is_none());
    }

    // binary_rank evaluate data/benchmark_random_10x10.json --trials 20 --smt --suffix smt
    #[test]
    fn test_parse_evaluate() {
        let cli = Cli::parse_from([
            "binary_rank",
            "evaluate",
            "data/benchmark_random_10x10.json",
            "--trials",
            "20",
            "--smt",
            "--suffix",
            "smt",
            "--timeout-secs",
            "30",
        ]);
        match cli.command {
            Command::Evaluate(args) => {
                assert_eq!(args.trials, 20);
                assert!(args.smt);
                assert!(!args.partition);
                assert_eq!(
                    args.stats_path(),
                    PathBuf::from("data/benchmark_random_10x10_stats_smt")
                );
                assert_eq!(
                    args.partition_path(),
                    PathBuf::from("data/benchmark_random_10x10_partition_smt.json")
                );
                assert_eq!(args.exact_config().timeout, Some(Duration::from_secs(30)));
                assert_eq!(args.heuristic_config(1).trials, 1);
            }
            other => panic!("Expected evaluate command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_generate_random() {
        let cli = Cli::parse_from([
            "binary_rank",
            "generate",
            "random",
            "10",
            "20",
            "--densities",
            "0.1,0.5",
            "-o",
            "out.json",
        ]);
        match cli.command {
            Command::Generate {
                family:
                    GenerateFamily::Random {
                        rows,
                        cols,
                        densities,
                        per_density,
                        ..
                    },
            } => {
                assert_eq!((rows, cols), (10, 20));
                assert_eq!(densities, vec![0.1, 0.5]);
                assert_eq!(per_density, 10);
            }
            other => panic!("Expected generate random, got {:?}", other),
        }
    }
}
