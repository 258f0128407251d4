/*
 * File: /main.rs
 * Created Date: Tuesday November 21st 2023
 * Author: Zihan
 * -----
 * Last Modified: Friday, 16th October 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-16		Zihan	evaluate / generate subcommands
 */

use std::path::Path;
use std::process::ExitCode;

use binary_rank::config::{Cli, Command};
use binary_rank::evaluation::{run_evaluation, run_generate};
use clap::Parser;
use log::{error, info, LevelFilter};

fn setup_logger(log_file: &Path) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(LevelFilter::Info)
        .chain(std::io::stdout())
        .chain(fern::log_file(log_file)?)
        .apply()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = setup_logger(&cli.log_file) {
        eprintln!("failed to set up logger: {}", e);
        return ExitCode::FAILURE;
    }

    let outcome = match &cli.command {
        Command::Evaluate(args) => run_evaluation(args).map(|stats| {
            info!("evaluated {} matrices", stats.len());
        }),
        Command::Generate { family } => run_generate(family).map(|_| ()),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
