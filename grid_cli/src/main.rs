//! # Gridcalc CLI
//!
//! Distance and bearing between two Maidenhead grid squares.
//!
//! ```text
//! grid_cli GRID1 GRID2 [--unit km|mi|nm] [--verbose] [--json]
//! ```
//!
//! With no arguments a few example calculations are printed instead.
//! Exit status is 0 on success and 1 for bad arguments or locators.

use std::process::ExitCode;

use clap::Parser;
use grid_core::errors::GridError;
use grid_core::geodesy::compute;
use grid_core::locator::Locator;
use log::debug;
use thiserror::Error;

mod cli;
mod report;

use cli::CliArgs;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("could not encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn run(args: &CliArgs) -> Result<String, CliError> {
    let from = Locator::parse(&args.grid1)?;
    let to = Locator::parse(&args.grid2)?;
    debug!("{} ({:?}) -> {} ({:?})", from, from.precision(), to, to.precision());

    let result = compute(from.center(), to.center(), args.unit);

    if args.json {
        Ok(report::json(&from, &to, &result)?)
    } else if args.verbose {
        Ok(report::verbose(&args.grid1, &args.grid2, &result))
    } else {
        Ok(report::simple(&result))
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if std::env::args_os().len() <= 1 {
        print!("{}", report::examples());
        println!();
        println!("For command-line usage, run: grid_cli --help");
        return ExitCode::SUCCESS;
    }

    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version come through here too
            let code = if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = e.print();
            return code;
        }
    };
    debug!("{args:?}");

    match run(&args) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
