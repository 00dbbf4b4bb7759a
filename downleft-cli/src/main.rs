//! downleft - count monotone down-and-left lattice paths through a grid

mod cli;
mod error;
mod maps;
mod output;

use std::time::Instant;

use clap::Parser;
use downleft::{Grid, solve_linear, solve_with_queue, solve_with_queue_and_threads};

use cli::{Args, Strategy};
use error::CliError;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    match args.strategy {
        Strategy::Linear => {
            run_one(&args, "linear", solve_linear)?;
        }
        Strategy::Queue => {
            run_one(&args, "queue", solve_with_queue)?;
        }
        Strategy::Threaded => {
            run_one(&args, "threaded", |grid| {
                solve_with_queue_and_threads(grid, args.workers)
            })?;
        }
        Strategy::All => {
            let linear = run_one(&args, "linear", solve_linear)?;
            let queue = run_one(&args, "queue", solve_with_queue)?;
            let threaded = run_one(&args, "threaded", |grid| {
                solve_with_queue_and_threads(grid, args.workers)
            })?;
            if queue != linear || threaded != linear {
                return Err(CliError::StrategyMismatch {
                    linear,
                    queue,
                    threaded,
                });
            }
            println!("all strategies agree: {linear} paths");
        }
    }
    Ok(())
}

/// Builds a fresh grid, times one strategy on it, and reports the outcome.
fn run_one(args: &Args, label: &str, solve: impl Fn(&Grid) -> i64) -> Result<i64, CliError> {
    let grid = maps::build(args)?;
    let started = Instant::now();
    let count = solve(&grid);
    let elapsed = started.elapsed();

    if args.print_map {
        print!("{}", output::render(&grid));
    }
    output::report(label, count, elapsed);
    Ok(count)
}
