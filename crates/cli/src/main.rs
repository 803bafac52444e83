//! `bairstow`: find every root of a real polynomial.
//!
//! Reads the degree and coefficients from a file (or stdin), runs the
//! Lin–Bairstow solver, and prints the polynomial followed by its roots.

mod input;
mod report;

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use bairstow_observers::LogObserver;
use bairstow_solvers::roots::lin_bairstow::{self, Config};
use clap::Parser;
use log::{Level, info};

#[derive(Parser)]
#[command(
    name = "bairstow",
    version,
    about = "Polynomial root finding with the Lin-Bairstow method"
)]
struct Cli {
    /// File holding the degree followed by the coefficients a[0] … a[n] (stdin if omitted)
    input: Option<PathBuf>,

    /// Step-size tolerance for each iterative search
    #[arg(long, default_value_t = Config::DEFAULT_EPSILON)]
    epsilon: f64,

    /// Maximum updates per extracted factor
    #[arg(long, default_value_t = Config::DEFAULT_MAX_ITERS)]
    max_iters: usize,

    /// Increase log verbosity (-v for debug, -vv for every iteration)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let text = read_input(cli.input.as_deref())?;
    let polynomial = input::parse_input(&text).context("failed to parse polynomial")?;
    let config = Config::new(cli.max_iters, cli.epsilon).context("invalid solver settings")?;

    let solution = lin_bairstow::solve(&polynomial, &config, LogObserver::new(Level::Trace))
        .with_context(|| format!("failed to find the roots of {polynomial}"))?;
    info!(
        "found {} roots in {} iterations",
        solution.root_count(),
        solution.iters
    );

    let mut stdout = io::stdout().lock();
    report::write_report(&mut stdout, &polynomial, &solution)?;
    stdout.flush()?;

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => io::read_to_string(io::stdin()).context("failed to read stdin"),
    }
}
