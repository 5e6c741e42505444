//! Support library for generated solution programs.
//!
//! Generated part files read their input through [`InputScanner`], and the
//! generated entry point registers every day in a [`Registry`] and hands it
//! to [`run`].

pub mod input;
pub mod registry;

pub use input::{input_path, InputScanner};
pub use registry::{Day, Part, Registry};

use chrono::Datelike;
use clap::Parser;

use crate::error::{default_error_handler, Result};

pub fn current_day() -> u32 {
    chrono::Local::now().day()
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Arguments accepted by a generated solution program.
#[derive(Parser, Debug)]
#[command(about = "Run the solutions of one puzzle day", long_about = None)]
pub struct RunnerArgs {
    /// Day to run.
    #[arg(short, long, default_value_t = current_day())]
    pub day: u32,

    /// Use the sample input instead of the puzzle input.
    #[arg(short, long)]
    pub sample: bool,
}

/// Formats the answers of one day, one line per part.
pub fn report(registry: &Registry, args: &RunnerArgs) -> Result<String> {
    let (one, two) = registry.solve(args.day, args.sample)?;
    Ok(format!(
        "solution for day {day} part one: {one}\nsolution for day {day} part two: {two}",
        day = args.day
    ))
}

/// Entry point of a generated program: parses arguments, solves, prints.
pub fn run(registry: Registry) {
    let args = RunnerArgs::parse();
    log::debug!(
        "Running {} {} day {} (sample: {}), registered: {}",
        registry.module_name(),
        registry.year(),
        args.day,
        args.sample,
        registry.names().collect::<Vec<_>>().join(", ")
    );
    match report(&registry, &args) {
        Ok(output) => println!("{output}"),
        Err(err) => default_error_handler(err),
    }
}
