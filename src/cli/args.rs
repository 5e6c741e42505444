use crate::constants::{env, verbosity};
use crate::runtime::{current_day, current_year};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

/// A CLI to make life a little easier when solving Advent of Code puzzles.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate files for the specified day.
    #[command(alias = "g")]
    Gen(GenArgs),
    /// Run one day's solutions.
    #[command(alias = "r")]
    Run(RunArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct GenArgs {
    /// Day to generate (defaults to today).
    #[arg(short, long, default_value_t = current_day())]
    pub day: u32,

    /// Year to generate (defaults to the current year).
    #[arg(short, long, default_value_t = current_year())]
    pub year: i32,

    /// Force generation; may overwrite existing files.
    #[arg(short, long)]
    pub force: bool,

    /// Path to your Advent of Code solutions directory.
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,

    /// Package name used in generated code (read from Cargo.toml when omitted).
    #[arg(long = "module-name")]
    pub module_name: Option<String>,

    /// Custom template for part files.
    #[arg(long = "part-template", env = env::PART_TEMPLATE)]
    pub part_template: Option<PathBuf>,

    /// Custom template for the main file.
    #[arg(long = "main-template", env = env::MAIN_TEMPLATE)]
    pub main_template: Option<PathBuf>,

    /// Advent of Code session string, used for downloading input files.
    #[arg(long, env = env::SESSION, hide_env_values = true)]
    pub session: Option<String>,

    /// Base URL of the input service.
    #[arg(long = "base-url", env = env::BASE_URL, hide = true)]
    pub base_url: Option<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct RunArgs {
    /// Day to run (defaults to today).
    #[arg(short, long, default_value_t = current_day())]
    pub day: u32,

    /// Year to run (defaults to the current year).
    #[arg(short, long, default_value_t = current_year())]
    pub year: i32,

    /// Use sample input.
    #[arg(short, long)]
    pub sample: bool,

    /// Path to your Advent of Code solutions directory.
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,
}

/// Parse command line arguments, exiting with usage on error.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_gen_with_flags() {
        let cli = Cli::parse_from([
            "aoc",
            "gen",
            "--day",
            "3",
            "--year",
            "2023",
            "--force",
            "--path",
            "solutions",
            "--module-name",
            "mine",
            "--part-template",
            "part.j2",
            "--session",
            "abc",
            "-vv",
        ]);
        assert_eq!(cli.verbose, 2);
        let Commands::Gen(args) = cli.command else { panic!("expected gen") };
        assert_eq!(args.day, 3);
        assert_eq!(args.year, 2023);
        assert!(args.force);
        assert_eq!(args.path, PathBuf::from("solutions"));
        assert_eq!(args.module_name.as_deref(), Some("mine"));
        assert_eq!(args.part_template, Some(PathBuf::from("part.j2")));
        assert_eq!(args.session.as_deref(), Some("abc"));
    }

    #[test]
    fn parses_run_alias_with_defaults() {
        let cli = Cli::parse_from(["aoc", "r", "-d", "9", "-s"]);
        let Commands::Run(args) = cli.command else { panic!("expected run") };
        assert_eq!(args.day, 9);
        assert!(args.sample);
        assert_eq!(args.path, PathBuf::from("."));
        assert_eq!(args.year, current_year());
    }
}
