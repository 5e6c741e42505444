//! Constants used throughout the aoc application

/// Default remote service for puzzle inputs
pub const DEFAULT_BASE_URL: &str = "https://adventofcode.com";

/// Name of the authentication cookie sent with input requests
pub const SESSION_COOKIE: &str = "session";

/// Manifest read to discover the module name
pub const MODULE_MANIFEST: &str = "Cargo.toml";

/// Directory holding puzzle inputs, relative to the base path
pub const INPUT_DIR: &str = "input";

/// Puzzle input file name
pub const INPUT_FILE: &str = "input.txt";

/// Sample input file name
pub const SAMPLE_FILE: &str = "sample.txt";

/// Name of a day's directories, e.g. `day01`.
pub fn day_dir_name(day: u32) -> String {
    format!("day{day:02}")
}

/// Regenerated entry point of a year
pub const MAIN_FILE: &str = "main.rs";

/// Extension of generated part files
pub const SOURCE_EXTENSION: &str = "rs";

/// Labels of the two puzzle parts, in generation order
pub const PARTS: [&str; 2] = ["One", "Two"];

/// Names under which templates are registered and reported
pub mod templates {
    pub const PART: &str = "part";
    pub const MAIN: &str = "main";
}

/// Environment variables read by the CLI
pub mod env {
    pub const PART_TEMPLATE: &str = "AOC_PART_TEMPLATE";
    pub const MAIN_TEMPLATE: &str = "AOC_MAIN_TEMPLATE";
    pub const SESSION: &str = "AOC_SESSION";
    pub const BASE_URL: &str = "AOC_BASE_URL";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}

/// Prefix of the binary target name of a year, e.g. `aoc2024`
pub const BIN_PREFIX: &str = "aoc";
