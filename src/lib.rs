/// Handles argument parsing and command dispatch.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Constants shared across modules.
pub mod constants;

/// Template parsing and rendering functionality.
pub mod renderer;

/// Built-in and user supplied templates.
pub mod template;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Puzzle input download.
pub mod fetch;

/// Scaffolding of puzzle days.
pub mod generator;

/// Support library linked by generated solution programs.
pub mod runtime;

pub use generator::{Generator, GeneratorBuilder};
