use std::process::ExitStatus;
use thiserror::Error;

use crate::constants::exit_codes;

#[derive(Error, Debug)]
pub enum Error {
    /// No module name was given and none could be read from the manifest.
    #[error("No module name given and no package name found in '{manifest}'.")]
    NoModuleFound { manifest: String },

    /// Target file exists and force was not set.
    #[error("Cannot proceed: '{path}' already exists. Use --force to overwrite it.")]
    FileAlreadyExists { path: String },

    /// A template could not be read or parsed.
    #[error("No valid template '{name}': {reason}")]
    NoValidTemplate { name: String, reason: String },

    /// A template parsed but failed while rendering (e.g. undefined field).
    #[error("Failed to render template '{name}'. Original error: {source}")]
    TemplateRenderError {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("Failed to fetch puzzle input from '{url}': {reason}")]
    FetchFailed { url: String, status: Option<u16>, reason: String },

    #[error("Failed to {context}. Original error: {source}")]
    IoFailure {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unregistered day requested: {day}")]
    UnregisteredDay { day: u32 },

    #[error("Command '{command}' failed with status: {status}")]
    CommandFailed { command: String, status: ExitStatus },
}

impl Error {
    /// Wraps an IO error with a description of the operation that failed.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Error::IoFailure { context: context.into(), source }
    }
}

/// Convenience type alias for Results with the crate error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(exit_codes::FAILURE);
}
