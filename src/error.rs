//! Error handling for sourcetpl.
//! Defines the error type and result alias used throughout the generator.

use std::io;
use thiserror::Error;

/// Errors that can occur while scaffolding a project.
///
/// Every error is terminal for the current build: nothing is retried and
/// files written before the failure stay on disk.
#[derive(Error, Debug)]
pub enum Error {
    /// The working directory could not be resolved.
    #[error("Cannot determine the working directory: {0}.")]
    WorkingDirError(#[source] io::Error),

    /// A directory of the project tree could not be created.
    #[error("Failed to create directory '{path}': {source}.")]
    CreateDirError { path: String, source: io::Error },

    /// A generated file could not be written.
    #[error("Failed to write file '{path}': {source}.")]
    WriteFileError { path: String, source: io::Error },

    /// Any other filesystem failure.
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The project name cannot be used as identifier and path segment.
    #[error("Invalid project name '{name}': {reason}.")]
    InvalidProjectName { name: String, reason: String },

    /// Malformed defaults file or inconsistent options.
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// A template failed to render.
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to report
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
