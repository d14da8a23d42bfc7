//! Error handling for manustyle.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for manustyle operations.
///
/// Parse problems in optional layers (`YamlError`, `NotAMapping`) are
/// recovered by the callers that load those layers. The remaining variants
/// abort the run before any output is written.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents malformed YAML in frontmatter or the metadata file
    #[error("YAML error: {0}.")]
    YamlError(#[from] serde_yaml::Error),

    /// YAML parsed successfully but did not yield a key/value mapping
    #[error("Expected a key/value mapping in {origin}.")]
    NotAMapping { origin: String },

    /// Required keys are absent from every configuration layer
    #[error("Missing keys in frontmatter: {}.", .missing.join(", "))]
    MissingConfigurationError { missing: Vec<String> },

    /// The stylesheet template could not be found
    #[error("Template file not found at {path}.")]
    MissingTemplateError { path: String },

    /// The placeholder pattern failed to compile
    #[error("Pattern error: {0}.")]
    PatternError(#[from] regex::Error),
}

/// Convenience type alias for Results with `Error` as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("Error: {err}");
    std::process::exit(1);
}
