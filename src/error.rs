//! Error handling for pt.
//! Defines the error type and result alias used throughout the application.

use thiserror::Error;

/// Custom error types for pt operations.
///
/// Every failure surfaced by the capture and create flows ends up here. The
/// text rewriting engine itself never produces one of these.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// Represents failures to read or write the serialized template document
    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),

    /// Represents errors in the shape or content of a template
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Represents errors that occur during configuration parsing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents errors in ignore pattern compilation
    #[error("Ignore pattern error: {0}.")]
    IgnoreError(String),

    /// Represents failures while collecting placeholder values
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// A stored file path that cannot be materialized safely
    #[error("Invalid file path in template: '{path}'.")]
    InvalidPathError { path: String },

    #[error("Output directory '{output_dir}' already exists. Use --force to overwrite it.")]
    OutputDirectoryExistsError { output_dir: String },

    #[error("Template file '{path}' already exists. Use --force to overwrite it.")]
    TemplateFileExistsError { path: String },

    #[error("Project directory '{project_dir}' does not exist.")]
    ProjectDirDoesNotExistError { project_dir: String },
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
