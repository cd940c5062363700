//! Error handling for the fledge application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for fledge operations.
///
/// Only configuration problems are fatal for a generation run. Everything that
/// goes wrong inside a single generation task is downgraded to a warning by the
/// orchestrator, so most variants surface as log lines rather than exit codes.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The project name is not a valid Dart package identifier
    #[error(
        "Invalid project name '{name}': it must start with a lowercase letter or underscore \
         and contain only lowercase letters, digits and underscores."
    )]
    InvalidProjectName { name: String },

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents errors raised by the template engine
    #[error("Template rendering error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors that occur while selecting or applying templates
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// The target project directory exists and `--force` was not given
    #[error("Output directory '{output_dir}' already exists. Use --force to overwrite it.")]
    OutputDirectoryExistsError { output_dir: String },

    /// Represents an inconsistent task graph
    #[error("Pipeline error: {0}.")]
    PipelineError(String),

    /// Represents errors that occur during hook command execution
    #[error("Hook execution error: {0}.")]
    HookError(String),

    /// Represents errors in processing .fledgeignore files
    #[error("FledgeIgnore error: {0}.")]
    IgnoreError(String),

    /// Represents failures of interactive prompts
    #[error("Prompt error: {0}.")]
    PromptError(String),

    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}.")]
    YamlError(#[from] serde_yaml::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
