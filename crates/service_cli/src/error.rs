//! CLI error type.

use thiserror::Error;

use crate::config::SettingsError;

/// Errors surfaced by `prng` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// An input file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Command-line arguments are missing or inconsistent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Settings failed to load or validate.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// A parameter failed validation.
    #[error(transparent)]
    Validation(#[from] prng_core::types::ValidationError),

    /// Generation failed.
    #[error("Generation failed: {0}")]
    Generator(#[from] prng_generators::GeneratorError),

    /// A distribution transform failed.
    #[error("Sampling failed: {0}")]
    Variable(#[from] prng_variables::VariableError),

    /// A goodness-of-fit test could not run.
    #[error("Goodness of fit: {0}")]
    Goodness(#[from] prng_validation::goodness::GoodnessError),

    /// A seed or parameter list could not be parsed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A batch job file could not be parsed.
    #[error("Job file error: {0}")]
    JobFile(#[from] toml::de::Error),

    /// JSON rendering failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The worker pool could not be built.
    #[error("Worker pool error: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),

    /// I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
