//! Error type for the scoring harness

use thiserror::Error;

/// Errors raised while scoring a scheme
#[derive(Debug, Error)]
pub enum ScoringError {
    /// The scheme under test failed
    #[error(transparent)]
    Checker(#[from] checkdigit_api::Error),

    /// Invalid scoring configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Configuration file could not be parsed
    #[error("configuration parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Worker pool could not be started
    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for scoring operations
pub type ScoringResult<T> = std::result::Result<T, ScoringError>;
