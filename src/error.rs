use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for footprint generation.
#[derive(Debug, Error)]
pub enum FootprintError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while validating configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{parameter} must be positive, got {value}")]
    NotPositive { parameter: &'static str, value: f64 },

    #[error("{parameter} must be at least {min}, got {value}")]
    TooFewSegments {
        parameter: &'static str,
        value: u32,
        min: u32,
    },

    #[error("path {0} needs at least 2 points")]
    PathTooShort(&'static str),
}

/// Convenience type alias for results using [`FootprintError`].
pub type Result<T> = std::result::Result<T, FootprintError>;
