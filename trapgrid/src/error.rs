//! Error types for trapgrid.

use thiserror::Error;
use trapgrid_core::GridError;

/// Errors surfaced by generation, search requests and the CLI.
///
/// An unreachable goal is not an error: searches report it as an empty path.
#[derive(Error, Debug)]
pub enum Error {
    /// Rejected before any generation or search work began.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("could not generate a connected grid after {attempts} attempts: {reason}")]
    GenerationFailure { attempts: usize, reason: String },

    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<GridError> for Error {
    fn from(e: GridError) -> Self {
        Error::InvalidInput(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Error::InvalidInput("grid_size must be at least 2".into());
        assert_eq!(err.to_string(), "invalid input: grid_size must be at least 2");

        let err: Error = GridError::UnknownCode(9).into();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(err.to_string().contains("unknown cell code 9"));

        let err = Error::GenerationFailure {
            attempts: 3,
            reason: "no room".into(),
        };
        assert!(err.to_string().contains("after 3 attempts"));
    }
}
