//! Pipeline errors.

use super::error_code::{self, GridErrorCode};
use super::{ConfigError, DimensionError, MatrixError, SanitizeError};

/// Errors that can occur while turning items into matrices.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Sanitize error: {0}")]
    Sanitize(#[from] SanitizeError),

    #[error("Dimension error: {0}")]
    Dimension(#[from] DimensionError),

    #[error("Matrix error: {0}")]
    Matrix(#[from] MatrixError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl PipelineError {
    /// Fatal errors abort the whole batch, not just the current item.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Matrix(MatrixError::ResourceExhausted { .. })
                | Self::Matrix(MatrixError::AllocationFailed { .. })
        )
    }
}

impl GridErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => error_code::INVALID_INPUT,
            Self::Sanitize(e) => e.error_code(),
            Self::Dimension(e) => e.error_code(),
            Self::Matrix(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
