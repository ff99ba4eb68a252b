//! Sanitizer errors.

use super::error_code::{self, GridErrorCode};

/// Errors raised while normalizing a raw item.
#[derive(Debug, thiserror::Error)]
pub enum SanitizeError {
    #[error("Cleanup match exceeded its {budget_ms}ms budget (took {elapsed_ms}ms)")]
    PatternTimeout { budget_ms: u64, elapsed_ms: u64 },

    #[error("Cleanup pattern failed to compile: {0}")]
    InvalidPattern(String),
}

impl GridErrorCode for SanitizeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::PatternTimeout { .. } => error_code::PATTERN_TIMEOUT,
            Self::InvalidPattern(_) => error_code::INVALID_PATTERN,
        }
    }
}
