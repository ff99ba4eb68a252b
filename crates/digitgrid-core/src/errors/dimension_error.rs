//! Dimension resolution errors.

use super::error_code::{self, GridErrorCode};

/// Errors raised while deriving (rows, columns) from a string length.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DimensionError {
    /// The leading decimal digit of the length is 0, so `length / rows`
    /// is undefined. Only a length of 0 gets here.
    #[error("Leading digit of length {length} is 0; column count is undefined")]
    DivideByZero { length: usize },
}

impl GridErrorCode for DimensionError {
    fn error_code(&self) -> &'static str {
        error_code::DIVIDE_BY_ZERO
    }
}
