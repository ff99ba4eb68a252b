//! Matrix population errors.

use super::error_code::{self, GridErrorCode};

/// Errors raised while allocating or filling a matrix.
#[derive(Debug, thiserror::Error)]
pub enum MatrixError {
    #[error("Matrix of {rows}x{columns} exceeds the {limit}-cell limit")]
    ResourceExhausted {
        rows: usize,
        columns: usize,
        limit: usize,
    },

    #[error("Allocation of {cells} cells failed")]
    AllocationFailed { cells: usize },

    #[error("Populator thread pool could not be built: {0}")]
    ThreadPool(String),
}

impl GridErrorCode for MatrixError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ResourceExhausted { .. } | Self::AllocationFailed { .. } => {
                error_code::RESOURCE_EXHAUSTED
            }
            Self::ThreadPool(_) => error_code::THREAD_POOL_ERROR,
        }
    }
}
