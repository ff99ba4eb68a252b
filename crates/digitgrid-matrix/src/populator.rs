//! Parallel matrix population.
//!
//! Row `r` owns the digit range `[r * columns, (r + 1) * columns)` clamped to
//! the supply. Ranges are fixed before any task runs, so rows fill
//! independently on the rayon pool and completion order cannot change the
//! result. Cells past the supply stay zero.

use std::sync::Arc;

use digitgrid_core::config::MatrixConfig;
use digitgrid_core::errors::MatrixError;
use rayon::prelude::*;

use crate::types::{Dimensions, Matrix};

/// Allocates and fills matrices, one rayon task per row.
#[derive(Debug, Clone)]
pub struct MatrixPopulator {
    max_cells: usize,
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl MatrixPopulator {
    /// Populator on the rayon global pool.
    pub fn new(max_cells: usize) -> Self {
        Self {
            max_cells,
            pool: None,
        }
    }

    /// Populator on a dedicated pool of `threads` workers (0 = global pool).
    pub fn with_threads(max_cells: usize, threads: usize) -> Result<Self, MatrixError> {
        if threads == 0 {
            return Ok(Self::new(max_cells));
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("digitgrid-populate-{i}"))
            .build()
            .map_err(|e| MatrixError::ThreadPool(e.to_string()))?;
        Ok(Self {
            max_cells,
            pool: Some(Arc::new(pool)),
        })
    }

    pub fn from_config(config: &MatrixConfig) -> Result<Self, MatrixError> {
        Self::with_threads(config.effective_max_cells(), config.effective_threads())
    }

    pub fn max_cells(&self) -> usize {
        self.max_cells
    }

    /// Number of workers rows are spread across.
    pub fn threads(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    /// Build a `dims`-shaped matrix from `digits` in row-major order.
    ///
    /// Surplus digits are dropped; missing ones leave zeros.
    pub fn populate(&self, dims: Dimensions, digits: &[u8]) -> Result<Matrix, MatrixError> {
        let cells = dims
            .cells()
            .filter(|&cells| cells <= self.max_cells)
            .ok_or(MatrixError::ResourceExhausted {
                rows: dims.rows,
                columns: dims.columns,
                limit: self.max_cells,
            })?;

        let mut buffer: Vec<u8> = Vec::new();
        buffer
            .try_reserve_exact(cells)
            .map_err(|_| MatrixError::AllocationFailed { cells })?;
        buffer.resize(cells, 0);

        if cells > 0 {
            match &self.pool {
                Some(pool) => pool.install(|| fill_rows(&mut buffer, dims.columns, digits)),
                None => fill_rows(&mut buffer, dims.columns, digits),
            }
        }

        let filled = cells.min(digits.len());
        tracing::trace!(%dims, cells, filled, "matrix populated");
        Ok(Matrix::from_parts(dims, buffer, filled))
    }
}

/// Copy each row's precomputed digit range into its own row slice.
fn fill_rows(buffer: &mut [u8], columns: usize, digits: &[u8]) {
    buffer
        .par_chunks_mut(columns)
        .enumerate()
        .for_each(|(row, cells)| {
            let offset = row * columns;
            if offset >= digits.len() {
                return;
            }
            let end = (offset + columns).min(digits.len());
            let supply = &digits[offset..end];
            cells[..supply.len()].copy_from_slice(supply);
        });
}
