//! Matrix configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_CELLS, DEFAULT_SINGLE_ROW_THRESHOLD, DEFAULT_THREADS};

/// Configuration for dimension resolution and matrix population.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MatrixConfig {
    /// Length filters above this switch to the single-row rule. Default: 900.
    pub single_row_threshold: Option<usize>,
    /// Maximum `rows * columns` per matrix. Default: 16_777_216.
    pub max_cells: Option<usize>,
    /// Populator threads (0 = rayon global pool). Default: 0.
    pub threads: Option<usize>,
}

impl MatrixConfig {
    pub fn effective_single_row_threshold(&self) -> usize {
        self.single_row_threshold
            .unwrap_or(DEFAULT_SINGLE_ROW_THRESHOLD)
    }

    pub fn effective_max_cells(&self) -> usize {
        self.max_cells.unwrap_or(DEFAULT_MAX_CELLS)
    }

    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(DEFAULT_THREADS)
    }
}
