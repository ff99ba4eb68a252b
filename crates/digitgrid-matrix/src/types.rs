//! Matrix data types: Dimensions, Matrix.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Shape of an output matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

impl Dimensions {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// One row holding `length` cells.
    pub fn single_row(length: usize) -> Self {
        Self::new(1, length)
    }

    /// Total cell count, `None` on overflow.
    pub fn cells(&self) -> Option<usize> {
        self.rows.checked_mul(self.columns)
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns == 0
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

/// A rows x columns grid of digit values, stored row-major.
///
/// Built once by [`crate::MatrixPopulator`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct Matrix {
    rows: usize,
    columns: usize,
    cells: Vec<u8>,
    filled: usize,
}

/// Unchecked serde shape of [`Matrix`].
#[derive(Deserialize)]
struct RawMatrix {
    rows: usize,
    columns: usize,
    cells: Vec<u8>,
    filled: usize,
}

impl TryFrom<RawMatrix> for Matrix {
    type Error = String;

    fn try_from(raw: RawMatrix) -> Result<Self, Self::Error> {
        let expected = raw
            .rows
            .checked_mul(raw.columns)
            .ok_or_else(|| format!("{}x{} overflows", raw.rows, raw.columns))?;
        if raw.cells.len() != expected {
            return Err(format!(
                "{}x{} matrix needs {} cells, got {}",
                raw.rows,
                raw.columns,
                expected,
                raw.cells.len()
            ));
        }
        if raw.filled > expected {
            return Err(format!("filled count {} exceeds {} cells", raw.filled, expected));
        }
        if let Some(bad) = raw.cells.iter().find(|&&v| v > 9) {
            return Err(format!("cell value {bad} is not a digit"));
        }
        Ok(Self {
            rows: raw.rows,
            columns: raw.columns,
            cells: raw.cells,
            filled: raw.filled,
        })
    }
}

impl Matrix {
    /// Assemble a matrix from a row-major buffer.
    /// `cells.len()` must equal `dims.rows * dims.columns`.
    pub(crate) fn from_parts(dims: Dimensions, cells: Vec<u8>, filled: usize) -> Self {
        debug_assert_eq!(dims.cells(), Some(cells.len()));
        Self {
            rows: dims.rows,
            columns: dims.columns,
            cells,
            filled,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.rows, self.columns)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells that received a digit; the rest are zero padding.
    pub fn filled_cells(&self) -> usize {
        self.filled
    }

    pub fn get(&self, row: usize, column: usize) -> Option<u8> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.cells.get(row * self.columns + column).copied()
    }

    pub fn row(&self, row: usize) -> Option<&[u8]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.columns;
        self.cells.get(start..start + self.columns)
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.rows).map(move |r| {
            let start = r * self.columns;
            &self.cells[start..start + self.columns]
        })
    }

    /// Row-major view of every cell.
    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }

    pub fn to_nested(&self) -> Vec<Vec<u8>> {
        self.iter_rows().map(<[u8]>::to_vec).collect()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.iter_rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, value) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix {
        Matrix::from_parts(Dimensions::new(2, 3), vec![1, 2, 3, 4, 5, 0], 5)
    }

    #[test]
    fn test_accessors() {
        let m = sample();
        assert_eq!(m.dimensions(), Dimensions::new(2, 3));
        assert_eq!(m.get(1, 1), Some(5));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 3), None);
        assert_eq!(m.row(1), Some(&[4, 5, 0][..]));
        assert_eq!(m.to_nested(), vec![vec![1, 2, 3], vec![4, 5, 0]]);
        assert_eq!(m.filled_cells(), 5);
    }

    #[test]
    fn test_display() {
        assert_eq!(sample().to_string(), "1 2 3\n4 5 0");
        assert_eq!(Dimensions::new(4, 1).to_string(), "4x1");
    }

    #[test]
    fn test_zero_width_rows() {
        let m = Matrix::from_parts(Dimensions::new(1, 0), Vec::new(), 0);
        assert!(m.is_empty());
        assert_eq!(m.iter_rows().count(), 1);
        assert_eq!(m.row(0), Some(&[][..]));
    }

    #[test]
    fn test_dimension_overflow() {
        assert_eq!(Dimensions::new(usize::MAX, 2).cells(), None);
        assert!(Dimensions::new(0, 5).is_empty());
    }
}
