//! Explicit edge-weight matrices.
//!
//! A [`WeightMatrix`] owns the flat token list of an `EDGE_WEIGHT_SECTION`
//! and addresses it in place: nothing is unpacked until [`WeightMatrix::to_dense`]
//! is called. The token count is validated once, at construction.
//!
//! # Examples
//!
//! ```
//! use tsplib_norm::matrix::{FormatKind, WeightMatrix};
//!
//! let m = WeightMatrix::new(vec![5.0, 1.0, 5.0, 2.0, 3.0, 5.0], 3, FormatKind::LowerDiagRow)
//!     .expect("6 values for a 3x3 lower triangle with diagonal");
//! assert_eq!(m.value_at(0, 2).expect("in range"), 2.0);
//! assert_eq!(m.to_dense(), vec![
//!     vec![5.0, 1.0, 2.0],
//!     vec![1.0, 5.0, 3.0],
//!     vec![2.0, 3.0, 5.0],
//! ]);
//! ```

mod format;
mod index;

pub use format::{FormatKind, Layout, Triangle};
pub use index::{expected_count, triangular};

use crate::error::{TsplibError, TsplibResult};
use index::Slot;

/// Dense row-major `n × n` matrix.
pub type DenseMatrix = Vec<Vec<f64>>;

/// Validated, immutable edge-weight matrix in its packed on-disk layout.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix {
    dimension: usize,
    format: FormatKind,
    layout: Layout,
    storage: Box<[f64]>,
    min_index: usize,
}

impl WeightMatrix {
    /// Wrap `numbers` as a `dimension × dimension` matrix in `format`.
    ///
    /// # Errors
    ///
    /// Returns [`TsplibError::SizeMismatch`] when the number of values is not
    /// exactly what `format` needs for `dimension`.
    pub fn new(numbers: Vec<f64>, dimension: usize, format: FormatKind) -> TsplibResult<Self> {
        let layout = format.layout();
        let expected = expected_count(layout, dimension);
        if numbers.len() != expected {
            return Err(TsplibError::SizeMismatch {
                format,
                dimension,
                expected,
                actual: numbers.len(),
            });
        }
        Ok(Self {
            dimension,
            format,
            layout,
            storage: numbers.into_boxed_slice(),
            min_index: 0,
        })
    }

    /// Address rows and columns starting at `min_index` instead of zero.
    ///
    /// `with_min_index(1)` lets callers use TSPLIB node numbers directly.
    #[must_use]
    pub fn with_min_index(mut self, min_index: usize) -> Self {
        self.min_index = min_index;
        self
    }

    /// Number of rows (and columns).
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Declared layout.
    #[must_use]
    pub fn format(&self) -> FormatKind {
        self.format
    }

    /// Whether diagonal entries are stored rather than implied zero.
    #[must_use]
    pub fn has_diagonal(&self) -> bool {
        self.format.has_diagonal()
    }

    /// Base added to external coordinates.
    #[must_use]
    pub fn min_index(&self) -> usize {
        self.min_index
    }

    /// Packed values exactly as supplied.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.storage
    }

    /// Weight of edge `(i, j)` in the caller's coordinate base.
    ///
    /// # Errors
    ///
    /// Returns [`TsplibError::IndexOutOfRange`] if either coordinate falls
    /// outside `[min_index, min_index + dimension)`.
    pub fn value_at(&self, i: usize, j: usize) -> TsplibResult<f64> {
        let out_of_range = || TsplibError::IndexOutOfRange {
            row: i,
            col: j,
            dimension: self.dimension,
        };
        let row = i
            .checked_sub(self.min_index)
            .filter(|&r| r < self.dimension)
            .ok_or_else(out_of_range)?;
        let col = j
            .checked_sub(self.min_index)
            .filter(|&c| c < self.dimension)
            .ok_or_else(out_of_range)?;
        Ok(self.lookup(row, col))
    }

    /// Zero-based read; coordinates must already be in range.
    #[inline]
    fn lookup(&self, row: usize, col: usize) -> f64 {
        match index::slot(self.layout, self.dimension, row, col) {
            Slot::Stored(idx) => self.storage[idx],
            Slot::ImplicitZero => 0.0,
        }
    }

    /// Row `i` (caller's base) as a dense vector.
    ///
    /// # Errors
    ///
    /// Returns [`TsplibError::RowOutOfRange`] for a row outside the matrix.
    pub fn row(&self, i: usize) -> TsplibResult<Vec<f64>> {
        let row = i
            .checked_sub(self.min_index)
            .filter(|&r| r < self.dimension)
            .ok_or(TsplibError::RowOutOfRange {
                row: i,
                dimension: self.dimension,
            })?;
        Ok((0..self.dimension).map(|col| self.lookup(row, col)).collect())
    }

    /// Materialize all `n × n` entries, row-major.
    #[must_use]
    pub fn to_dense(&self) -> DenseMatrix {
        (0..self.dimension)
            .map(|row| {
                (0..self.dimension)
                    .map(|col| self.lookup(row, col))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
