//! Compressed sparse row storage

use alloc::vec::Vec;

use crate::descriptor::IndexBase;
use crate::error::Result;
use crate::format::MatrixFormat;
use crate::traits::{Scalar, SparseMatrix};
use crate::validation::{normalize_indices, normalize_offsets, split_offsets, validate_lengths};

/// CSR matrix with separate row start/end offsets
///
/// Entries of row `r` live at `rows_start[r]..rows_end[r]` in `col_indx` and
/// `values`. All indices are 0-based regardless of the index base the
/// matrix was built from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CsrMatrix<T> {
    rows: usize,
    cols: usize,
    rows_start: Vec<usize>,
    rows_end: Vec<usize>,
    col_indx: Vec<usize>,
    values: Vec<T>,
}

impl<T: Scalar> CsrMatrix<T> {
    /// Build from raw arrays expressed in `index_base`
    pub fn new(
        index_base: IndexBase,
        rows: usize,
        cols: usize,
        rows_start: Vec<usize>,
        rows_end: Vec<usize>,
        col_indx: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self> {
        validate_lengths(values.len(), &[col_indx.len()], "col_indx and values differ in length")?;
        let (rows_start, rows_end) =
            normalize_offsets(rows_start, rows_end, rows, values.len(), index_base)?;
        let col_indx = normalize_indices(col_indx, index_base, cols)?;

        Ok(Self {
            rows,
            cols,
            rows_start,
            rows_end,
            col_indx,
            values,
        })
    }

    /// Build from a 0-based `rows + 1` offset array
    pub fn from_row_offsets(
        rows: usize,
        cols: usize,
        row_offsets: &[usize],
        col_indx: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self> {
        let (rows_start, rows_end) = split_offsets(row_offsets, rows)?;
        Self::new(IndexBase::Zero, rows, cols, rows_start, rows_end, col_indx, values)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows_start(&self) -> &[usize] {
        &self.rows_start
    }

    pub fn rows_end(&self) -> &[usize] {
        &self.rows_end
    }

    pub fn col_indx(&self) -> &[usize] {
        &self.col_indx
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Iterate `(col, value)` over the stored entries of one row
    #[inline]
    pub fn row(&self, row: usize) -> impl Iterator<Item = (usize, T)> + '_ {
        let range = self.rows_start[row]..self.rows_end[row];
        self.col_indx[range.clone()]
            .iter()
            .copied()
            .zip(self.values[range].iter().copied())
    }
}

impl<T: Scalar> SparseMatrix for CsrMatrix<T> {
    type Element = T;

    fn format(&self) -> MatrixFormat {
        MatrixFormat::Csr
    }

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.row(row).filter(|&(c, _)| c == col).map(|(_, v)| v).last()
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn nnz(&self) -> usize {
        self.values.len()
    }
}
