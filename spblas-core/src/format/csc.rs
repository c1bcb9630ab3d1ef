//! Compressed sparse column storage

use alloc::vec::Vec;

use crate::descriptor::IndexBase;
use crate::error::Result;
use crate::format::MatrixFormat;
use crate::traits::{Scalar, SparseMatrix};
use crate::validation::{normalize_indices, normalize_offsets, split_offsets, validate_lengths};

/// CSC matrix with separate column start/end offsets
///
/// Entries of column `c` live at `cols_start[c]..cols_end[c]` in `row_indx`
/// and `values`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CscMatrix<T> {
    rows: usize,
    cols: usize,
    cols_start: Vec<usize>,
    cols_end: Vec<usize>,
    row_indx: Vec<usize>,
    values: Vec<T>,
}

impl<T: Scalar> CscMatrix<T> {
    /// Build from raw arrays expressed in `index_base`
    pub fn new(
        index_base: IndexBase,
        rows: usize,
        cols: usize,
        cols_start: Vec<usize>,
        cols_end: Vec<usize>,
        row_indx: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self> {
        validate_lengths(values.len(), &[row_indx.len()], "row_indx and values differ in length")?;
        let (cols_start, cols_end) =
            normalize_offsets(cols_start, cols_end, cols, values.len(), index_base)?;
        let row_indx = normalize_indices(row_indx, index_base, rows)?;

        Ok(Self {
            rows,
            cols,
            cols_start,
            cols_end,
            row_indx,
            values,
        })
    }

    /// Build from a 0-based `cols + 1` offset array
    pub fn from_col_offsets(
        rows: usize,
        cols: usize,
        col_offsets: &[usize],
        row_indx: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self> {
        let (cols_start, cols_end) = split_offsets(col_offsets, cols)?;
        Self::new(IndexBase::Zero, rows, cols, cols_start, cols_end, row_indx, values)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cols_start(&self) -> &[usize] {
        &self.cols_start
    }

    pub fn cols_end(&self) -> &[usize] {
        &self.cols_end
    }

    pub fn row_indx(&self) -> &[usize] {
        &self.row_indx
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Iterate `(row, value)` over the stored entries of one column
    #[inline]
    pub fn col(&self, col: usize) -> impl Iterator<Item = (usize, T)> + '_ {
        let range = self.cols_start[col]..self.cols_end[col];
        self.row_indx[range.clone()]
            .iter()
            .copied()
            .zip(self.values[range].iter().copied())
    }
}

impl<T: Scalar> SparseMatrix for CscMatrix<T> {
    type Element = T;

    fn format(&self) -> MatrixFormat {
        MatrixFormat::Csc
    }

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.col(col).filter(|&(r, _)| r == row).map(|(_, v)| v).last()
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn nnz(&self) -> usize {
        self.values.len()
    }
}
