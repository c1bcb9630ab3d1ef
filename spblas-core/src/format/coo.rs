//! Coordinate list storage

use alloc::vec::Vec;

use crate::descriptor::IndexBase;
use crate::error::Result;
use crate::format::MatrixFormat;
use crate::traits::{Scalar, SparseMatrix};
use crate::validation::{normalize_indices, validate_lengths};

/// COO matrix: unordered `(row, col, value)` triplets
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CooMatrix<T> {
    rows: usize,
    cols: usize,
    row_indx: Vec<usize>,
    col_indx: Vec<usize>,
    values: Vec<T>,
}

impl<T: Scalar> CooMatrix<T> {
    /// Build from raw triplet arrays expressed in `index_base`
    pub fn new(
        index_base: IndexBase,
        rows: usize,
        cols: usize,
        row_indx: Vec<usize>,
        col_indx: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self> {
        validate_lengths(
            values.len(),
            &[row_indx.len(), col_indx.len()],
            "triplet arrays differ in length",
        )?;
        let row_indx = normalize_indices(row_indx, index_base, rows)?;
        let col_indx = normalize_indices(col_indx, index_base, cols)?;

        Ok(Self {
            rows,
            cols,
            row_indx,
            col_indx,
            values,
        })
    }

    /// Build from 0-based `(row, col, value)` triplets
    pub fn from_triplets(rows: usize, cols: usize, triplets: &[(usize, usize, T)]) -> Result<Self> {
        let row_indx = triplets.iter().map(|&(r, _, _)| r).collect();
        let col_indx = triplets.iter().map(|&(_, c, _)| c).collect();
        let values = triplets.iter().map(|&(_, _, v)| v).collect();
        Self::new(IndexBase::Zero, rows, cols, row_indx, col_indx, values)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn row_indx(&self) -> &[usize] {
        &self.row_indx
    }

    pub fn col_indx(&self) -> &[usize] {
        &self.col_indx
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Iterate `(row, col, value)` in storage order
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.row_indx
            .iter()
            .zip(self.col_indx.iter())
            .zip(self.values.iter())
            .map(|((&r, &c), &v)| (r, c, v))
    }
}

impl<T: Scalar> SparseMatrix for CooMatrix<T> {
    type Element = T;

    fn format(&self) -> MatrixFormat {
        MatrixFormat::Coo
    }

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        self.entries()
            .filter(|&(r, c, _)| r == row && c == col)
            .map(|(_, _, v)| v)
            .last()
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn nnz(&self) -> usize {
        self.values.len()
    }
}
