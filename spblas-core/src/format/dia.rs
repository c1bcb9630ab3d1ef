//! Diagonal-offset storage

use alloc::vec::Vec;

use crate::error::{Result, SpblasError};
use crate::format::MatrixFormat;
use crate::traits::{Scalar, SparseMatrix};

/// DIA matrix: a dense band per stored diagonal
///
/// `distance[d]` is the column offset of diagonal `d` relative to the row
/// (0 is the main diagonal, negative is below it). Entry `(r, r + distance[d])`
/// is stored at `values[d * rows + r]`; slots that fall outside the matrix
/// are padding and never read.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiaMatrix<T> {
    rows: usize,
    cols: usize,
    distance: Vec<isize>,
    values: Vec<T>,
}

impl<T: Scalar> DiaMatrix<T> {
    /// Build from diagonal offsets and the `ndiag * rows` band array
    pub fn new(rows: usize, cols: usize, distance: Vec<isize>, values: Vec<T>) -> Result<Self> {
        if values.len() != distance.len() * rows {
            return Err(SpblasError::InvalidStructure("values must hold ndiag * rows entries"));
        }
        for (k, &d) in distance.iter().enumerate() {
            if d <= -(rows as isize) || d >= cols as isize {
                return Err(SpblasError::InvalidStructure("diagonal offset outside matrix"));
            }
            if distance[..k].contains(&d) {
                return Err(SpblasError::InvalidStructure("diagonal offset stored twice"));
            }
        }

        Ok(Self {
            rows,
            cols,
            distance,
            values,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn distance(&self) -> &[isize] {
        &self.distance
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn ndiag(&self) -> usize {
        self.distance.len()
    }

    /// Column of row `row` on diagonal `d`, if inside the matrix
    #[inline(always)]
    pub fn column_on(&self, d: usize, row: usize) -> Option<usize> {
        let col = row as isize + self.distance[d];
        (col >= 0 && (col as usize) < self.cols).then_some(col as usize)
    }

    /// Row of column `col` on diagonal `d`, if inside the matrix
    #[inline(always)]
    pub fn row_on(&self, d: usize, col: usize) -> Option<usize> {
        let row = col as isize - self.distance[d];
        (row >= 0 && (row as usize) < self.rows).then_some(row as usize)
    }

    /// Stored value at `(row, row + distance[d])`
    #[inline(always)]
    pub fn value(&self, d: usize, row: usize) -> T {
        self.values[d * self.rows + row]
    }

    /// Index of the main diagonal among the stored diagonals
    pub fn main_diagonal(&self) -> Option<usize> {
        self.distance.iter().position(|&d| d == 0)
    }
}

impl<T: Scalar> SparseMatrix for DiaMatrix<T> {
    type Element = T;

    fn format(&self) -> MatrixFormat {
        MatrixFormat::Dia
    }

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let offset = col as isize - row as isize;
        let d = self.distance.iter().position(|&dist| dist == offset)?;
        Some(self.value(d, row))
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn nnz(&self) -> usize {
        self.values.len()
    }
}
