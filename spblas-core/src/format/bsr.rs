//! Block compressed row storage (square and general blocks)

use alloc::vec::Vec;

use crate::descriptor::{IndexBase, Layout};
use crate::error::{Result, SpblasError};
use crate::format::MatrixFormat;
use crate::traits::{Scalar, SparseMatrix};
use crate::validation::{normalize_indices, normalize_offsets, validate_lengths};

/// Dense block addressing shared by BSR and GEBSR
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct BlockShape {
    row_dim: usize,
    col_dim: usize,
    layout: Layout,
}

impl BlockShape {
    const fn len(self) -> usize {
        self.row_dim * self.col_dim
    }

    /// Offset of (r, c) inside one block
    #[inline(always)]
    const fn offset(self, r: usize, c: usize) -> usize {
        match self.layout {
            Layout::RowMajor => self.layout.index(r, c, self.col_dim),
            Layout::ColumnMajor => self.layout.index(r, c, self.row_dim),
        }
    }
}

/// Block-row structure shared by BSR and GEBSR
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct BlockRows<T> {
    shape: BlockShape,
    block_rows: usize,
    block_cols: usize,
    rows_start: Vec<usize>,
    rows_end: Vec<usize>,
    col_indx: Vec<usize>,
    values: Vec<T>,
}

impl<T: Scalar> BlockRows<T> {
    #[allow(clippy::too_many_arguments)]
    fn new(
        index_base: IndexBase,
        shape: BlockShape,
        block_rows: usize,
        block_cols: usize,
        rows_start: Vec<usize>,
        rows_end: Vec<usize>,
        col_indx: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self> {
        if shape.row_dim == 0 || shape.col_dim == 0 {
            return Err(SpblasError::InvalidStructure("block dimensions must be positive"));
        }
        validate_lengths(
            values.len(),
            &[col_indx.len() * shape.len()],
            "values must hold one dense block per block index",
        )?;
        let (rows_start, rows_end) =
            normalize_offsets(rows_start, rows_end, block_rows, col_indx.len(), index_base)?;
        let col_indx = normalize_indices(col_indx, index_base, block_cols)?;

        Ok(Self {
            shape,
            block_rows,
            block_cols,
            rows_start,
            rows_end,
            col_indx,
            values,
        })
    }

    /// Iterate `(col, value)` over the scalar row `row`
    #[inline]
    fn row(&self, row: usize) -> impl Iterator<Item = (usize, T)> + '_ {
        let shape = self.shape;
        let (block_row, r) = (row / shape.row_dim, row % shape.row_dim);
        (self.rows_start[block_row]..self.rows_end[block_row]).flat_map(move |b| {
            let base = b * shape.len();
            let first_col = self.col_indx[b] * shape.col_dim;
            (0..shape.col_dim).map(move |c| (first_col + c, self.values[base + shape.offset(r, c)]))
        })
    }

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        let (rows, cols) = self.dimensions();
        if row >= rows || col >= cols {
            return None;
        }
        let block_row = row / self.shape.row_dim;
        let block_col = col / self.shape.col_dim;
        (self.rows_start[block_row]..self.rows_end[block_row])
            .filter(|&b| self.col_indx[b] == block_col)
            .map(|b| {
                let r = row % self.shape.row_dim;
                let c = col % self.shape.col_dim;
                self.values[b * self.shape.len() + self.shape.offset(r, c)]
            })
            .last()
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.block_rows * self.shape.row_dim, self.block_cols * self.shape.col_dim)
    }
}

/// BSR matrix with square `block_size × block_size` dense blocks
///
/// Block row `br` owns blocks `rows_start[br]..rows_end[br]`; block `b`
/// sits at block column `col_indx[b]` and its values occupy
/// `values[b * block_size² ..]` in `block_layout` order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BsrMatrix<T> {
    inner: BlockRows<T>,
}

impl<T: Scalar> BsrMatrix<T> {
    /// Build from raw block arrays expressed in `index_base`
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        index_base: IndexBase,
        block_layout: Layout,
        block_size: usize,
        block_rows: usize,
        block_cols: usize,
        rows_start: Vec<usize>,
        rows_end: Vec<usize>,
        col_indx: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self> {
        let shape = BlockShape {
            row_dim: block_size,
            col_dim: block_size,
            layout: block_layout,
        };
        let inner = BlockRows::new(
            index_base, shape, block_rows, block_cols, rows_start, rows_end, col_indx, values,
        )?;
        Ok(Self { inner })
    }

    pub fn block_size(&self) -> usize {
        self.inner.shape.row_dim
    }

    pub fn block_layout(&self) -> Layout {
        self.inner.shape.layout
    }

    pub fn block_rows(&self) -> usize {
        self.inner.block_rows
    }

    pub fn block_cols(&self) -> usize {
        self.inner.block_cols
    }

    pub fn rows_start(&self) -> &[usize] {
        &self.inner.rows_start
    }

    pub fn rows_end(&self) -> &[usize] {
        &self.inner.rows_end
    }

    pub fn col_indx(&self) -> &[usize] {
        &self.inner.col_indx
    }

    pub fn values(&self) -> &[T] {
        &self.inner.values
    }

    /// Iterate `(col, value)` over scalar row `row`, padding zeros included
    #[inline]
    pub fn row(&self, row: usize) -> impl Iterator<Item = (usize, T)> + '_ {
        self.inner.row(row)
    }

    /// Diagonal entry of scalar row `row` from the diagonal block, if stored
    pub fn diagonal(&self, row: usize) -> Option<T> {
        self.inner.get_element(row, row)
    }
}

impl<T: Scalar> SparseMatrix for BsrMatrix<T> {
    type Element = T;

    fn format(&self) -> MatrixFormat {
        MatrixFormat::Bsr
    }

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        self.inner.get_element(row, col)
    }

    fn dimensions(&self) -> (usize, usize) {
        self.inner.dimensions()
    }

    fn nnz(&self) -> usize {
        self.inner.values.len()
    }
}

/// GEBSR matrix with rectangular `row_block_dim × col_block_dim` blocks
///
/// Constructible and inspectable; the solve kernels do not handle it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GebsrMatrix<T> {
    inner: BlockRows<T>,
}

impl<T: Scalar> GebsrMatrix<T> {
    /// Build from raw block arrays expressed in `index_base`
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        index_base: IndexBase,
        block_layout: Layout,
        row_block_dim: usize,
        col_block_dim: usize,
        block_rows: usize,
        block_cols: usize,
        rows_start: Vec<usize>,
        rows_end: Vec<usize>,
        col_indx: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self> {
        let shape = BlockShape {
            row_dim: row_block_dim,
            col_dim: col_block_dim,
            layout: block_layout,
        };
        let inner = BlockRows::new(
            index_base, shape, block_rows, block_cols, rows_start, rows_end, col_indx, values,
        )?;
        Ok(Self { inner })
    }

    pub fn row_block_dim(&self) -> usize {
        self.inner.shape.row_dim
    }

    pub fn col_block_dim(&self) -> usize {
        self.inner.shape.col_dim
    }

    pub fn block_layout(&self) -> Layout {
        self.inner.shape.layout
    }

    pub fn rows_start(&self) -> &[usize] {
        &self.inner.rows_start
    }

    pub fn rows_end(&self) -> &[usize] {
        &self.inner.rows_end
    }

    pub fn col_indx(&self) -> &[usize] {
        &self.inner.col_indx
    }

    pub fn values(&self) -> &[T] {
        &self.inner.values
    }
}

impl<T: Scalar> SparseMatrix for GebsrMatrix<T> {
    type Element = T;

    fn format(&self) -> MatrixFormat {
        MatrixFormat::Gebsr
    }

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        self.inner.get_element(row, col)
    }

    fn dimensions(&self) -> (usize, usize) {
        self.inner.dimensions()
    }

    fn nnz(&self) -> usize {
        self.inner.values.len()
    }
}
