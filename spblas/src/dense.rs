//! Dense operand views and the column-parallel drivers
//!
//! Kernels never index the flat dense buffers directly. They read `x`
//! through [`DenseRef`] and write `y` through one of the drivers below, which
//! hand every worker a disjoint piece of `y`.

use rayon::prelude::*;
use spblas_core::{Layout, Scalar};

/// Read-only view of a dense rows × cols operand
#[derive(Clone, Copy)]
pub(crate) struct DenseRef<'a, T> {
    data: &'a [T],
    layout: Layout,
    ld: usize,
}

impl<'a, T: Scalar> DenseRef<'a, T> {
    pub(crate) fn new(data: &'a [T], layout: Layout, ld: usize) -> Self {
        Self { data, layout, ld }
    }

    #[inline(always)]
    pub(crate) fn get(&self, row: usize, col: usize) -> T {
        self.data[self.layout.index(row, col, self.ld)]
    }
}

/// Mutable view of a dense rows × cols operand
pub(crate) struct DenseMut<'a, T> {
    data: &'a mut [T],
    layout: Layout,
    ld: usize,
    rows: usize,
    cols: usize,
}

impl<'a, T: Scalar> DenseMut<'a, T> {
    pub(crate) fn new(data: &'a mut [T], layout: Layout, ld: usize, rows: usize, cols: usize) -> Self {
        Self {
            data,
            layout,
            ld,
            rows,
            cols,
        }
    }

    /// Run `f(c, column)` for every column in parallel
    ///
    /// `column` holds the current contents of column `c` of the operand on
    /// entry and is stored back on exit. Column-major operands are handed out
    /// in place; row-major ones go through a per-column scratch buffer.
    pub(crate) fn for_each_column<F>(self, f: F)
    where
        F: Fn(usize, &mut [T]) + Sync,
    {
        let (rows, cols, ld) = (self.rows, self.cols, self.ld);
        if rows == 0 || cols == 0 {
            return;
        }
        match self.layout {
            Layout::ColumnMajor => {
                self.data
                    .par_chunks_mut(ld)
                    .take(cols)
                    .enumerate()
                    .for_each(|(c, column)| f(c, &mut column[..rows]));
            }
            Layout::RowMajor => {
                let current: &[T] = self.data;
                let columns: Vec<Vec<T>> = (0..cols)
                    .into_par_iter()
                    .map(|c| {
                        let mut work: Vec<T> = (0..rows).map(|r| current[r * ld + c]).collect();
                        f(c, &mut work);
                        work
                    })
                    .collect();

                self.data
                    .par_chunks_mut(ld)
                    .take(rows)
                    .enumerate()
                    .for_each(|(r, row)| {
                        for (c, column) in columns.iter().enumerate() {
                            row[c] = column[r];
                        }
                    });
            }
        }
    }

    /// Replace every element with `f(row, col, old)`, parallel over rows and columns
    pub(crate) fn for_each_cell<F>(self, f: F)
    where
        F: Fn(usize, usize, T) -> T + Sync,
    {
        let (rows, cols, ld) = (self.rows, self.cols, self.ld);
        if rows == 0 || cols == 0 {
            return;
        }
        let (lines, line_len) = match self.layout {
            Layout::RowMajor => (rows, cols),
            Layout::ColumnMajor => (cols, rows),
        };
        let layout = self.layout;
        self.data
            .par_chunks_mut(ld)
            .take(lines)
            .enumerate()
            .for_each(|(line, chunk)| {
                for (k, cell) in chunk[..line_len].iter_mut().enumerate() {
                    let (r, c) = match layout {
                        Layout::RowMajor => (line, k),
                        Layout::ColumnMajor => (k, line),
                    };
                    *cell = f(r, c, *cell);
                }
            });
    }
}
