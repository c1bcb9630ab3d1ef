//! BSR scalar rows: the blocks of a block row are scanned once per scalar row

use rayon::prelude::*;
use spblas_core::{BsrMatrix, Scalar, SparseMatrix};

use super::{Axis, EntryLocator, Lines};

impl<T: Scalar> Lines<T> for BsrMatrix<T> {
    #[inline(always)]
    fn for_each(&self, line: usize, mut f: impl FnMut(usize, T)) {
        for (col, value) in self.row(line) {
            f(col, value);
        }
    }
}

impl<T: Scalar> EntryLocator<T> for BsrMatrix<T> {
    type Lines<'a> = &'a BsrMatrix<T>;

    fn order(&self) -> usize {
        self.dimensions().0
    }

    fn lines(&self, axis: Axis) -> Option<Self::Lines<'_>> {
        (axis == Axis::Row).then_some(self)
    }

    fn diagonal(&self) -> Vec<T> {
        let (rows, cols) = self.dimensions();
        (0..rows.min(cols))
            .into_par_iter()
            .map(|i| BsrMatrix::diagonal(self, i).unwrap_or_else(T::zero))
            .collect()
    }
}
