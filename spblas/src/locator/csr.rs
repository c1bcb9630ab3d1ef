//! CSR rows: one linear scan per row

use rayon::prelude::*;
use spblas_core::{CsrMatrix, Scalar, SparseMatrix};

use super::{Axis, EntryLocator, Lines};

impl<T: Scalar> Lines<T> for CsrMatrix<T> {
    #[inline(always)]
    fn for_each(&self, line: usize, mut f: impl FnMut(usize, T)) {
        for (col, value) in self.row(line) {
            f(col, value);
        }
    }
}

impl<T: Scalar> EntryLocator<T> for CsrMatrix<T> {
    type Lines<'a> = &'a CsrMatrix<T>;

    fn order(&self) -> usize {
        self.rows()
    }

    fn lines(&self, axis: Axis) -> Option<Self::Lines<'_>> {
        (axis == Axis::Row).then_some(self)
    }

    fn diagonal(&self) -> Vec<T> {
        let n = self.rows().min(self.cols());
        (0..n)
            .into_par_iter()
            .map(|i| self.get_element(i, i).unwrap_or_else(T::zero))
            .collect()
    }
}
