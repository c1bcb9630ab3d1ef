//! CSC columns: contributions are scattered into unsolved rows

use rayon::prelude::*;
use spblas_core::{CscMatrix, Scalar, SparseMatrix};

use super::{Axis, EntryLocator, Lines};

impl<T: Scalar> Lines<T> for CscMatrix<T> {
    #[inline(always)]
    fn for_each(&self, line: usize, mut f: impl FnMut(usize, T)) {
        for (row, value) in self.col(line) {
            f(row, value);
        }
    }
}

impl<T: Scalar> EntryLocator<T> for CscMatrix<T> {
    type Lines<'a> = &'a CscMatrix<T>;

    fn order(&self) -> usize {
        self.rows()
    }

    fn lines(&self, axis: Axis) -> Option<Self::Lines<'_>> {
        (axis == Axis::Column).then_some(self)
    }

    fn diagonal(&self) -> Vec<T> {
        let n = self.rows().min(self.cols());
        (0..n)
            .into_par_iter()
            .map(|i| self.get_element(i, i).unwrap_or_else(T::zero))
            .collect()
    }
}
