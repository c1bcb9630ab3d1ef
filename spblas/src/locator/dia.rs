//! DIA lines by offset arithmetic, both axes without any scan

use rayon::prelude::*;
use spblas_core::{DiaMatrix, Scalar};

use super::{Axis, EntryLocator, Lines};

/// A DIA matrix opened along one axis
pub(crate) struct DiaLines<'a, T> {
    matrix: &'a DiaMatrix<T>,
    axis: Axis,
}

impl<T: Scalar> Lines<T> for DiaLines<'_, T> {
    #[inline(always)]
    fn for_each(&self, line: usize, mut f: impl FnMut(usize, T)) {
        let m = self.matrix;
        for d in 0..m.ndiag() {
            match self.axis {
                Axis::Row => {
                    if let Some(col) = m.column_on(d, line) {
                        f(col, m.value(d, line));
                    }
                }
                Axis::Column => {
                    if let Some(row) = m.row_on(d, line) {
                        f(row, m.value(d, row));
                    }
                }
            }
        }
    }
}

impl<T: Scalar> EntryLocator<T> for DiaMatrix<T> {
    type Lines<'a> = DiaLines<'a, T>;

    fn order(&self) -> usize {
        self.rows()
    }

    fn lines(&self, axis: Axis) -> Option<Self::Lines<'_>> {
        Some(DiaLines { matrix: self, axis })
    }

    fn diagonal(&self) -> Vec<T> {
        let n = self.rows().min(self.cols());
        match self.main_diagonal() {
            Some(d) => (0..n).into_par_iter().map(|i| self.value(d, i)).collect(),
            None => vec![T::zero(); n],
        }
    }
}
