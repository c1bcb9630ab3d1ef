//! COO triplets bucketed by line before substitution
//!
//! Triplets carry no order, so opening an axis runs one counting pass that
//! groups entries by row or column (stable with respect to storage order).

use rayon::prelude::*;
use spblas_core::{CooMatrix, Scalar};

use super::{Axis, EntryLocator, Lines};

/// Entries of a COO matrix grouped by line
pub(crate) struct Buckets<T> {
    offsets: Vec<usize>,
    index: Vec<usize>,
    values: Vec<T>,
}

impl<T: Scalar> Buckets<T> {
    fn new(matrix: &CooMatrix<T>, axis: Axis) -> Self {
        let (lines, keys, others) = match axis {
            Axis::Row => (matrix.rows(), matrix.row_indx(), matrix.col_indx()),
            Axis::Column => (matrix.cols(), matrix.col_indx(), matrix.row_indx()),
        };

        let mut offsets = vec![0usize; lines + 1];
        for &key in keys {
            offsets[key + 1] += 1;
        }
        for line in 0..lines {
            offsets[line + 1] += offsets[line];
        }

        let nnz = keys.len();
        let mut cursor = offsets[..lines].to_vec();
        let mut index = vec![0usize; nnz];
        let mut values = vec![T::zero(); nnz];
        for ((&key, &other), &value) in keys.iter().zip(others).zip(matrix.values()) {
            let slot = cursor[key];
            index[slot] = other;
            values[slot] = value;
            cursor[key] += 1;
        }

        Self {
            offsets,
            index,
            values,
        }
    }
}

impl<T: Scalar> Lines<T> for Buckets<T> {
    #[inline(always)]
    fn for_each(&self, line: usize, mut f: impl FnMut(usize, T)) {
        let range = self.offsets[line]..self.offsets[line + 1];
        for (&k, &v) in self.index[range.clone()].iter().zip(&self.values[range]) {
            f(k, v);
        }
    }
}

impl<T: Scalar> EntryLocator<T> for CooMatrix<T> {
    type Lines<'a> = Buckets<T>;

    fn order(&self) -> usize {
        self.rows()
    }

    fn lines(&self, axis: Axis) -> Option<Self::Lines<'_>> {
        Some(Buckets::new(self, axis))
    }

    /// Diagonal candidates are found in parallel and applied in storage
    /// order, so the last stored duplicate of a diagonal position wins.
    fn diagonal(&self) -> Vec<T> {
        let candidates: Vec<(usize, T)> = self
            .row_indx()
            .par_iter()
            .zip(self.col_indx().par_iter())
            .zip(self.values().par_iter())
            .filter_map(|((&r, &c), &v)| (r == c).then_some((r, v)))
            .collect();

        let mut diag = vec![T::zero(); self.rows().min(self.cols())];
        for (i, value) in candidates {
            diag[i] = value;
        }
        diag
    }
}
