//! Skyline profiles: rows for lower storage, columns for upper storage

use rayon::prelude::*;
use spblas_core::{FillMode, Scalar, SkyMatrix};

use super::{Axis, EntryLocator, Lines};

impl<T: Scalar> Lines<T> for SkyMatrix<T> {
    #[inline(always)]
    fn for_each(&self, line: usize, mut f: impl FnMut(usize, T)) {
        let (first, values) = self.profile(line);
        for (k, &value) in values.iter().enumerate() {
            f(first + k, value);
        }
    }
}

impl<T: Scalar> EntryLocator<T> for SkyMatrix<T> {
    type Lines<'a> = &'a SkyMatrix<T>;

    fn order(&self) -> usize {
        self.size()
    }

    fn lines(&self, axis: Axis) -> Option<Self::Lines<'_>> {
        let stored = match self.fill() {
            FillMode::Lower => Axis::Row,
            FillMode::Upper => Axis::Column,
        };
        (axis == stored).then_some(self)
    }

    fn diagonal(&self) -> Vec<T> {
        (0..self.size())
            .into_par_iter()
            .map(|k| SkyMatrix::diagonal(self, k).unwrap_or_else(T::zero))
            .collect()
    }
}
