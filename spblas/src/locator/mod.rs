//! Entry locators
//!
//! A locator is the only format-specific piece of a kernel: it tells the
//! shared substitution skeleton how to enumerate the stored entries of one
//! row or one column of A, and how to pull out A's diagonal. Formats that
//! store rows contiguously (CSR, BSR, lower skyline) open rows, column
//! formats (CSC, upper skyline) open columns, DIA opens both by offset
//! arithmetic, and COO buckets its triplets along whichever axis is asked for.

mod bsr;
mod coo;
mod csc;
mod csr;
mod dia;
mod sky;

use spblas_core::Scalar;

/// Direction along which entries of A are enumerated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    Row,
    Column,
}

impl Axis {
    pub(crate) const fn other(self) -> Self {
        match self {
            Axis::Row => Axis::Column,
            Axis::Column => Axis::Row,
        }
    }

    /// (row, col) of A for entry `index` of line `line` along this axis
    #[inline(always)]
    pub(crate) const fn coords(self, line: usize, index: usize) -> (usize, usize) {
        match self {
            Axis::Row => (line, index),
            Axis::Column => (index, line),
        }
    }
}

/// Stored entries of A opened along one axis
pub(crate) trait Lines<T>: Sync {
    /// Call `f(index, value)` for every stored entry of `line`
    ///
    /// `index` is the column for row lines and the row for column lines.
    fn for_each(&self, line: usize, f: impl FnMut(usize, T));
}

/// Format capability consumed by the generic kernels
pub(crate) trait EntryLocator<T: Scalar>: Sync {
    type Lines<'a>: Lines<T>
    where
        Self: 'a;

    /// Order n of the square matrix
    fn order(&self) -> usize;

    /// Open A along `axis`, or `None` if the storage cannot walk that axis
    fn lines(&self, axis: Axis) -> Option<Self::Lines<'_>>;

    /// Stored diagonal of A, zero where no entry is stored
    fn diagonal(&self) -> Vec<T>;
}

impl<T: Scalar, L: Lines<T>> Lines<T> for &L {
    #[inline(always)]
    fn for_each(&self, line: usize, f: impl FnMut(usize, T)) {
        (**self).for_each(line, f)
    }
}
