//! Skyline (profile) storage

use alloc::vec::Vec;

use crate::descriptor::{FillMode, IndexBase};
use crate::error::{Result, SpblasError};
use crate::format::MatrixFormat;
use crate::traits::{Scalar, SparseMatrix};

/// Skyline matrix storing one triangle as contiguous profiles
///
/// With `FillMode::Lower` profile `k` is row `k` from its first stored
/// column up to and including the diagonal; with `FillMode::Upper` it is
/// column `k` from its first stored row down to the diagonal. Profile `k`
/// occupies `values[pointers[k]..pointers[k + 1]]` and always ends on the
/// diagonal entry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkyMatrix<T> {
    size: usize,
    fill: FillMode,
    pointers: Vec<usize>,
    values: Vec<T>,
}

impl<T: Scalar> SkyMatrix<T> {
    /// Build a `size × size` skyline matrix from profile pointers in `index_base`
    pub fn new(
        index_base: IndexBase,
        size: usize,
        fill: FillMode,
        pointers: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self> {
        if pointers.len() != size + 1 {
            return Err(SpblasError::InvalidStructure("pointers must have size + 1 entries"));
        }
        let offset = index_base.offset();
        let pointers = pointers
            .into_iter()
            .map(|p| {
                p.checked_sub(offset).ok_or(SpblasError::IndexOutOfBounds {
                    index: p,
                    bound: values.len() + offset + 1,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        for k in 0..size {
            let (start, end) = (pointers[k], pointers[k + 1]);
            if start > end {
                return Err(SpblasError::InvalidStructure("profile pointers must not decrease"));
            }
            if end - start > k + 1 {
                return Err(SpblasError::InvalidStructure("profile reaches past the matrix edge"));
            }
        }
        if pointers[size] != values.len() {
            return Err(SpblasError::InvalidStructure("last pointer must equal the value count"));
        }

        Ok(Self {
            size,
            fill,
            pointers,
            values,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Triangle held by the profiles
    pub fn fill(&self) -> FillMode {
        self.fill
    }

    pub fn pointers(&self) -> &[usize] {
        &self.pointers
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Profile `k` as `(first_index, values)`; entry `i` sits at index `first_index + i`
    #[inline]
    pub fn profile(&self, k: usize) -> (usize, &[T]) {
        let slice = &self.values[self.pointers[k]..self.pointers[k + 1]];
        (k + 1 - slice.len(), slice)
    }

    /// Stored diagonal entry of line `k`, if its profile is not empty
    #[inline]
    pub fn diagonal(&self, k: usize) -> Option<T> {
        self.profile(k).1.last().copied()
    }
}

impl<T: Scalar> SparseMatrix for SkyMatrix<T> {
    type Element = T;

    fn format(&self) -> MatrixFormat {
        MatrixFormat::Sky
    }

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        if row >= self.size || col >= self.size {
            return None;
        }
        let (line, index) = match self.fill {
            FillMode::Lower => (row, col),
            FillMode::Upper => (col, row),
        };
        if index > line {
            return None;
        }
        let (first, values) = self.profile(line);
        (index >= first).then(|| values[index - first])
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.size, self.size)
    }

    fn nnz(&self) -> usize {
        self.values.len()
    }
}
