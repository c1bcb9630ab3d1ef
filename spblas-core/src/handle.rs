//! Owned matrix handles
//!
//! A [`MatrixHandle`] is what callers pass to the solve entry points. It pairs
//! a [`DynamicMatrix`] with the index base the matrix was declared in, and can
//! be explicitly destroyed, after which every operation on it reports
//! [`SpblasError::NotInitialized`].

use crate::descriptor::IndexBase;
use crate::error::{Result, SpblasError};
use crate::format::{DataType, DynamicMatrix, MatrixFormat, MatrixStorage};
use crate::traits::Scalar;

/// Immutable sparse matrix handle
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixHandle {
    index_base: IndexBase,
    matrix: Option<DynamicMatrix>,
}

impl MatrixHandle {
    /// Wrap typed storage that was built from `index_base` arrays
    pub fn new<T: Scalar>(index_base: IndexBase, storage: impl Into<MatrixStorage<T>>) -> Self {
        Self {
            index_base,
            matrix: Some(T::upcast(storage.into())),
        }
    }

    /// Index base the matrix arrays were declared in
    pub fn index_base(&self) -> IndexBase {
        self.index_base
    }

    pub fn is_initialized(&self) -> bool {
        self.matrix.is_some()
    }

    /// Borrow the underlying matrix
    pub fn matrix(&self) -> Result<&DynamicMatrix> {
        self.matrix.as_ref().ok_or(SpblasError::NotInitialized)
    }

    pub fn format(&self) -> Result<MatrixFormat> {
        self.matrix().map(DynamicMatrix::format)
    }

    pub fn data_type(&self) -> Result<DataType> {
        self.matrix().map(DynamicMatrix::data_type)
    }

    pub fn dimensions(&self) -> Result<(usize, usize)> {
        self.matrix().map(DynamicMatrix::dimensions)
    }

    /// Release the storage, returning it if there was any
    pub fn destroy(&mut self) -> Option<DynamicMatrix> {
        self.matrix.take()
    }
}
