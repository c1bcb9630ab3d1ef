//! Core matrix abstraction traits
//!
//! Every storage format implements [`SparseMatrix`], which is the
//! format-agnostic view used for element lookup and introspection. Kernels
//! never go through this trait; they use format-specific entry locators.

use super::scalar::Scalar;
use crate::format::MatrixFormat;

/// Core sparse matrix trait for format-agnostic access
pub trait SparseMatrix {
    /// The element type stored in this matrix
    type Element: Scalar;

    /// Storage format tag
    fn format(&self) -> MatrixFormat;

    /// Get an element at the specified position
    ///
    /// Returns `None` if the element is not stored or if the position is out
    /// of bounds. For duplicated positions the last stored value wins.
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of stored entries
    fn nnz(&self) -> usize;

    /// Whether the matrix is square
    fn is_square(&self) -> bool {
        let (rows, cols) = self.dimensions();
        rows == cols
    }
}
