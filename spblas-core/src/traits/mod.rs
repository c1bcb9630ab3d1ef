//! Abstract interfaces shared by all storage formats and kernels

pub mod matrix;
pub mod scalar;

pub use matrix::SparseMatrix;
pub use scalar::Scalar;
