#![cfg_attr(not(test), no_std)]

//! spblas-core - Sparse BLAS data model
//!
//! This crate provides the storage formats, operation descriptors, numeric
//! element abstraction and error taxonomy consumed by the `spblas` kernels.
//! It performs no computation beyond validation and element lookup.

extern crate alloc;

pub mod descriptor;
pub mod error;
pub mod format;
pub mod handle;
pub mod traits;
pub mod validation;

pub use descriptor::*;
pub use error::*;
pub use format::*;
pub use handle::MatrixHandle;
pub use traits::*;
pub use validation::{dense_extent, validate_dense_extent};

pub use num_complex::{Complex32, Complex64};
