//! spblas - Sparse triangular and diagonal solve engine
//!
//! Given a sparse matrix in one of the `spblas-core` storage formats, this
//! crate solves `op(A) * y = alpha * x` for triangular or diagonal A against
//! a dense multi-column right-hand side, and computes the matching products.
//!
//! ## Architecture
//!
//! - **spblas-core**: storage formats, descriptors, element types and errors
//!   (`no_std`, no computation)
//! - **spblas**: entry locators per format, one generic substitution skeleton,
//!   static dispatch tables and the call surface
//!
//! ## Quick Start
//!
//! ```rust
//! use spblas::{
//!     solve_triangular, CsrMatrix, DiagType, FillMode, IndexBase, Layout, MatrixDescriptor,
//!     MatrixHandle, Operation,
//! };
//!
//! fn example() -> spblas::Result<()> {
//!     // [[2, 0, 0], [1, 3, 0], [0, 0, 4]]
//!     let csr = CsrMatrix::from_row_offsets(3, 3, &[0, 1, 3, 4], vec![0, 0, 1, 2], vec![2.0, 1.0, 3.0, 4.0])?;
//!     let matrix = MatrixHandle::new(IndexBase::Zero, csr);
//!     let descr = MatrixDescriptor::triangular(FillMode::Lower, DiagType::NonUnit);
//!
//!     let x = [1.0, 1.0, 1.0];
//!     let mut y = [0.0f64; 3];
//!     solve_triangular(Operation::NonTranspose, 1.0, &matrix, descr, Layout::ColumnMajor, &x, 1, 3, &mut y, 3)?;
//!     assert!((y[1] - 1.0 / 6.0).abs() < 1e-12);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Parallelism
//!
//! Right-hand-side columns are solved in parallel with rayon. Use an
//! [`Executor`] to choose the pool; the free functions run on the global one.

pub use spblas_core::*;

mod dense;
mod dispatch;
pub mod executor;
mod kernel;
mod locator;
mod solve;

pub use executor::{Executor, ExecutorConfig};
pub use solve::{multiply_diagonal, multiply_triangular, solve_diagonal, solve_triangular};
