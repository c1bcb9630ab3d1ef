//! Validation utilities for sparse storage and dense operands
//!
//! Pure functions used by the format constructors and the solve entry points.

pub mod bounds;
pub mod structure;

pub use bounds::{dense_extent, normalize_indices, validate_dense_extent};
pub use structure::{normalize_offsets, split_offsets, validate_lengths};
