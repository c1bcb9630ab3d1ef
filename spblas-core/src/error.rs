//! Error types for sparse BLAS operations

use thiserror::Error;

/// Errors that can occur during sparse BLAS operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpblasError {
    /// Matrix handle or dense operand has no storage behind it
    #[error("operand not initialized")]
    NotInitialized,
    /// Argument value rejected before dispatch
    #[error("invalid value: {0}")]
    InvalidValue(&'static str),
    /// No kernel exists for the requested format and configuration
    #[error("not supported: {0}")]
    NotSupported(&'static str),
    /// Stored index outside the declared matrix extent
    #[error("index out of bounds: {index} >= {bound}")]
    IndexOutOfBounds {
        /// Offending index after index-base normalization
        index: usize,
        /// Exclusive upper bound it was checked against
        bound: usize,
    },
    /// Storage arrays disagree in length or ordering
    #[error("invalid structure: {0}")]
    InvalidStructure(&'static str),
}

/// Status codes reported at the call surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    Success,
    NotInitialized,
    InvalidValue,
    NotSupported,
}

impl SpblasError {
    /// Collapse the error onto the four-valued call status
    pub const fn status(&self) -> Status {
        match self {
            SpblasError::NotInitialized => Status::NotInitialized,
            SpblasError::NotSupported(_) => Status::NotSupported,
            SpblasError::InvalidValue(_)
            | SpblasError::IndexOutOfBounds { .. }
            | SpblasError::InvalidStructure(_) => Status::InvalidValue,
        }
    }
}

impl<T> From<&Result<T>> for Status {
    fn from(result: &Result<T>) -> Self {
        match result {
            Ok(_) => Status::Success,
            Err(err) => err.status(),
        }
    }
}

/// Result type for sparse BLAS operations
pub type Result<T> = core::result::Result<T, SpblasError>;
