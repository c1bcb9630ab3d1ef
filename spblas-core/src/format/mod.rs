//! Sparse storage formats
//!
//! Each format lives in its own module with a validating constructor that
//! normalizes indices to 0-based. [`MatrixStorage`] tags a typed matrix with
//! its format and [`DynamicMatrix`] additionally tags the element type.

pub mod bsr;
pub mod coo;
pub mod csc;
pub mod csr;
pub mod dia;
pub mod sky;

pub use bsr::{BsrMatrix, GebsrMatrix};
pub use coo::CooMatrix;
pub use csc::CscMatrix;
pub use csr::CsrMatrix;
pub use dia::DiaMatrix;
pub use sky::SkyMatrix;

use num_complex::{Complex32, Complex64};

use crate::traits::{Scalar, SparseMatrix};

/// Matrix storage format tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum MatrixFormat {
    /// Compressed Sparse Row (CSR)
    Csr = 0,
    /// Compressed Sparse Column (CSC)
    Csc = 1,
    /// Coordinate format (COO)
    Coo = 2,
    /// Block Sparse Row with square blocks (BSR)
    Bsr = 3,
    /// Diagonal offsets (DIA)
    Dia = 4,
    /// Skyline profile (SKY)
    Sky = 5,
    /// Block Sparse Row with rectangular blocks (GEBSR)
    Gebsr = 6,
}

impl core::fmt::Display for MatrixFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            MatrixFormat::Csr => "CSR",
            MatrixFormat::Csc => "CSC",
            MatrixFormat::Coo => "COO",
            MatrixFormat::Bsr => "BSR",
            MatrixFormat::Dia => "DIA",
            MatrixFormat::Sky => "SKY",
            MatrixFormat::Gebsr => "GEBSR",
        };
        write!(f, "{name}")
    }
}

/// Element types supported by the kernels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum DataType {
    F32 = 0,
    F64 = 1,
    C32 = 2,
    C64 = 3,
}

impl core::fmt::Display for DataType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DataType::F32 => write!(f, "f32"),
            DataType::F64 => write!(f, "f64"),
            DataType::C32 => write!(f, "c32"),
            DataType::C64 => write!(f, "c64"),
        }
    }
}

/// A typed sparse matrix in one of the supported formats
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatrixStorage<T> {
    Csr(CsrMatrix<T>),
    Csc(CscMatrix<T>),
    Coo(CooMatrix<T>),
    Bsr(BsrMatrix<T>),
    Dia(DiaMatrix<T>),
    Sky(SkyMatrix<T>),
    Gebsr(GebsrMatrix<T>),
}

macro_rules! for_each_format {
    ($storage:expr, $m:ident => $body:expr) => {
        match $storage {
            MatrixStorage::Csr($m) => $body,
            MatrixStorage::Csc($m) => $body,
            MatrixStorage::Coo($m) => $body,
            MatrixStorage::Bsr($m) => $body,
            MatrixStorage::Dia($m) => $body,
            MatrixStorage::Sky($m) => $body,
            MatrixStorage::Gebsr($m) => $body,
        }
    };
}

impl<T: Scalar> SparseMatrix for MatrixStorage<T> {
    type Element = T;

    fn format(&self) -> MatrixFormat {
        for_each_format!(self, m => m.format())
    }

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        for_each_format!(self, m => m.get_element(row, col))
    }

    fn dimensions(&self) -> (usize, usize) {
        for_each_format!(self, m => m.dimensions())
    }

    fn nnz(&self) -> usize {
        for_each_format!(self, m => m.nnz())
    }
}

macro_rules! impl_from_format {
    ($($variant:ident($ty:ident)),+ $(,)?) => {
        $(
            impl<T> From<$ty<T>> for MatrixStorage<T> {
                fn from(matrix: $ty<T>) -> Self {
                    MatrixStorage::$variant(matrix)
                }
            }
        )+
    };
}

impl_from_format!(
    Csr(CsrMatrix),
    Csc(CscMatrix),
    Coo(CooMatrix),
    Bsr(BsrMatrix),
    Dia(DiaMatrix),
    Sky(SkyMatrix),
    Gebsr(GebsrMatrix),
);

/// Sparse matrix that can hold any supported element type
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DynamicMatrix {
    F32(MatrixStorage<f32>),
    F64(MatrixStorage<f64>),
    C32(MatrixStorage<Complex32>),
    C64(MatrixStorage<Complex64>),
}

impl DynamicMatrix {
    /// Element type tag
    pub fn data_type(&self) -> DataType {
        match self {
            DynamicMatrix::F32(_) => DataType::F32,
            DynamicMatrix::F64(_) => DataType::F64,
            DynamicMatrix::C32(_) => DataType::C32,
            DynamicMatrix::C64(_) => DataType::C64,
        }
    }

    /// Storage format tag
    pub fn format(&self) -> MatrixFormat {
        match self {
            DynamicMatrix::F32(m) => m.format(),
            DynamicMatrix::F64(m) => m.format(),
            DynamicMatrix::C32(m) => m.format(),
            DynamicMatrix::C64(m) => m.format(),
        }
    }

    /// Get matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        match self {
            DynamicMatrix::F32(m) => m.dimensions(),
            DynamicMatrix::F64(m) => m.dimensions(),
            DynamicMatrix::C32(m) => m.dimensions(),
            DynamicMatrix::C64(m) => m.dimensions(),
        }
    }

    /// Get number of stored entries
    pub fn nnz(&self) -> usize {
        match self {
            DynamicMatrix::F32(m) => m.nnz(),
            DynamicMatrix::F64(m) => m.nnz(),
            DynamicMatrix::C32(m) => m.nnz(),
            DynamicMatrix::C64(m) => m.nnz(),
        }
    }

    /// Borrow the typed storage if the element type is `T`
    pub fn downcast<T: Scalar>(&self) -> Option<&MatrixStorage<T>> {
        T::downcast(self)
    }
}

impl<T: Scalar> From<MatrixStorage<T>> for DynamicMatrix {
    fn from(matrix: MatrixStorage<T>) -> Self {
        T::upcast(matrix)
    }
}
