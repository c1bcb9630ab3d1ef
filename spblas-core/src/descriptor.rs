//! Operation descriptor definitions
//!
//! Every enum here has a fixed ordinal and a `COUNT`, which together form the
//! radices of the dispatch keys used by the kernel tables.

use crate::error::SpblasError;

/// Algebraic operation applied to the sparse matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Operation {
    /// op(A) = A
    #[default]
    NonTranspose = 0,
    /// op(A) = Aᵀ
    Transpose = 1,
    /// op(A) = Aᴴ
    ConjugateTranspose = 2,
}

impl Operation {
    pub const COUNT: usize = 3;

    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Whether op(A) reads A's entries mirrored across the diagonal
    pub const fn is_transposed(self) -> bool {
        !matches!(self, Operation::NonTranspose)
    }
}

/// Storage scheme of a dense operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Layout {
    /// C-style: elements in a row are contiguous
    #[default]
    RowMajor = 0,
    /// Fortran-style: elements in a column are contiguous
    ColumnMajor = 1,
}

impl Layout {
    pub const COUNT: usize = 2;

    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Linear offset of element (row, col) for leading dimension `ld`
    #[inline(always)]
    pub const fn index(self, row: usize, col: usize, ld: usize) -> usize {
        match self {
            Layout::RowMajor => row * ld + col,
            Layout::ColumnMajor => col * ld + row,
        }
    }
}

/// Triangle of the matrix taken into account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum FillMode {
    #[default]
    Lower = 0,
    Upper = 1,
}

impl FillMode {
    pub const COUNT: usize = 2;

    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Whether (row, col) lies strictly inside this triangle
    #[inline(always)]
    pub const fn strictly_contains(self, row: usize, col: usize) -> bool {
        match self {
            FillMode::Lower => col < row,
            FillMode::Upper => col > row,
        }
    }
}

/// Whether the diagonal is assumed to be all ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum DiagType {
    /// Diagonal read from storage
    #[default]
    NonUnit = 0,
    /// Diagonal assumed to be one and never read
    Unit = 1,
}

impl DiagType {
    pub const COUNT: usize = 2;

    pub const fn ordinal(self) -> usize {
        self as usize
    }
}

/// Semantic interpretation of the sparse matrix for one call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum MatrixType {
    #[default]
    General = 0,
    Triangular = 1,
    Diagonal = 2,
}

/// External index origin of a matrix handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum IndexBase {
    #[default]
    Zero = 0,
    One = 1,
}

impl IndexBase {
    /// Offset subtracted from externally supplied indices
    pub const fn offset(self) -> usize {
        self as usize
    }
}

/// Per-call matrix descriptor
///
/// `fill_mode` only matters for triangular semantics and `diag` only for
/// triangular and diagonal semantics; the other fields are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixDescriptor {
    pub matrix_type: MatrixType,
    pub fill_mode: FillMode,
    pub diag: DiagType,
}

impl MatrixDescriptor {
    pub const fn triangular(fill_mode: FillMode, diag: DiagType) -> Self {
        Self {
            matrix_type: MatrixType::Triangular,
            fill_mode,
            diag,
        }
    }

    pub const fn diagonal(diag: DiagType) -> Self {
        Self {
            matrix_type: MatrixType::Diagonal,
            fill_mode: FillMode::Lower,
            diag,
        }
    }

    pub const fn general() -> Self {
        Self {
            matrix_type: MatrixType::General,
            fill_mode: FillMode::Lower,
            diag: DiagType::NonUnit,
        }
    }
}

macro_rules! impl_try_from_u8 {
    ($ty:ident { $($value:literal => $variant:ident),+ $(,)? }) => {
        impl TryFrom<u8> for $ty {
            type Error = SpblasError;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $($value => Ok($ty::$variant),)+
                    _ => Err(SpblasError::InvalidValue(concat!(
                        "unknown ",
                        stringify!($ty),
                        " code"
                    ))),
                }
            }
        }
    };
}

impl_try_from_u8!(Operation { 0 => NonTranspose, 1 => Transpose, 2 => ConjugateTranspose });
impl_try_from_u8!(Layout { 0 => RowMajor, 1 => ColumnMajor });
impl_try_from_u8!(FillMode { 0 => Lower, 1 => Upper });
impl_try_from_u8!(DiagType { 0 => NonUnit, 1 => Unit });
impl_try_from_u8!(MatrixType { 0 => General, 1 => Triangular, 2 => Diagonal });
impl_try_from_u8!(IndexBase { 0 => Zero, 1 => One });
