//! Numeric element abstraction for sparse kernels
//!
//! Kernels are written once against [`Scalar`] and instantiated for the four
//! BLAS element types: `f32`, `f64`, `Complex32` and `Complex64`.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};

use num_complex::{Complex32, Complex64};

use crate::format::{DataType, DynamicMatrix, MatrixStorage};

/// Trait for types that can be stored in and computed with by sparse kernels
///
/// The arithmetic primitives are the only thing that varies between real and
/// complex instantiations of a kernel:
/// - `multiply_add` / `multiply_sub`: accumulate a product into `self`
/// - `divide`: pivot division
/// - `conjugate`: identity for real types
pub trait Scalar:
    Copy
    + PartialEq
    + Debug
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Element type tag carried by matrix handles
    const DATA_TYPE: DataType;

    /// Whether conjugate-transpose configurations exist for this type
    const IS_COMPLEX: bool;

    fn zero() -> Self;

    fn one() -> Self;

    #[inline(always)]
    fn multiply(self, rhs: Self) -> Self {
        self * rhs
    }

    /// `self + a * b`
    #[inline(always)]
    fn multiply_add(self, a: Self, b: Self) -> Self {
        self + a * b
    }

    /// `self - a * b`
    #[inline(always)]
    fn multiply_sub(self, a: Self, b: Self) -> Self {
        self - a * b
    }

    #[inline(always)]
    fn divide(self, rhs: Self) -> Self {
        self / rhs
    }

    fn conjugate(self) -> Self;

    /// Modulus as f64, used for tolerance checks
    fn magnitude(self) -> f64;

    /// Borrow the typed storage out of a dynamically typed matrix
    ///
    /// Returns `None` when the matrix holds a different element type.
    fn downcast(matrix: &DynamicMatrix) -> Option<&MatrixStorage<Self>>;

    /// Tag typed storage with this element type
    fn upcast(matrix: MatrixStorage<Self>) -> DynamicMatrix;
}

macro_rules! impl_real_scalar {
    ($ty:ty, $data_type:ident) => {
        impl Scalar for $ty {
            const DATA_TYPE: DataType = DataType::$data_type;
            const IS_COMPLEX: bool = false;

            fn zero() -> Self {
                0.0
            }

            fn one() -> Self {
                1.0
            }

            #[inline(always)]
            fn conjugate(self) -> Self {
                self
            }

            fn magnitude(self) -> f64 {
                if self < 0.0 {
                    -(self as f64)
                } else {
                    self as f64
                }
            }

            fn downcast(matrix: &DynamicMatrix) -> Option<&MatrixStorage<Self>> {
                match matrix {
                    DynamicMatrix::$data_type(m) => Some(m),
                    _ => None,
                }
            }

            fn upcast(matrix: MatrixStorage<Self>) -> DynamicMatrix {
                DynamicMatrix::$data_type(matrix)
            }
        }
    };
}

macro_rules! impl_complex_scalar {
    ($ty:ty, $data_type:ident) => {
        impl Scalar for $ty {
            const DATA_TYPE: DataType = DataType::$data_type;
            const IS_COMPLEX: bool = true;

            fn zero() -> Self {
                <$ty>::new(0.0, 0.0)
            }

            fn one() -> Self {
                <$ty>::new(1.0, 0.0)
            }

            #[inline(always)]
            fn conjugate(self) -> Self {
                self.conj()
            }

            fn magnitude(self) -> f64 {
                self.norm() as f64
            }

            fn downcast(matrix: &DynamicMatrix) -> Option<&MatrixStorage<Self>> {
                match matrix {
                    DynamicMatrix::$data_type(m) => Some(m),
                    _ => None,
                }
            }

            fn upcast(matrix: MatrixStorage<Self>) -> DynamicMatrix {
                DynamicMatrix::$data_type(matrix)
            }
        }
    };
}

impl_real_scalar!(f32, F32);
impl_real_scalar!(f64, F64);
impl_complex_scalar!(Complex32, C32);
impl_complex_scalar!(Complex64, C64);
