//! Kernel families
//!
//! Each kernel is one monomorphization of a generic body over
//! (element type, entry locator, configuration constants). The constants are
//! the `repr(u8)` codes of the descriptor enums so that every dispatch slot
//! holds a distinct, fully specialized function.

pub(crate) mod diagmm;
pub(crate) mod diagsm;
pub(crate) mod trmm;
pub(crate) mod trsm;

use spblas_core::{DiagType, FillMode, Layout, Operation, Result, Scalar};

use self::{diagmm::diagmm, diagsm::diagsm, trmm::trmm, trsm::trsm};
use crate::locator::EntryLocator;

/// Arguments shared by every kernel
pub(crate) struct KernelArgs<'a, T, M> {
    pub matrix: &'a M,
    pub operation: Operation,
    pub alpha: T,
    /// Ignored by the solve kernels
    pub beta: T,
    pub x: &'a [T],
    pub columns: usize,
    pub ldx: usize,
    pub y: &'a mut [T],
    pub ldy: usize,
}

impl<'a, T, M> KernelArgs<'a, T, M> {
    /// Same operands against a concrete storage
    pub(crate) fn rebind<N>(self, matrix: &'a N) -> KernelArgs<'a, T, N> {
        KernelArgs {
            matrix,
            operation: self.operation,
            alpha: self.alpha,
            beta: self.beta,
            x: self.x,
            columns: self.columns,
            ldx: self.ldx,
            y: self.y,
            ldy: self.ldy,
        }
    }
}

/// Signature of every table slot
pub(crate) type Kernel<T, M> = for<'a> fn(KernelArgs<'a, T, M>) -> Result<()>;

/// Slots per operation: layout × fill × diagonal
pub(crate) const OPERATION_SLOTS: usize = Layout::COUNT * FillMode::COUNT * DiagType::COUNT;

/// Slots of a triangular family: operation × layout × fill × diagonal
pub(crate) const TRIANGULAR_SLOTS: usize = Operation::COUNT * OPERATION_SLOTS;

/// Slots of a diagonal family: layout × diagonal, operation passed at run time
pub(crate) const DIAGONAL_SLOTS: usize = Layout::COUNT * DiagType::COUNT;

/// Table position of a triangular configuration, diagonal kind varying fastest
pub(crate) const fn triangular_key(
    operation: Operation,
    layout: Layout,
    fill: FillMode,
    diag: DiagType,
) -> usize {
    ((operation.ordinal() * Layout::COUNT + layout.ordinal()) * FillMode::COUNT + fill.ordinal())
        * DiagType::COUNT
        + diag.ordinal()
}

pub(crate) const fn diagonal_key(layout: Layout, diag: DiagType) -> usize {
    layout.ordinal() * DiagType::COUNT + diag.ordinal()
}

/// The eight (layout, fill, diag) instances of `$kernel` for one operation code,
/// in key order
macro_rules! operation_slots {
    ($kernel:ident::<$t:ty, $m:ty, $op:literal>) => {
        [
            $kernel::<$t, $m, $op, 0, 0, 0> as Kernel<$t, $m>,
            $kernel::<$t, $m, $op, 0, 0, 1> as Kernel<$t, $m>,
            $kernel::<$t, $m, $op, 0, 1, 0> as Kernel<$t, $m>,
            $kernel::<$t, $m, $op, 0, 1, 1> as Kernel<$t, $m>,
            $kernel::<$t, $m, $op, 1, 0, 0> as Kernel<$t, $m>,
            $kernel::<$t, $m, $op, 1, 0, 1> as Kernel<$t, $m>,
            $kernel::<$t, $m, $op, 1, 1, 0> as Kernel<$t, $m>,
            $kernel::<$t, $m, $op, 1, 1, 1> as Kernel<$t, $m>,
        ]
    };
}

/// Full triangular table for `$kernel`; conjugate-transpose slots stay empty
/// for real element types
macro_rules! triangular_table {
    ($kernel:ident::<$t:ty, $m:ty>) => {
        join_operations(
            operation_slots!($kernel::<$t, $m, 0>),
            operation_slots!($kernel::<$t, $m, 1>),
            if <$t as Scalar>::IS_COMPLEX {
                Some(operation_slots!($kernel::<$t, $m, 2>))
            } else {
                None
            },
        )
    };
}

/// Diagonal table for `$kernel`, all slots populated
macro_rules! diagonal_table {
    ($kernel:ident::<$t:ty, $m:ty>) => {
        [
            Some($kernel::<$t, $m, 0, 0> as Kernel<$t, $m>),
            Some($kernel::<$t, $m, 0, 1> as Kernel<$t, $m>),
            Some($kernel::<$t, $m, 1, 0> as Kernel<$t, $m>),
            Some($kernel::<$t, $m, 1, 1> as Kernel<$t, $m>),
        ]
    };
}

/// Lay out the per-operation blocks in key order
const fn join_operations<K: Copy>(
    non_transpose: [K; OPERATION_SLOTS],
    transpose: [K; OPERATION_SLOTS],
    conjugate_transpose: Option<[K; OPERATION_SLOTS]>,
) -> [Option<K>; TRIANGULAR_SLOTS] {
    let mut table = [None; TRIANGULAR_SLOTS];
    let mut i = 0;
    while i < OPERATION_SLOTS {
        table[i] = Some(non_transpose[i]);
        table[OPERATION_SLOTS + i] = Some(transpose[i]);
        if let Some(block) = conjugate_transpose {
            table[2 * OPERATION_SLOTS + i] = Some(block[i]);
        }
        i += 1;
    }
    table
}

/// Dispatch tables of every kernel family over one entry locator, evaluated
/// at compile time for each (element type, locator) pair
pub(crate) trait KernelTables<T: Scalar>: EntryLocator<T> + Sized {
    const TRSM: [Option<Kernel<T, Self>>; TRIANGULAR_SLOTS] = triangular_table!(trsm::<T, Self>);
    const TRMM: [Option<Kernel<T, Self>>; TRIANGULAR_SLOTS] = triangular_table!(trmm::<T, Self>);
    const DIAGSM: [Option<Kernel<T, Self>>; DIAGONAL_SLOTS] = diagonal_table!(diagsm::<T, Self>);
    const DIAGMM: [Option<Kernel<T, Self>>; DIAGONAL_SLOTS] = diagonal_table!(diagmm::<T, Self>);
}

impl<T: Scalar, M: EntryLocator<T>> KernelTables<T> for M {}

pub(crate) const fn operation_of(code: u8) -> Operation {
    match code {
        0 => Operation::NonTranspose,
        1 => Operation::Transpose,
        _ => Operation::ConjugateTranspose,
    }
}

pub(crate) const fn layout_of(code: u8) -> Layout {
    match code {
        0 => Layout::RowMajor,
        _ => Layout::ColumnMajor,
    }
}

pub(crate) const fn fill_of(code: u8) -> FillMode {
    match code {
        0 => FillMode::Lower,
        _ => FillMode::Upper,
    }
}

pub(crate) const fn is_unit(code: u8) -> bool {
    code == DiagType::Unit as u8
}

/// Value of op(A) for a stored entry of A
#[inline(always)]
pub(crate) fn apply_op<T: Scalar>(operation: Operation, value: T) -> T {
    match operation {
        Operation::ConjugateTranspose => value.conjugate(),
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_dense_and_diag_fastest() {
        let mut seen = [false; TRIANGULAR_SLOTS];
        for op in [Operation::NonTranspose, Operation::Transpose, Operation::ConjugateTranspose] {
            for layout in [Layout::RowMajor, Layout::ColumnMajor] {
                for fill in [FillMode::Lower, FillMode::Upper] {
                    for diag in [DiagType::NonUnit, DiagType::Unit] {
                        let key = triangular_key(op, layout, fill, diag);
                        assert!(!seen[key]);
                        seen[key] = true;
                    }
                }
            }
        }
        assert!(seen.iter().all(|&s| s));

        assert_eq!(
            triangular_key(Operation::NonTranspose, Layout::RowMajor, FillMode::Lower, DiagType::Unit),
            1
        );
        assert_eq!(
            triangular_key(Operation::Transpose, Layout::RowMajor, FillMode::Lower, DiagType::NonUnit),
            8
        );
        assert_eq!(diagonal_key(Layout::ColumnMajor, DiagType::NonUnit), 2);
    }

    #[test]
    fn test_codes_round_trip_descriptor_enums() {
        for op in [Operation::NonTranspose, Operation::Transpose, Operation::ConjugateTranspose] {
            assert_eq!(operation_of(op as u8), op);
        }
        assert_eq!(layout_of(Layout::ColumnMajor as u8), Layout::ColumnMajor);
        assert_eq!(fill_of(FillMode::Upper as u8), FillMode::Upper);
        assert!(is_unit(DiagType::Unit as u8));
        assert!(!is_unit(DiagType::NonUnit as u8));
    }
}
