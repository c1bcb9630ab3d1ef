//! Kernel selection
//!
//! A call is routed first by storage format (which fixes the entry locator),
//! then by matrix type to a kernel family, and finally by its configuration
//! key to one slot of that family's compile-time table
//! ([`KernelTables`]). An empty slot means the configuration has no kernel.

use log::debug;
use spblas_core::{
    DiagType, FillMode, Layout, MatrixDescriptor, MatrixStorage, MatrixType, Operation, Result,
    Scalar, SpblasError,
};

use crate::kernel::{self, Kernel, KernelArgs, KernelTables};
use crate::locator::EntryLocator;

/// Kernel family requested by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Routine {
    Solve,
    Multiply,
}

/// Run the kernel selected by `descriptor` and `layout` on `storage`
pub(crate) fn dispatch<T: Scalar>(
    routine: Routine,
    descriptor: MatrixDescriptor,
    layout: Layout,
    args: KernelArgs<'_, T, MatrixStorage<T>>,
) -> Result<()> {
    let storage = args.matrix;
    match storage {
        MatrixStorage::Csr(m) => run(routine, descriptor, layout, args.rebind(m)),
        MatrixStorage::Csc(m) => run(routine, descriptor, layout, args.rebind(m)),
        MatrixStorage::Coo(m) => run(routine, descriptor, layout, args.rebind(m)),
        MatrixStorage::Bsr(m) => run(routine, descriptor, layout, args.rebind(m)),
        MatrixStorage::Dia(m) => run(routine, descriptor, layout, args.rebind(m)),
        MatrixStorage::Sky(m) => run(routine, descriptor, layout, args.rebind(m)),
        MatrixStorage::Gebsr(_) => {
            debug!("rejecting {routine:?} on GEBSR storage");
            Err(SpblasError::NotSupported("GEBSR storage has no triangular or diagonal kernels"))
        }
    }
}

fn run<T, M>(
    routine: Routine,
    descriptor: MatrixDescriptor,
    layout: Layout,
    args: KernelArgs<'_, T, M>,
) -> Result<()>
where
    T: Scalar,
    M: EntryLocator<T>,
{
    let kernel = select::<T, M>(routine, descriptor, layout, args.operation)?;
    kernel(args)
}

fn select<T, M>(
    routine: Routine,
    descriptor: MatrixDescriptor,
    layout: Layout,
    operation: Operation,
) -> Result<Kernel<T, M>>
where
    T: Scalar,
    M: EntryLocator<T>,
{
    let (fill, diag): (FillMode, DiagType) = (descriptor.fill_mode, descriptor.diag);
    let slot = match descriptor.matrix_type {
        MatrixType::Triangular => {
            let key = kernel::triangular_key(operation, layout, fill, diag);
            debug!("{routine:?} triangular slot {key}: {operation:?} {layout:?} {fill:?} {diag:?}");
            let table = match routine {
                Routine::Solve => <M as KernelTables<T>>::TRSM,
                Routine::Multiply => <M as KernelTables<T>>::TRMM,
            };
            table.get(key).copied().flatten()
        }
        MatrixType::Diagonal => {
            let key = kernel::diagonal_key(layout, diag);
            debug!("{routine:?} diagonal slot {key}: {operation:?} {layout:?} {diag:?}");
            let table = match routine {
                Routine::Solve => <M as KernelTables<T>>::DIAGSM,
                Routine::Multiply => <M as KernelTables<T>>::DIAGMM,
            };
            table.get(key).copied().flatten()
        }
        MatrixType::General => None,
    };
    slot.ok_or(SpblasError::NotSupported("no kernel for this matrix type and configuration"))
}
