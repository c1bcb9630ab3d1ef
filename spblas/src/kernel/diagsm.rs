//! Diagonal solve: `y := alpha * inv(D) * x`
//!
//! D is the stored diagonal of A; every other entry is ignored. The operation
//! does not change D, so each row is divided by its stored diagonal value
//! whether or not the call asks for a (conjugate) transpose. With a unit
//! diagonal this reduces to `y := alpha * x` and A is not consulted.

use log::debug;
use spblas_core::{Result, Scalar};

use super::{is_unit, layout_of, KernelArgs};
use crate::dense::{DenseMut, DenseRef};
use crate::locator::EntryLocator;

pub(crate) fn diagsm<T, M, const LAYOUT: u8, const DIAG: u8>(args: KernelArgs<'_, T, M>) -> Result<()>
where
    T: Scalar,
    M: EntryLocator<T>,
{
    let layout = layout_of(LAYOUT);
    let n = args.matrix.order();
    let alpha = args.alpha;
    let x = DenseRef::new(args.x, layout, args.ldx);
    let y = DenseMut::new(args.y, layout, args.ldy, n, args.columns);

    if is_unit(DIAG) {
        debug!("diagsm unit: layout={layout:?} n={n}");
        y.for_each_cell(|r, c, _| alpha.multiply(x.get(r, c)));
    } else {
        let operation = args.operation;
        debug!("diagsm: op={operation:?} layout={layout:?} n={n}");
        let diag = args.matrix.diagonal();
        y.for_each_cell(|r, c, _| alpha.multiply(x.get(r, c)).divide(diag[r]));
    }
    Ok(())
}
