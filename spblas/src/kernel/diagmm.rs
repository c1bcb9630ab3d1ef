//! Diagonal multiply: `y := alpha * D * x + beta * y`
//!
//! The operation leaves the stored diagonal as is, matching the diagonal
//! solve.

use log::debug;
use spblas_core::{Result, Scalar};

use super::{is_unit, layout_of, KernelArgs};
use crate::dense::{DenseMut, DenseRef};
use crate::locator::EntryLocator;

pub(crate) fn diagmm<T, M, const LAYOUT: u8, const DIAG: u8>(args: KernelArgs<'_, T, M>) -> Result<()>
where
    T: Scalar,
    M: EntryLocator<T>,
{
    let layout = layout_of(LAYOUT);
    let n = args.matrix.order();
    let (alpha, beta) = (args.alpha, args.beta);
    let operation = args.operation;
    debug!("diagmm: op={operation:?} layout={layout:?} unit={} n={n}", is_unit(DIAG));

    let diag: Vec<T> = if is_unit(DIAG) {
        vec![T::one(); n]
    } else {
        args.matrix.diagonal()
    };
    let x = DenseRef::new(args.x, layout, args.ldx);
    let y = DenseMut::new(args.y, layout, args.ldy, n, args.columns);

    y.for_each_cell(|r, c, old| {
        let scaled = alpha.multiply(diag[r].multiply(x.get(r, c)));
        if beta == T::zero() {
            scaled
        } else {
            scaled.multiply_add(beta, old)
        }
    });
    Ok(())
}
