//! Triangular multiply: `y := alpha * op(tri(A)) * x + beta * y`
//!
//! `tri(A)` is the declared strict triangle of A plus its diagonal, which is
//! either the stored one or all ones. When `beta` is zero the previous
//! contents of `y` are never read.

use log::debug;
use spblas_core::{FillMode, Operation, Result, Scalar, SpblasError};

use super::{apply_op, fill_of, is_unit, layout_of, operation_of, KernelArgs};
use crate::dense::{DenseMut, DenseRef};
use crate::locator::{Axis, EntryLocator, Lines};

pub(crate) fn trmm<T, M, const OP: u8, const LAYOUT: u8, const FILL: u8, const DIAG: u8>(
    args: KernelArgs<'_, T, M>,
) -> Result<()>
where
    T: Scalar,
    M: EntryLocator<T>,
{
    let operation = operation_of(OP);
    let layout = layout_of(LAYOUT);
    let fill = fill_of(FILL);
    let unit = is_unit(DIAG);

    let n = args.matrix.order();
    let row_axis = if operation.is_transposed() { Axis::Column } else { Axis::Row };
    let diag: Vec<T> = if unit {
        vec![T::one(); n]
    } else {
        args.matrix
            .diagonal()
            .into_iter()
            .map(|d| apply_op(operation, d))
            .collect()
    };

    let product = Product {
        operation,
        fill,
        n,
        alpha: args.alpha,
        beta: args.beta,
        diag: &diag,
        x: DenseRef::new(args.x, layout, args.ldx),
    };
    let y = DenseMut::new(args.y, layout, args.ldy, n, args.columns);

    if let Some(lines) = args.matrix.lines(row_axis) {
        debug!("trmm by rows: op={operation:?} fill={fill:?} unit={unit} layout={layout:?} n={n}");
        y.for_each_column(|c, work| product.by_rows(&lines, row_axis, c, work));
        Ok(())
    } else if let Some(lines) = args.matrix.lines(row_axis.other()) {
        debug!("trmm by columns: op={operation:?} fill={fill:?} unit={unit} layout={layout:?} n={n}");
        y.for_each_column(|c, work| product.by_columns(&lines, row_axis.other(), c, work));
        Ok(())
    } else {
        Err(SpblasError::NotSupported("matrix storage exposes neither rows nor columns"))
    }
}

struct Product<'a, T> {
    operation: Operation,
    fill: FillMode,
    n: usize,
    alpha: T,
    beta: T,
    diag: &'a [T],
    x: DenseRef<'a, T>,
}

impl<T: Scalar> Product<'_, T> {
    #[inline(always)]
    fn combine(&self, sum: T, old: T) -> T {
        let scaled = self.alpha.multiply(sum);
        if self.beta == T::zero() {
            scaled
        } else {
            scaled.multiply_add(self.beta, old)
        }
    }

    fn by_rows(&self, lines: &impl Lines<T>, axis: Axis, c: usize, work: &mut [T]) {
        for (i, slot) in work.iter_mut().enumerate().take(self.n) {
            let mut sum = self.diag[i].multiply(self.x.get(i, c));
            lines.for_each(i, |k, value| {
                let (r, col) = axis.coords(i, k);
                if self.fill.strictly_contains(r, col) {
                    sum = sum.multiply_add(apply_op(self.operation, value), self.x.get(k, c));
                }
            });
            *slot = self.combine(sum, *slot);
        }
    }

    fn by_columns(&self, lines: &impl Lines<T>, axis: Axis, c: usize, work: &mut [T]) {
        let mut sums: Vec<T> = (0..self.n)
            .map(|i| self.diag[i].multiply(self.x.get(i, c)))
            .collect();
        for j in 0..self.n {
            let xj = self.x.get(j, c);
            lines.for_each(j, |k, value| {
                let (r, col) = axis.coords(j, k);
                if self.fill.strictly_contains(r, col) {
                    sums[k] = sums[k].multiply_add(apply_op(self.operation, value), xj);
                }
            });
        }
        for (slot, sum) in work.iter_mut().zip(sums) {
            *slot = self.combine(sum, *slot);
        }
    }
}
