//! Triangular solve: `y := alpha * inv(op(A)) * x`
//!
//! The substitution order is fixed by op(A): it is lower triangular when A's
//! declared triangle is lower and A is not transposed (or upper and
//! transposed), giving forward substitution; otherwise backward.
//!
//! Entries are located in one of two ways:
//! - gather: when the locator can open the rows of op(A), each pivot row
//!   subtracts its already solved contributions and divides once
//! - scatter: otherwise the columns of op(A) are opened and each resolved
//!   pivot is pushed into the rows that are still pending
//!
//! Entries outside the declared strict triangle are skipped, so a
//! non-triangular matrix behaves as if it had been triangularized first.
//! Right-hand-side columns are independent and solved in parallel.

use log::{debug, trace};
use spblas_core::{FillMode, Operation, Result, Scalar, SpblasError};

use super::{apply_op, fill_of, is_unit, layout_of, operation_of, KernelArgs};
use crate::dense::{DenseMut, DenseRef};
use crate::locator::{Axis, EntryLocator, Lines};

pub(crate) fn trsm<T, M, const OP: u8, const LAYOUT: u8, const FILL: u8, const DIAG: u8>(
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
    let transposed = operation.is_transposed();
    let forward = (fill == FillMode::Lower) != transposed;
    // Lines of A along this axis are the rows of op(A)
    let row_axis = if transposed { Axis::Column } else { Axis::Row };

    let diag: Vec<T> = if unit {
        Vec::new()
    } else {
        args.matrix
            .diagonal()
            .into_iter()
            .map(|d| apply_op(operation, d))
            .collect()
    };

    let step = Substitution {
        operation,
        fill,
        unit,
        forward,
        n,
        alpha: args.alpha,
        diag: &diag,
        x: DenseRef::new(args.x, layout, args.ldx),
    };
    let y = DenseMut::new(args.y, layout, args.ldy, n, args.columns);

    if let Some(lines) = args.matrix.lines(row_axis) {
        debug!("trsm gather: op={operation:?} fill={fill:?} unit={unit} layout={layout:?} n={n}");
        y.for_each_column(|c, work| step.gather(&lines, row_axis, c, work));
        Ok(())
    } else if let Some(lines) = args.matrix.lines(row_axis.other()) {
        debug!("trsm scatter: op={operation:?} fill={fill:?} unit={unit} layout={layout:?} n={n}");
        y.for_each_column(|c, work| step.scatter(&lines, row_axis.other(), c, work));
        Ok(())
    } else {
        Err(SpblasError::NotSupported("matrix storage exposes neither rows nor columns"))
    }
}

/// Per-call constants of one substitution, shared by all column workers
struct Substitution<'a, T> {
    operation: Operation,
    fill: FillMode,
    unit: bool,
    forward: bool,
    n: usize,
    alpha: T,
    diag: &'a [T],
    x: DenseRef<'a, T>,
}

impl<T: Scalar> Substitution<'_, T> {
    /// Pivot visited at `step`
    #[inline(always)]
    fn pivot(&self, step: usize) -> usize {
        if self.forward {
            step
        } else {
            self.n - 1 - step
        }
    }

    #[inline(always)]
    fn finish(&self, i: usize, acc: T) -> T {
        if self.unit {
            acc
        } else {
            acc.divide(self.diag[i])
        }
    }

    /// Row-oriented substitution: `lines` are the rows of op(A)
    fn gather(&self, lines: &impl Lines<T>, axis: Axis, c: usize, work: &mut [T]) {
        trace!("trsm gather column {c}");
        for step in 0..self.n {
            let i = self.pivot(step);
            let mut acc = self.alpha.multiply(self.x.get(i, c));
            lines.for_each(i, |k, value| {
                let (r, col) = axis.coords(i, k);
                if self.fill.strictly_contains(r, col) {
                    acc = acc.multiply_sub(apply_op(self.operation, value), work[k]);
                }
            });
            work[i] = self.finish(i, acc);
        }
    }

    /// Column-oriented substitution: `lines` are the columns of op(A)
    fn scatter(&self, lines: &impl Lines<T>, axis: Axis, c: usize, work: &mut [T]) {
        trace!("trsm scatter column {c}");
        for (i, slot) in work.iter_mut().enumerate() {
            *slot = self.alpha.multiply(self.x.get(i, c));
        }
        for step in 0..self.n {
            let j = self.pivot(step);
            let solved = self.finish(j, work[j]);
            work[j] = solved;
            lines.for_each(j, |k, value| {
                let (r, col) = axis.coords(j, k);
                if self.fill.strictly_contains(r, col) {
                    work[k] = work[k].multiply_sub(apply_op(self.operation, value), solved);
                }
            });
        }
    }
}
