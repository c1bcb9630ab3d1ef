//! Call surface
//!
//! Every entry point validates its arguments in a fixed order before any
//! kernel runs, so a rejected call never touches `y`:
//!
//! 1. the handle must hold storage (`NotInitialized`)
//! 2. `x` and `y` must be non-empty whenever the operand has elements
//!    (`NotInitialized`)
//! 3. the handle's element type must be `T` (`InvalidValue`)
//! 4. conjugate transpose needs a complex `T` (`InvalidValue`)
//! 5. triangular and diagonal semantics need a square matrix (`InvalidValue`)
//! 6. an empty problem succeeds without further checks
//! 7. `x` and `y` must span `n × columns` with their leading dimensions
//!    (`InvalidValue`)
//!
//! The remaining failure, no kernel for the configuration, surfaces from
//! dispatch as `NotSupported`.

use log::debug;
use spblas_core::{
    validate_dense_extent, DiagType, Layout, MatrixDescriptor, MatrixHandle, MatrixStorage,
    MatrixType, Operation, Result, Scalar, SparseMatrix, SpblasError,
};

use crate::dispatch::{dispatch, Routine};
use crate::executor::Executor;
use crate::kernel::KernelArgs;

/// Dense operands of one call
struct Operands<'a, T> {
    layout: Layout,
    x: &'a [T],
    columns: usize,
    ldx: usize,
    y: &'a mut [T],
    ldy: usize,
}

impl Executor {
    /// `y := alpha * inv(op(A)) * x` for the triangular or diagonal `descriptor`
    ///
    /// `x` and `y` are `n × columns` dense operands in `layout` with leading
    /// dimensions `ldx` and `ldy`. A general descriptor is not supported.
    #[allow(clippy::too_many_arguments)]
    pub fn solve<T: Scalar>(
        &self,
        operation: Operation,
        alpha: T,
        matrix: &MatrixHandle,
        descriptor: MatrixDescriptor,
        layout: Layout,
        x: &[T],
        columns: usize,
        ldx: usize,
        y: &mut [T],
        ldy: usize,
    ) -> Result<()> {
        let operands = Operands {
            layout,
            x,
            columns,
            ldx,
            y,
            ldy,
        };
        self.execute(Routine::Solve, operation, alpha, T::zero(), matrix, descriptor, operands)
    }

    /// Triangular solve using the fill mode and diagonal kind of `descriptor`
    #[allow(clippy::too_many_arguments)]
    pub fn solve_triangular<T: Scalar>(
        &self,
        operation: Operation,
        alpha: T,
        matrix: &MatrixHandle,
        descriptor: MatrixDescriptor,
        layout: Layout,
        x: &[T],
        columns: usize,
        ldx: usize,
        y: &mut [T],
        ldy: usize,
    ) -> Result<()> {
        let descriptor = MatrixDescriptor::triangular(descriptor.fill_mode, descriptor.diag);
        self.solve(operation, alpha, matrix, descriptor, layout, x, columns, ldx, y, ldy)
    }

    /// `y := alpha * inv(op(D)) * x` where D is the diagonal of the matrix
    #[allow(clippy::too_many_arguments)]
    pub fn solve_diagonal<T: Scalar>(
        &self,
        operation: Operation,
        alpha: T,
        matrix: &MatrixHandle,
        diag: DiagType,
        layout: Layout,
        x: &[T],
        columns: usize,
        ldx: usize,
        y: &mut [T],
        ldy: usize,
    ) -> Result<()> {
        let descriptor = MatrixDescriptor::diagonal(diag);
        self.solve(operation, alpha, matrix, descriptor, layout, x, columns, ldx, y, ldy)
    }

    /// `y := alpha * op(tri(A)) * x + beta * y`
    ///
    /// `tri(A)` is the strict triangle selected by `descriptor` plus the stored
    /// or unit diagonal. `y` is not read when `beta` is zero.
    #[allow(clippy::too_many_arguments)]
    pub fn multiply_triangular<T: Scalar>(
        &self,
        operation: Operation,
        alpha: T,
        matrix: &MatrixHandle,
        descriptor: MatrixDescriptor,
        layout: Layout,
        x: &[T],
        columns: usize,
        ldx: usize,
        beta: T,
        y: &mut [T],
        ldy: usize,
    ) -> Result<()> {
        let descriptor = MatrixDescriptor::triangular(descriptor.fill_mode, descriptor.diag);
        let operands = Operands {
            layout,
            x,
            columns,
            ldx,
            y,
            ldy,
        };
        self.execute(Routine::Multiply, operation, alpha, beta, matrix, descriptor, operands)
    }

    /// `y := alpha * op(D) * x + beta * y` where D is the diagonal of the matrix
    #[allow(clippy::too_many_arguments)]
    pub fn multiply_diagonal<T: Scalar>(
        &self,
        operation: Operation,
        alpha: T,
        matrix: &MatrixHandle,
        diag: DiagType,
        layout: Layout,
        x: &[T],
        columns: usize,
        ldx: usize,
        beta: T,
        y: &mut [T],
        ldy: usize,
    ) -> Result<()> {
        let operands = Operands {
            layout,
            x,
            columns,
            ldx,
            y,
            ldy,
        };
        let descriptor = MatrixDescriptor::diagonal(diag);
        self.execute(Routine::Multiply, operation, alpha, beta, matrix, descriptor, operands)
    }

    #[allow(clippy::too_many_arguments)]
    fn execute<T: Scalar>(
        &self,
        routine: Routine,
        operation: Operation,
        alpha: T,
        beta: T,
        matrix: &MatrixHandle,
        descriptor: MatrixDescriptor,
        operands: Operands<'_, T>,
    ) -> Result<()> {
        let storage = validate(operation, matrix, descriptor, &operands).map_err(|err| {
            debug!("rejected {routine:?} call: {err}");
            err
        })?;
        let Some(storage) = storage else {
            return Ok(());
        };

        let Operands {
            layout,
            x,
            columns,
            ldx,
            y,
            ldy,
        } = operands;
        let args = KernelArgs {
            matrix: storage,
            operation,
            alpha,
            beta,
            x,
            columns,
            ldx,
            y,
            ldy,
        };
        debug!(
            "{routine:?} on {} {}x{} with {columns} column(s), {} threads",
            storage.format(),
            storage.dimensions().0,
            storage.dimensions().1,
            self.threads()
        );
        self.install(|| dispatch(routine, descriptor, layout, args))
    }
}

/// Check a call; `Ok(None)` means there is nothing to compute
fn validate<'m, T: Scalar>(
    operation: Operation,
    matrix: &'m MatrixHandle,
    descriptor: MatrixDescriptor,
    operands: &Operands<'_, T>,
) -> Result<Option<&'m MatrixStorage<T>>> {
    let dynamic = matrix.matrix()?;
    let (rows, cols) = dynamic.dimensions();

    let has_elements = rows > 0 && operands.columns > 0;
    if has_elements && (operands.x.is_empty() || operands.y.is_empty()) {
        return Err(SpblasError::NotInitialized);
    }

    let storage = dynamic
        .downcast::<T>()
        .ok_or(SpblasError::InvalidValue("matrix element type does not match the call"))?;

    if operation == Operation::ConjugateTranspose && !T::IS_COMPLEX {
        return Err(SpblasError::InvalidValue("conjugate transpose requires a complex element type"));
    }

    let square_only = matches!(descriptor.matrix_type, MatrixType::Triangular | MatrixType::Diagonal);
    if square_only && rows != cols {
        return Err(SpblasError::InvalidValue("triangular and diagonal semantics need a square matrix"));
    }

    if rows == 0 || operands.columns == 0 {
        return Ok(None);
    }

    let (layout, columns) = (operands.layout, operands.columns);
    validate_dense_extent(operands.x.len(), layout, cols, columns, operands.ldx)?;
    validate_dense_extent(operands.y.len(), layout, rows, columns, operands.ldy)?;
    Ok(Some(storage))
}

/// [`Executor::solve_triangular`] on rayon's global pool
#[allow(clippy::too_many_arguments)]
pub fn solve_triangular<T: Scalar>(
    operation: Operation,
    alpha: T,
    matrix: &MatrixHandle,
    descriptor: MatrixDescriptor,
    layout: Layout,
    x: &[T],
    columns: usize,
    ldx: usize,
    y: &mut [T],
    ldy: usize,
) -> Result<()> {
    Executor::global().solve_triangular(
        operation, alpha, matrix, descriptor, layout, x, columns, ldx, y, ldy,
    )
}

/// [`Executor::solve_diagonal`] on rayon's global pool
#[allow(clippy::too_many_arguments)]
pub fn solve_diagonal<T: Scalar>(
    operation: Operation,
    alpha: T,
    matrix: &MatrixHandle,
    diag: DiagType,
    layout: Layout,
    x: &[T],
    columns: usize,
    ldx: usize,
    y: &mut [T],
    ldy: usize,
) -> Result<()> {
    Executor::global().solve_diagonal(operation, alpha, matrix, diag, layout, x, columns, ldx, y, ldy)
}

/// [`Executor::multiply_triangular`] on rayon's global pool
#[allow(clippy::too_many_arguments)]
pub fn multiply_triangular<T: Scalar>(
    operation: Operation,
    alpha: T,
    matrix: &MatrixHandle,
    descriptor: MatrixDescriptor,
    layout: Layout,
    x: &[T],
    columns: usize,
    ldx: usize,
    beta: T,
    y: &mut [T],
    ldy: usize,
) -> Result<()> {
    Executor::global().multiply_triangular(
        operation, alpha, matrix, descriptor, layout, x, columns, ldx, beta, y, ldy,
    )
}

/// [`Executor::multiply_diagonal`] on rayon's global pool
#[allow(clippy::too_many_arguments)]
pub fn multiply_diagonal<T: Scalar>(
    operation: Operation,
    alpha: T,
    matrix: &MatrixHandle,
    diag: DiagType,
    layout: Layout,
    x: &[T],
    columns: usize,
    ldx: usize,
    beta: T,
    y: &mut [T],
    ldy: usize,
) -> Result<()> {
    Executor::global().multiply_diagonal(
        operation, alpha, matrix, diag, layout, x, columns, ldx, beta, y, ldy,
    )
}
