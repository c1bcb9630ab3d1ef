//! Solve properties checked across storage formats, layouts and executors.
//!
//! Every matrix is generated once as a list of triplets and then packed into
//! each storage format, so any disagreement between formats points at an
//! entry locator rather than at the test data.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spblas::{
    multiply_diagonal, multiply_triangular, solve_diagonal, solve_triangular, BsrMatrix,
    Complex64, CooMatrix, CscMatrix, CsrMatrix, DiaMatrix, DiagType, Executor, FillMode,
    GebsrMatrix, IndexBase, Layout, MatrixDescriptor, MatrixHandle, MatrixStorage, Operation,
    Scalar, SkyMatrix, SpblasError, Status,
};

/// Tolerance for comparing two solves of the same well-conditioned system
const TOL: f64 = 1e-10;

type Triplet<T> = (usize, usize, T);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Csr,
    Csc,
    Coo,
    Bsr,
    Dia,
    Sky,
}

const FORMATS: [Format; 6] = [
    Format::Csr,
    Format::Csc,
    Format::Coo,
    Format::Bsr,
    Format::Dia,
    Format::Sky,
];

const LAYOUTS: [Layout; 2] = [Layout::RowMajor, Layout::ColumnMajor];

/// Random lower-triangular matrix whose rows are diagonally dominant
fn random_lower(n: usize, density: f64, seed: u64) -> Vec<Triplet<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut entries = Vec::new();
    for r in 0..n {
        let mut off_diagonal = 0.0;
        for c in 0..r {
            if rng.gen_bool(density) {
                let v: f64 = rng.gen_range(-1.0..1.0);
                off_diagonal += v.abs();
                entries.push((r, c, v));
            }
        }
        entries.push((r, r, 1.0 + off_diagonal + rng.gen_range(0.0..1.0)));
    }
    entries
}

fn random_complex_lower(n: usize, seed: u64) -> Vec<Triplet<Complex64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut entries = Vec::new();
    for r in 0..n {
        let mut off_diagonal = 0.0;
        for c in 0..r {
            if rng.gen_bool(0.3) {
                let v = Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
                off_diagonal += v.norm();
                entries.push((r, c, v));
            }
        }
        let diag = Complex64::new(1.0 + off_diagonal, rng.gen_range(-1.0..1.0));
        entries.push((r, r, diag));
    }
    entries
}

fn random_dense(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

fn transpose<T: Copy>(entries: &[Triplet<T>]) -> Vec<Triplet<T>> {
    entries.iter().map(|&(r, c, v)| (c, r, v)).collect()
}

/// Leading dimension of a tight `n × columns` operand
fn tight_ld(layout: Layout, n: usize, columns: usize) -> usize {
    match layout {
        Layout::RowMajor => columns.max(1),
        Layout::ColumnMajor => n.max(1),
    }
}

fn offsets(n: usize, keys: impl Iterator<Item = usize>) -> Vec<usize> {
    let mut offsets = vec![0; n + 1];
    for key in keys {
        offsets[key + 1] += 1;
    }
    for i in 0..n {
        offsets[i + 1] += offsets[i];
    }
    offsets
}

/// Pack `entries` of an `n × n` matrix into `format`
///
/// Skyline storage holds the `fill` triangle; BSR uses 2 × 2 blocks and
/// needs an even `n`.
fn pack<T: Scalar>(format: Format, n: usize, entries: &[Triplet<T>], fill: FillMode) -> MatrixStorage<T> {
    match format {
        Format::Csr => {
            let mut sorted = entries.to_vec();
            sorted.sort_by_key(|&(r, c, _)| (r, c));
            let offsets = offsets(n, sorted.iter().map(|e| e.0));
            let cols = sorted.iter().map(|e| e.1).collect();
            let values = sorted.iter().map(|e| e.2).collect();
            CsrMatrix::from_row_offsets(n, n, &offsets, cols, values).unwrap().into()
        }
        Format::Csc => {
            let mut sorted = entries.to_vec();
            sorted.sort_by_key(|&(r, c, _)| (c, r));
            let offsets = offsets(n, sorted.iter().map(|e| e.1));
            let rows = sorted.iter().map(|e| e.0).collect();
            let values = sorted.iter().map(|e| e.2).collect();
            CscMatrix::from_col_offsets(n, n, &offsets, rows, values).unwrap().into()
        }
        Format::Coo => CooMatrix::from_triplets(n, n, entries).unwrap().into(),
        Format::Dia => {
            let mut distance: Vec<isize> = entries.iter().map(|&(r, c, _)| c as isize - r as isize).collect();
            distance.sort_unstable();
            distance.dedup();
            let mut values = vec![T::zero(); distance.len() * n];
            for &(r, c, v) in entries {
                let d = distance.binary_search(&(c as isize - r as isize)).unwrap();
                values[d * n + r] = v;
            }
            DiaMatrix::new(n, n, distance, values).unwrap().into()
        }
        Format::Sky => {
            let lookup: BTreeMap<(usize, usize), T> = entries
                .iter()
                .map(|&(r, c, v)| match fill {
                    FillMode::Lower => ((r, c), v),
                    FillMode::Upper => ((c, r), v),
                })
                .collect();
            let mut pointers = vec![0];
            let mut values = Vec::new();
            for k in 0..n {
                let first = lookup.range((k, 0)..=(k, k)).next().map_or(k, |(&(_, i), _)| i);
                for i in first..=k {
                    values.push(lookup.get(&(k, i)).copied().unwrap_or_else(T::zero));
                }
                pointers.push(values.len());
            }
            SkyMatrix::new(IndexBase::Zero, n, fill, pointers, values).unwrap().into()
        }
        Format::Bsr => {
            assert_eq!(n % 2, 0);
            let mut blocks: BTreeMap<(usize, usize), [T; 4]> = BTreeMap::new();
            for &(r, c, v) in entries {
                let block = blocks.entry((r / 2, c / 2)).or_insert([T::zero(); 4]);
                block[(r % 2) * 2 + c % 2] = v;
            }
            let nb = n / 2;
            let offsets = offsets(nb, blocks.keys().map(|&(br, _)| br));
            let col_indx = blocks.keys().map(|&(_, bc)| bc).collect();
            let values = blocks.values().flatten().copied().collect();
            BsrMatrix::new(
                IndexBase::Zero,
                Layout::RowMajor,
                2,
                nb,
                nb,
                offsets[..nb].to_vec(),
                offsets[1..].to_vec(),
                col_indx,
                values,
            )
            .unwrap()
            .into()
        }
    }
}

fn handle<T: Scalar>(format: Format, n: usize, entries: &[Triplet<T>], fill: FillMode) -> MatrixHandle {
    MatrixHandle::new(IndexBase::Zero, pack(format, n, entries, fill))
}

#[allow(clippy::too_many_arguments)]
fn solve<T: Scalar>(
    executor: &Executor,
    matrix: &MatrixHandle,
    operation: Operation,
    descr: MatrixDescriptor,
    layout: Layout,
    x: &[T],
    columns: usize,
    ld: usize,
) -> Vec<T> {
    let mut y = vec![T::zero(); x.len()];
    executor
        .solve_triangular(operation, T::one(), matrix, descr, layout, x, columns, ld, &mut y, ld)
        .unwrap();
    y
}

fn assert_close<T: Scalar>(actual: &[T], expected: &[T], tol: f64, context: &str) {
    assert_eq!(actual.len(), expected.len(), "{context}");
    for (i, (&a, &e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).magnitude() <= tol * (1.0 + e.magnitude()),
            "{context}: element {i} is {a:?}, expected {e:?}"
        );
    }
}

#[test]
fn test_concrete_lower_csr_scenario() {
    let entries = [(0, 0, 2.0), (1, 0, 1.0), (1, 1, 3.0), (2, 2, 4.0)];
    let matrix = handle(Format::Csr, 3, &entries, FillMode::Lower);
    let descr = MatrixDescriptor::triangular(FillMode::Lower, DiagType::NonUnit);

    let x = [1.0, 1.0, 1.0];
    let mut y = [0.0; 3];
    let result = solve_triangular(
        Operation::NonTranspose,
        1.0,
        &matrix,
        descr,
        Layout::ColumnMajor,
        &x,
        1,
        3,
        &mut y,
        3,
    );

    assert_eq!(Status::from(&result), Status::Success);
    assert_close(&y, &[0.5, (1.0 - 0.5) / 3.0, 0.25], 1e-15, "concrete scenario");
}

#[test]
fn test_residual_of_lower_csr_solve() {
    let n = 50;
    let columns = 3;
    let entries = random_lower(n, 0.2, 1);
    let matrix = handle(Format::Csr, n, &entries, FillMode::Lower);
    let descr = MatrixDescriptor::triangular(FillMode::Lower, DiagType::NonUnit);

    for layout in LAYOUTS {
        let ld = tight_ld(layout, n, columns);
        let x = random_dense(n * columns, 2);
        let y = solve(&Executor::global(), &matrix, Operation::NonTranspose, descr, layout, &x, columns, ld);

        for c in 0..columns {
            let mut ay = vec![0.0; n];
            for &(r, k, v) in &entries {
                ay[r] += v * y[layout.index(k, c, ld)];
            }
            let xc: Vec<f64> = (0..n).map(|r| x[layout.index(r, c, ld)]).collect();
            assert_close(&ay, &xc, 1e-12, &format!("{layout:?} column {c}"));
        }
    }
}

#[test]
fn test_formats_agree() {
    let n = 12;
    let columns = 2;
    let lower = random_lower(n, 0.4, 3);
    let upper = transpose(&lower);

    for (fill, entries) in [(FillMode::Lower, &lower), (FillMode::Upper, &upper)] {
        let descr = MatrixDescriptor::triangular(fill, DiagType::NonUnit);
        let reference = handle(Format::Csr, n, entries, fill);
        for operation in [Operation::NonTranspose, Operation::Transpose] {
            for layout in LAYOUTS {
                let ld = tight_ld(layout, n, columns);
                let x = random_dense(n * columns, 4);
                let expected = solve(&Executor::global(), &reference, operation, descr, layout, &x, columns, ld);
                for format in FORMATS {
                    let matrix = handle(format, n, entries, fill);
                    let y = solve(&Executor::global(), &matrix, operation, descr, layout, &x, columns, ld);
                    assert_close(&y, &expected, TOL, &format!("{format:?} {fill:?} {operation:?} {layout:?}"));
                }
            }
        }
    }
}

#[test]
fn test_entries_outside_fill_region_are_ignored() {
    let n = 10;
    let lower = random_lower(n, 0.5, 5);
    let mut noisy = lower.clone();
    noisy.extend((0..n - 1).map(|i| (i, i + 1, 100.0)));
    let descr = MatrixDescriptor::triangular(FillMode::Lower, DiagType::NonUnit);
    let x = random_dense(n, 6);

    let clean = handle(Format::Csr, n, &lower, FillMode::Lower);
    let expected = solve(&Executor::global(), &clean, Operation::Transpose, descr, Layout::ColumnMajor, &x, 1, n);

    for format in [Format::Csr, Format::Csc, Format::Coo, Format::Bsr, Format::Dia] {
        let matrix = handle(format, n, &noisy, FillMode::Lower);
        let y = solve(&Executor::global(), &matrix, Operation::Transpose, descr, Layout::ColumnMajor, &x, 1, n);
        assert_close(&y, &expected, TOL, &format!("{format:?}"));
    }
}

#[test]
fn test_unit_diagonal_equivalence() {
    let n = 8;
    let entries: Vec<_> = random_lower(n, 0.5, 7)
        .into_iter()
        .map(|(r, c, v)| if r == c { (r, c, 1.0) } else { (r, c, v) })
        .collect();
    let x = random_dense(n * 3, 8);

    for format in FORMATS {
        let matrix = handle(format, n, &entries, FillMode::Lower);
        for layout in LAYOUTS {
            let ld = tight_ld(layout, n, 3);
            let unit = MatrixDescriptor::triangular(FillMode::Lower, DiagType::Unit);
            let non_unit = MatrixDescriptor::triangular(FillMode::Lower, DiagType::NonUnit);
            let a = solve(&Executor::global(), &matrix, Operation::NonTranspose, unit, layout, &x, 3, ld);
            let b = solve(&Executor::global(), &matrix, Operation::NonTranspose, non_unit, layout, &x, 3, ld);
            assert_close(&a, &b, TOL, &format!("{format:?} {layout:?}"));
        }
    }
}

#[test]
fn test_unit_diagonal_needs_no_stored_diagonal() {
    let n = 8;
    let with_ones: Vec<_> = random_lower(n, 0.5, 9)
        .into_iter()
        .map(|(r, c, v)| if r == c { (r, c, 1.0) } else { (r, c, v) })
        .collect();
    let strict: Vec<_> = with_ones.iter().copied().filter(|&(r, c, _)| r != c).collect();
    let x = random_dense(n, 10);
    let unit = MatrixDescriptor::triangular(FillMode::Lower, DiagType::Unit);

    let reference = handle(Format::Csr, n, &with_ones, FillMode::Lower);
    let expected = solve(&Executor::global(), &reference, Operation::Transpose, unit, Layout::RowMajor, &x, 1, 1);

    for format in [Format::Csr, Format::Csc, Format::Coo, Format::Dia] {
        let matrix = handle(format, n, &strict, FillMode::Lower);
        let y = solve(&Executor::global(), &matrix, Operation::Transpose, unit, Layout::RowMajor, &x, 1, 1);
        assert_close(&y, &expected, TOL, &format!("{format:?}"));
    }
}

#[test]
fn test_diagonal_solve_matches_pure_diagonal_triangular_solve() {
    let n = 10;
    let columns = 2;
    let entries = random_lower(n, 0.5, 11);
    let diagonal_only: Vec<_> = entries.iter().copied().filter(|&(r, c, _)| r == c).collect();
    let x = random_dense(n * columns, 12);

    for diag in [DiagType::NonUnit, DiagType::Unit] {
        let descr = MatrixDescriptor::triangular(FillMode::Upper, diag);
        for format in FORMATS {
            let full = handle(format, n, &entries, FillMode::Lower);
            let pure = handle(format, n, &diagonal_only, FillMode::Upper);
            for layout in LAYOUTS {
                let ld = tight_ld(layout, n, columns);
                let mut y = vec![0.0; x.len()];
                solve_diagonal(Operation::NonTranspose, 1.0, &full, diag, layout, &x, columns, ld, &mut y, ld)
                    .unwrap();
                let expected = solve(&Executor::global(), &pure, Operation::NonTranspose, descr, layout, &x, columns, ld);
                assert_close(&y, &expected, TOL, &format!("{format:?} {diag:?} {layout:?}"));
            }
        }
    }
}

#[test]
fn test_columns_are_independent() {
    let n = 16;
    let columns = 4;
    let entries = random_lower(n, 0.3, 13);
    let descr = MatrixDescriptor::triangular(FillMode::Lower, DiagType::NonUnit);

    for format in FORMATS {
        let matrix = handle(format, n, &entries, FillMode::Lower);
        for layout in LAYOUTS {
            let ld = tight_ld(layout, n, columns);
            let x = random_dense(n * columns, 14);
            let all = solve(&Executor::global(), &matrix, Operation::Transpose, descr, layout, &x, columns, ld);

            for c in 0..columns {
                let xc: Vec<f64> = (0..n).map(|r| x[layout.index(r, c, ld)]).collect();
                let single_ld = tight_ld(layout, n, 1);
                let single =
                    solve(&Executor::global(), &matrix, Operation::Transpose, descr, layout, &xc, 1, single_ld);
                let from_all: Vec<f64> = (0..n).map(|r| all[layout.index(r, c, ld)]).collect();
                assert_eq!(single, from_all, "{format:?} {layout:?} column {c}");
            }
        }
    }
}

#[test]
fn test_sequential_executor_matches_parallel() {
    let n = 200;
    let columns = 16;
    let entries = random_lower(n, 0.05, 15);
    let descr = MatrixDescriptor::triangular(FillMode::Lower, DiagType::NonUnit);
    let sequential = Executor::sequential().unwrap();
    let parallel = Executor::with_threads(4).unwrap();

    for format in [Format::Coo, Format::Csc, Format::Sky] {
        let matrix = handle(format, n, &entries, FillMode::Lower);
        for layout in LAYOUTS {
            let ld = tight_ld(layout, n, columns);
            let x = random_dense(n * columns, 16);
            let a = solve(&sequential, &matrix, Operation::NonTranspose, descr, layout, &x, columns, ld);
            let b = solve(&parallel, &matrix, Operation::NonTranspose, descr, layout, &x, columns, ld);
            assert_eq!(a, b, "{format:?} {layout:?}");
        }
    }
}

#[test]
fn test_leading_dimension_padding_is_untouched() {
    let n = 6;
    let columns = 3;
    let entries = random_lower(n, 0.5, 17);
    let matrix = handle(Format::Coo, n, &entries, FillMode::Lower);
    let descr = MatrixDescriptor::triangular(FillMode::Lower, DiagType::NonUnit);

    for layout in LAYOUTS {
        let tight = tight_ld(layout, n, columns);
        let padded = tight + 2;
        let lines = match layout {
            Layout::RowMajor => n,
            Layout::ColumnMajor => columns,
        };
        let x_tight = random_dense(n * columns, 18);
        let mut x = vec![f64::NAN; lines * padded];
        for r in 0..n {
            for c in 0..columns {
                x[layout.index(r, c, padded)] = x_tight[layout.index(r, c, tight)];
            }
        }

        let expected = solve(&Executor::global(), &matrix, Operation::NonTranspose, descr, layout, &x_tight, columns, tight);
        let mut y = vec![-7.0; lines * padded];
        solve_triangular(Operation::NonTranspose, 1.0, &matrix, descr, layout, &x, columns, padded, &mut y, padded)
            .unwrap();

        for line in 0..lines {
            for k in 0..padded {
                let (r, c) = match layout {
                    Layout::RowMajor => (line, k),
                    Layout::ColumnMajor => (k, line),
                };
                let value = y[layout.index(r, c, padded)];
                if r < n && c < columns {
                    assert!((value - expected[layout.index(r, c, tight)]).abs() < TOL);
                } else {
                    assert_eq!(value, -7.0, "{layout:?} padding at ({r}, {c})");
                }
            }
        }
    }
}

#[test]
fn test_complex_conjugate_transpose_residual() {
    let n = 20;
    let entries = random_complex_lower(n, 19);
    let descr = MatrixDescriptor::triangular(FillMode::Lower, DiagType::NonUnit);
    let mut rng = StdRng::seed_from_u64(20);
    let x: Vec<Complex64> = (0..n)
        .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect();
    let one = Complex64::new(1.0, 0.0);
    let zero = Complex64::new(0.0, 0.0);

    for format in [Format::Csr, Format::Csc, Format::Coo, Format::Sky] {
        let matrix = handle(format, n, &entries, FillMode::Lower);
        let y = solve(&Executor::global(), &matrix, Operation::ConjugateTranspose, descr, Layout::ColumnMajor, &x, 1, n);

        let mut back = vec![zero; n];
        multiply_triangular(
            Operation::ConjugateTranspose,
            one,
            &matrix,
            descr,
            Layout::ColumnMajor,
            &y,
            1,
            n,
            zero,
            &mut back,
            n,
        )
        .unwrap();
        assert_close(&back, &x, 1e-12, &format!("{format:?}"));

        // Aᴴ differs from Aᵀ on a complex matrix
        let plain = solve(&Executor::global(), &matrix, Operation::Transpose, descr, Layout::ColumnMajor, &x, 1, n);
        assert!(plain.iter().zip(&y).any(|(&a, &b)| (a - b).norm() > 1e-6));
    }
}

#[test]
fn test_multiply_diagonal_accumulates_into_y() {
    let entries = [(0, 0, 2.0), (1, 0, 5.0), (1, 1, -1.0)];
    let matrix = handle(Format::Csc, 2, &entries, FillMode::Lower);
    let x = [1.0, 2.0];
    let mut y = [10.0, 10.0];
    multiply_diagonal(Operation::NonTranspose, 3.0, &matrix, DiagType::NonUnit, Layout::RowMajor, &x, 1, 1, 1.0, &mut y, 1)
        .unwrap();
    assert_eq!(y, [16.0, 4.0]);
}

#[test]
fn test_alpha_scales_the_solution() {
    let n = 8;
    let columns = 3;
    let alpha = 2.5;
    let lower = random_lower(n, 0.4, 21);
    let x = random_dense(n * columns, 22);

    for (fill, entries) in [(FillMode::Lower, lower.clone()), (FillMode::Upper, transpose(&lower))] {
        let descr = MatrixDescriptor::triangular(fill, DiagType::NonUnit);
        for format in FORMATS {
            let matrix = handle(format, n, &entries, fill);
            for layout in LAYOUTS {
                for operation in [Operation::NonTranspose, Operation::Transpose] {
                    let ld = tight_ld(layout, n, columns);
                    let unscaled = solve(&Executor::global(), &matrix, operation, descr, layout, &x, columns, ld);
                    let expected: Vec<f64> = unscaled.iter().map(|v| alpha * v).collect();

                    let mut y = vec![0.0; x.len()];
                    solve_triangular(operation, alpha, &matrix, descr, layout, &x, columns, ld, &mut y, ld).unwrap();
                    assert_close(&y, &expected, TOL, &format!("{format:?} {fill:?} {layout:?} {operation:?}"));
                }
            }
        }
    }
}

#[test]
fn test_complex_diagonal_solve_ignores_conjugation() {
    let i = Complex64::new(0.0, 1.0);
    let one = Complex64::new(1.0, 0.0);
    let zero = Complex64::new(0.0, 0.0);
    let matrix = handle(Format::Csr, 2, &[(0, 0, i), (1, 1, Complex64::new(2.0, 0.0))], FillMode::Lower);
    let x = [one, Complex64::new(4.0, 2.0)];

    for operation in [Operation::NonTranspose, Operation::ConjugateTranspose] {
        let mut y = [zero; 2];
        solve_diagonal(operation, one, &matrix, DiagType::NonUnit, Layout::ColumnMajor, &x, 1, 2, &mut y, 2)
            .unwrap();
        // 1 / i = -i
        assert_eq!(y, [Complex64::new(0.0, -1.0), Complex64::new(2.0, 1.0)], "{operation:?}");

        let mut back = [zero; 2];
        multiply_diagonal(operation, one, &matrix, DiagType::NonUnit, Layout::ColumnMajor, &y, 1, 2, zero, &mut back, 2)
            .unwrap();
        assert_eq!(back, x, "{operation:?}");
    }
}

mod boundaries {
    use super::*;

    fn lower() -> MatrixHandle {
        handle(Format::Csr, 2, &[(0, 0, 1.0), (1, 0, 2.0), (1, 1, 4.0)], FillMode::Lower)
    }

    fn descr() -> MatrixDescriptor {
        MatrixDescriptor::triangular(FillMode::Lower, DiagType::NonUnit)
    }

    #[test]
    fn test_empty_matrix_is_a_no_op() {
        let matrix = MatrixHandle::new(
            IndexBase::Zero,
            CsrMatrix::<f64>::from_row_offsets(0, 0, &[0], vec![], vec![]).unwrap(),
        );
        let mut y: [f64; 0] = [];
        let result = solve_triangular(Operation::NonTranspose, 1.0, &matrix, descr(), Layout::RowMajor, &[], 3, 3, &mut y, 3);
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_zero_columns_is_a_no_op() {
        let x = [1.0, 1.0];
        let mut y = [5.0, 5.0];
        let result = solve_triangular(Operation::NonTranspose, 1.0, &lower(), descr(), Layout::ColumnMajor, &x, 0, 2, &mut y, 2);
        assert_eq!(result, Ok(()));
        assert_eq!(y, [5.0, 5.0]);
    }

    #[test]
    fn test_non_square_is_invalid() {
        let rect = CooMatrix::from_triplets(2, 3, &[(0, 0, 1.0), (1, 1, 1.0)]).unwrap();
        let matrix = MatrixHandle::new(IndexBase::Zero, rect);
        let x = [1.0; 6];
        let mut y = [5.0; 6];
        let result = solve_diagonal(Operation::NonTranspose, 1.0, &matrix, DiagType::NonUnit, Layout::ColumnMajor, &x, 2, 3, &mut y, 3);
        assert!(matches!(result, Err(SpblasError::InvalidValue(_))));
        assert_eq!(y, [5.0; 6]);
    }

    #[test]
    fn test_non_square_triangular_is_invalid() {
        let rect = CsrMatrix::from_row_offsets(2, 3, &[0, 1, 3], vec![0, 0, 1], vec![1.0, 2.0, 4.0]).unwrap();
        let matrix = MatrixHandle::new(IndexBase::Zero, rect);
        let x = [1.0; 6];
        let mut y = [5.0; 6];
        let result = solve_triangular(Operation::NonTranspose, 1.0, &matrix, descr(), Layout::ColumnMajor, &x, 2, 3, &mut y, 3);
        assert_eq!(Status::from(&result), Status::InvalidValue);
        assert_eq!(y, [5.0; 6]);
    }

    #[test]
    fn test_conjugate_transpose_of_real_is_invalid() {
        let x = [1.0, 1.0];
        let mut y = [5.0, 5.0];
        let result = solve_triangular(Operation::ConjugateTranspose, 1.0, &lower(), descr(), Layout::ColumnMajor, &x, 1, 2, &mut y, 2);
        assert_eq!(Status::from(&result), Status::InvalidValue);
        assert_eq!(y, [5.0, 5.0]);
    }

    #[test]
    fn test_destroyed_handle_is_uninitialized() {
        let mut matrix = lower();
        matrix.destroy();
        let x = [1.0, 1.0];
        let mut y = [5.0, 5.0];
        let result = solve_triangular(Operation::NonTranspose, 1.0, &matrix, descr(), Layout::ColumnMajor, &x, 1, 2, &mut y, 2);
        assert_eq!(result, Err(SpblasError::NotInitialized));
        assert_eq!(y, [5.0, 5.0]);
    }

    #[test]
    fn test_element_type_mismatch_is_invalid() {
        let x = [1.0f32, 1.0];
        let mut y = [5.0f32, 5.0];
        let result = solve_triangular(Operation::NonTranspose, 1.0f32, &lower(), descr(), Layout::ColumnMajor, &x, 1, 2, &mut y, 2);
        assert!(matches!(result, Err(SpblasError::InvalidValue(_))));
    }

    #[test]
    fn test_gebsr_is_not_supported() {
        let gebsr = GebsrMatrix::new(
            IndexBase::Zero,
            Layout::RowMajor,
            1,
            2,
            2,
            1,
            vec![0, 1],
            vec![1, 2],
            vec![0, 0],
            vec![1.0, 0.0, 3.0, 4.0],
        )
        .unwrap();
        let matrix = MatrixHandle::new(IndexBase::Zero, gebsr);
        let x = [1.0, 1.0];
        let mut y = [5.0, 5.0];
        let result = solve_triangular(Operation::NonTranspose, 1.0, &matrix, descr(), Layout::ColumnMajor, &x, 1, 2, &mut y, 2);
        assert_eq!(Status::from(&result), Status::NotSupported);
        assert_eq!(y, [5.0, 5.0]);
    }

    #[test]
    fn test_zero_diagonal_divides_through() {
        let matrix = handle(Format::Coo, 2, &[(0, 0, 0.0), (1, 1, 1.0)], FillMode::Lower);
        let x = [1.0, 1.0];
        let mut y = [0.0f64; 2];
        solve_diagonal(Operation::NonTranspose, 1.0, &matrix, DiagType::NonUnit, Layout::RowMajor, &x, 1, 1, &mut y, 1)
            .unwrap();
        assert!(y[0].is_infinite());
        assert_eq!(y[1], 1.0);
    }
}
