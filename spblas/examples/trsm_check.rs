use std::time::Instant;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spblas::{
    CooMatrix, DiagType, Executor, ExecutorConfig, FillMode, IndexBase, Layout, MatrixDescriptor,
    MatrixHandle, Operation,
};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Solve a random sparse triangular system in parallel and check it against one thread")]
struct Cli {
    /// Matrix order
    #[arg(long, default_value_t = 5_000)]
    size: usize,

    /// Probability that a strictly triangular position is stored
    #[arg(long, default_value_t = 0.001)]
    density: f64,

    /// Right-hand-side columns
    #[arg(long, default_value_t = 8)]
    columns: usize,

    /// Worker threads for the parallel solve (default: all CPUs)
    #[arg(long)]
    threads: Option<usize>,

    /// Solve with the upper triangle instead of the lower one
    #[arg(long)]
    upper: bool,

    /// Solve with the transpose
    #[arg(long)]
    transpose: bool,

    /// Assume a unit diagonal
    #[arg(long)]
    unit: bool,

    /// Use row-major dense operands
    #[arg(long)]
    row_major: bool,

    #[arg(long, default_value_t = 1)]
    seed: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let n = cli.size;
    let fill = if cli.upper { FillMode::Upper } else { FillMode::Lower };
    let diag = if cli.unit { DiagType::Unit } else { DiagType::NonUnit };
    let operation = if cli.transpose { Operation::Transpose } else { Operation::NonTranspose };
    let layout = if cli.row_major { Layout::RowMajor } else { Layout::ColumnMajor };

    // Random triangle of the requested fill with a dominant diagonal
    let start = Instant::now();
    let mut rng = StdRng::seed_from_u64(cli.seed);
    let mut triplets = Vec::new();
    for i in 0..n {
        let mut weight = 0.0;
        for j in 0..i {
            if rng.gen_bool(cli.density) {
                let v: f64 = rng.gen_range(-1.0..1.0);
                weight += v.abs();
                let (r, c) = match fill {
                    FillMode::Lower => (i, j),
                    FillMode::Upper => (j, i),
                };
                triplets.push((r, c, v));
            }
        }
        triplets.push((i, i, 1.0 + weight));
    }
    let nnz = triplets.len();
    let matrix = MatrixHandle::new(IndexBase::Zero, CooMatrix::from_triplets(n, n, &triplets)?);
    println!("Matrix: {n}x{n} COO with {nnz} entries ({:.3}s)", start.elapsed().as_secs_f64());

    let columns = cli.columns;
    let ld = match layout {
        Layout::RowMajor => columns.max(1),
        Layout::ColumnMajor => n.max(1),
    };
    let x: Vec<f64> = (0..n * columns).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let descr = MatrixDescriptor::triangular(fill, diag);

    let mut config = ExecutorConfig::default().with_thread_name("trsm-check");
    if let Some(threads) = cli.threads {
        config = config.with_threads(threads);
    }
    let parallel = Executor::new(config)?;
    let sequential = Executor::sequential()?;

    let mut y_parallel = vec![0.0; x.len()];
    let start = Instant::now();
    parallel.solve_triangular(operation, 1.0, &matrix, descr, layout, &x, columns, ld, &mut y_parallel, ld)?;
    let parallel_time = start.elapsed().as_secs_f64();

    let mut y_sequential = vec![0.0; x.len()];
    let start = Instant::now();
    sequential.solve_triangular(operation, 1.0, &matrix, descr, layout, &x, columns, ld, &mut y_sequential, ld)?;
    let sequential_time = start.elapsed().as_secs_f64();

    let max_diff = y_parallel
        .iter()
        .zip(&y_sequential)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max);

    println!("{operation:?} {fill:?} {diag:?} {layout:?}, {columns} column(s)");
    println!("Parallel ({} threads): {parallel_time:.4}s", parallel.threads());
    println!("Sequential:           {sequential_time:.4}s");
    println!("Speedup: {:.2}x", sequential_time / parallel_time.max(f64::EPSILON));
    println!("Max difference: {max_diff:e}");

    if max_diff != 0.0 {
        return Err(format!("parallel and sequential solves differ by {max_diff:e}").into());
    }
    Ok(())
}
