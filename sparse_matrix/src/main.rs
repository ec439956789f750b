use anyhow::{Context, Result};
use sparse_matrix::{Operation, SparseMatrix};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, StructOpt)]
#[structopt(name = "sparse-matrix", about = "Add, subtract or multiply two sparse matrix files")]
struct Opt {
    /// Left operand
    #[structopt(parse(from_os_str))]
    lhs: PathBuf,

    /// Right operand
    #[structopt(parse(from_os_str))]
    rhs: PathBuf,

    /// 1/add, 2/subtract or 3/multiply. Prompts on stdin when omitted.
    #[structopt(long)]
    op: Option<Operation>,

    /// Where to write the result
    #[structopt(short, long, parse(from_os_str), default_value = "result_matrix.txt")]
    output: PathBuf,

    /// Multiply by the transpose of the right operand
    #[structopt(long)]
    transpose_rhs: bool,

    /// Write the result as JSON instead of the text format
    #[structopt(long)]
    json: bool,
}

fn init_logging() -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::builder()
            .from_env()
            .context("Invalid `RUST_LOG` environment variable")?
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
    Ok(())
}

fn prompt_operation() -> Result<Operation> {
    print!("Select an option: 1. Add, 2. Subtract, 3. Multiply: ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.parse()?)
}

fn main() -> Result<()> {
    init_logging()?;
    let opt = Opt::from_args();

    let lhs = SparseMatrix::load(&opt.lhs).context("Failed to load left operand")?;
    let rhs = SparseMatrix::load(&opt.rhs).context("Failed to load right operand")?;
    info!("Matrix 1: {}x{}", lhs.num_rows, lhs.num_cols);
    info!("Matrix 2: {}x{}", rhs.num_rows, rhs.num_cols);

    let operation = match opt.op {
        Some(op) => op,
        None => prompt_operation()?,
    };

    let result = operation
        .apply_with(&lhs, &rhs, opt.transpose_rhs)
        .with_context(|| format!("Failed to {operation} matrices"))?;
    info!(nnz = result.nnz(), "Result: {}x{}", result.num_rows, result.num_cols);

    if opt.json {
        let json = result.to_json()?;
        std::fs::write(&opt.output, json)
            .with_context(|| format!("Failed to write {}", opt.output.display()))?;
    } else {
        result.save(&opt.output)?;
    }
    info!("Result saved to {}", opt.output.display());

    Ok(())
}
