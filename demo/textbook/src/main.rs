//! Numerix Demo CLI
//!
//! Runs the textbook scenarios against the method crates:
//!
//! - `textbook-demo roots` - The four root-finding methods
//! - `textbook-demo linear` - Gaussian elimination and back substitution
//!
//! With no subcommand, both suites run.

use anyhow::Result;
use clap::{Parser, Subcommand};
use numerix_core::types::DenseMatrix;
use numerix_linalg::{back_substitution, solve};
use numerix_roots::{
    BisectionSolver, FalsePositionSolver, NewtonRaphsonSolver, SecantSolver, SolverConfig,
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Numerix textbook scenario runner
#[derive(Parser)]
#[command(name = "textbook-demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the root-finding scenarios
    Roots,
    /// Run the linear-system scenarios
    Linear,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("textbook_demo=info".parse()?))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Roots) => run_roots()?,
        Some(Commands::Linear) => run_linear()?,
        None => {
            run_roots()?;
            run_linear()?;
        }
    }

    Ok(())
}

fn run_roots() -> Result<()> {
    let config: SolverConfig<f64> = SolverConfig::default();
    info!(
        delta = config.delta,
        epsilon = config.epsilon,
        max_iterations = config.max_iterations,
        "running root-finding scenarios"
    );

    let f1 = |x: f64| x * x.sin() - 1.0;

    let root = BisectionSolver::new(config).find_root(f1, 0.0, 2.0)?;
    info!(root, "bisection: x·sin(x) - 1 = 0 on [0, 2]");

    let root = FalsePositionSolver::new(config).find_root(f1, 0.0, 2.0)?;
    info!(root, "false position: x·sin(x) - 1 = 0 on [0, 2]");

    let f2 = |x: f64| 1980.0 * (1.0 - (-x / 10.0).exp()) - 98.0 * x;
    let df2 = |x: f64| 198.0 * (-x / 10.0).exp() - 98.0;
    let root = NewtonRaphsonSolver::new(config).find_root(f2, df2, 16.0);
    info!(root, "newton: 1980(1 - e^(-x/10)) - 98x = 0 from 16");

    let f3 = |x: f64| x * x * x - 3.0 * x + 2.0;
    let root = SecantSolver::new(config).find_root(f3, -2.6, -2.4);
    info!(root, "secant: x³ - 3x + 2 = 0 from (-2.6, -2.4)");

    Ok(())
}

fn run_linear() -> Result<()> {
    info!("running linear-system scenarios");

    let a = DenseMatrix::from_rows(vec![
        vec![4.0, -1.0, 2.0, 3.0],
        vec![0.0, -2.0, 7.0, -4.0],
        vec![0.0, 0.0, 6.0, 5.0],
        vec![0.0, 0.0, 0.0, 3.0],
    ])?;
    let x = back_substitution(&a, &[20.0, -7.0, 4.0, 6.0]);
    info!(?x, "back substitution on the 4x4 upper-triangular system");

    let a = DenseMatrix::from_rows(vec![vec![24.14, -1.210], vec![1.133, 5.281]])?;
    let x = solve(&a, &[22.93, 6.414])?;
    info!(?x, "gaussian elimination on the 2x2 system");

    Ok(())
}
