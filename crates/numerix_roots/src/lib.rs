//! # numerix_roots: Scalar Root-Finding Methods
//!
//! This crate provides four classical iterative methods for solving
//! `f(x) = 0` for a scalar unknown, split into two families:
//!
//! ## Bracketing Methods
//!
//! Require an interval whose endpoints produce function values of
//! different sign, and fail with [`SolverError::InvalidInterval`] before
//! iterating when the bracket is invalid:
//!
//! - [`BisectionSolver`]: Guaranteed termination in a precomputed number
//!   of steps derived from interval width and tolerance
//! - [`FalsePositionSolver`]: Secant-interpolated bracket updates with a
//!   dual step-size/residual convergence test
//!
//! ## Open Methods
//!
//! Iterate from one or two seed points using local slope information,
//! with no bracket guarantee and no structured failure modes:
//!
//! - [`NewtonRaphsonSolver`]: Fast quadratic convergence using a
//!   caller-supplied derivative
//! - [`SecantSolver`]: Derivative-free slope estimate from two previous
//!   iterates
//!
//! ## Configuration
//!
//! All solvers share [`SolverConfig`]:
//! - `delta`: step-size / interval-width tolerance (default: 1e-6)
//! - `epsilon`: residual tolerance on `|f(root)|` (default: 1e-6)
//! - `max_iterations`: iteration cap for the non-bisection methods
//!   (default: 100)
//!
//! ## Generic Scalars
//!
//! Every solver is generic over `T: num_traits::Float`, so the identical
//! algorithm runs at `f64`, `f32`, or any extended-precision `Float`
//! implementor.
//!
//! ## Example
//!
//! ```
//! use numerix_roots::{BisectionSolver, SolverConfig};
//!
//! // Solve x·sin(x) - 1 = 0 on [0, 2]
//! let solver = BisectionSolver::new(SolverConfig::default());
//! let f = |x: f64| x * x.sin() - 1.0;
//!
//! let root = solver.find_root(f, 0.0, 2.0).unwrap();
//! assert!((root - 1.114157141).abs() < 1e-5);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

mod bisection;
mod config;
mod false_position;
mod newton_raphson;
mod secant;

// Re-export public types at crate level
pub use bisection::BisectionSolver;
pub use config::SolverConfig;
pub use false_position::FalsePositionSolver;
pub use newton_raphson::NewtonRaphsonSolver;
pub use secant::SecantSolver;

pub use numerix_core::types::SolverError;
