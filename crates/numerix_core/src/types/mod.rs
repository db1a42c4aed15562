//! Core numeric storage and error types.
//!
//! This module provides:
//! - `matrix`: Dense row-major matrix storage generic over `T: Float`
//! - `error`: Structured error types for matrix construction, linear
//!   solving, and root-finding operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module
//! level:
//! - [`DenseMatrix`] from `matrix`
//! - [`LinAlgError`], [`MatrixError`], [`SolverError`] from `error`

pub mod error;
pub mod matrix;

// Re-export commonly used types at module level
pub use error::{LinAlgError, MatrixError, SolverError};
pub use matrix::DenseMatrix;
