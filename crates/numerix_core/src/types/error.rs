//! Error types for structured error handling.
//!
//! This module provides:
//! - `MatrixError`: Errors from matrix construction and concatenation
//! - `LinAlgError`: Errors from dense linear-system solving
//! - `SolverError`: Errors from root-finding solvers
//!
//! All errors are fatal to the current call; no operation in the
//! workspace retries internally. Callers decide whether to retry with
//! different parameters.

use thiserror::Error;

/// Matrix construction and shape errors.
///
/// Provides structured error handling for building and combining dense
/// matrices with descriptive context for each failure mode.
///
/// # Variants
/// - `RaggedRows`: Nested-literal input rows have inconsistent lengths
/// - `RowCountMismatch`: Horizontal concatenation of differently sized
///   operands
///
/// # Examples
/// ```
/// use numerix_core::types::{DenseMatrix, MatrixError};
///
/// let err = DenseMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
/// assert_eq!(err, MatrixError::RaggedRows { row: 1, expected: 2, got: 1 });
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatrixError {
    /// Nested-literal input rows have inconsistent lengths.
    #[error("Ragged input: row {row} has {got} entries, expected {expected}")]
    RaggedRows {
        /// Index of the offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        got: usize,
    },

    /// Horizontal concatenation operands have different row counts.
    #[error("Row count mismatch: left has {left} rows, right has {right}")]
    RowCountMismatch {
        /// Row count of the left operand
        left: usize,
        /// Row count of the right operand
        right: usize,
    },
}

/// Dense linear-system solver errors.
///
/// Provides structured error handling for Gaussian elimination with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `NotSquare`: Coefficient matrix is not square
/// - `DimensionMismatch`: Right-hand side length disagrees with the matrix
/// - `SingularMatrix`: A pivot column reduced to an exact zero
/// - `Matrix`: Underlying matrix operation failed
///
/// # Examples
/// ```
/// use numerix_core::types::LinAlgError;
///
/// let err = LinAlgError::SingularMatrix { column: 2 };
/// assert!(format!("{}", err).contains("column 2"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LinAlgError {
    /// Coefficient matrix is not square.
    #[error("Matrix is not square: {rows}x{cols}")]
    NotSquare {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// Right-hand side length does not match the coefficient matrix.
    #[error("Dimension mismatch: matrix has {expected} rows, rhs has {got}")]
    DimensionMismatch {
        /// Row count of the coefficient matrix
        expected: usize,
        /// Length of the right-hand side
        got: usize,
    },

    /// Pivot entry reduced to an exact zero after row selection.
    #[error("Singular matrix: zero pivot in column {column}")]
    SingularMatrix {
        /// Pivot column where elimination stopped
        column: usize,
    },

    /// Underlying matrix operation failed.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// Root-finding solver errors.
///
/// Provides structured error handling for the bracketing methods with
/// descriptive context for each failure mode. The open methods (Newton,
/// secant) have no structured failure modes; their numerical hazards
/// propagate through `Float` division semantics.
///
/// # Variants
/// - `InvalidInterval`: Function values at the endpoints do not satisfy
///   the required sign condition
///
/// # Examples
/// ```
/// use numerix_core::types::SolverError;
///
/// let err = SolverError::InvalidInterval { a: 0.0, b: 2.0 };
/// assert!(format!("{}", err).contains("different sign"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Bracketing method invoked without the required sign change.
    #[error("Invalid interval [{a}, {b}]: f(a) and f(b) must be of different sign")]
    InvalidInterval {
        /// Left endpoint of the rejected bracket
        a: f64,
        /// Right endpoint of the rejected bracket
        b: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_error_display() {
        let err = MatrixError::RaggedRows {
            row: 3,
            expected: 4,
            got: 2,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("row 3"));
        assert!(msg.contains("expected 4"));
    }

    #[test]
    fn test_linalg_error_display() {
        let err = LinAlgError::NotSquare { rows: 3, cols: 4 };
        assert_eq!(format!("{}", err), "Matrix is not square: 3x4");

        let err = LinAlgError::DimensionMismatch {
            expected: 3,
            got: 2,
        };
        assert!(format!("{}", err).contains("matrix has 3 rows"));
    }

    #[test]
    fn test_linalg_error_from_matrix_error() {
        let inner = MatrixError::RowCountMismatch { left: 2, right: 3 };
        let err: LinAlgError = inner.clone().into();
        assert_eq!(err, LinAlgError::Matrix(inner));
    }

    #[test]
    fn test_solver_error_display() {
        let err = SolverError::InvalidInterval { a: -1.0, b: 1.0 };
        let msg = format!("{}", err);
        assert!(msg.contains("[-1, 1]"));
        assert!(msg.contains("different sign"));
    }

    #[test]
    fn test_errors_are_clone_and_eq() {
        let err = LinAlgError::SingularMatrix { column: 0 };
        assert_eq!(err.clone(), err);
    }
}
