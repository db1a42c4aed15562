//! Back substitution over upper-triangular systems.

use num_traits::Float;
use numerix_core::types::DenseMatrix;

/// Solves the upper-triangular system `A·X = B` from the last row up.
///
/// `x[n-1] = b[n-1] / a[n-1][n-1]`, then for each `k` from `n-2` down
/// to `0`:
///
/// ```text
/// x[k] = (b[k] - a[k][k+1..n] · x[k+1..n]) / a[k][k]
/// ```
///
/// # Preconditions
///
/// `a` must be upper triangular with a non-zero diagonal; entries below
/// the diagonal are never read, and a zero diagonal entry divides
/// through to ±inf/NaN rather than raising a structured error (callers
/// ensure non-singularity upstream — [`crate::solve`] does so via its
/// pivot check). Dimension agreement is enforced.
///
/// # Panics
///
/// Panics if `a` is not square or `b` length disagrees with `a`.
///
/// # Example
///
/// ```
/// use numerix_core::types::DenseMatrix;
/// use numerix_linalg::back_substitution;
///
/// let a = DenseMatrix::from_rows(vec![
///     vec![2.0, 1.0],
///     vec![0.0, 4.0],
/// ]).unwrap();
///
/// let x = back_substitution(&a, &[4.0, 8.0]);
/// assert_eq!(x, vec![1.0, 2.0]);
/// ```
pub fn back_substitution<T: Float>(a: &DenseMatrix<T>, b: &[T]) -> Vec<T> {
    assert!(a.is_square(), "matrix must be square");
    assert_eq!(a.num_rows(), b.len(), "rhs length must match the matrix");

    let n = b.len();
    if n == 0 {
        return Vec::new();
    }

    let mut x = vec![T::zero(); n];
    x[n - 1] = b[n - 1] / a[(n - 1, n - 1)];

    for k in (0..n - 1).rev() {
        let mut dot = T::zero();
        for j in (k + 1)..n {
            dot = dot + a[(k, j)] * x[j];
        }
        x[k] = (b[k] - dot) / a[(k, k)];
    }

    x
}
