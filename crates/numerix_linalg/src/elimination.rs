//! Gaussian elimination with partial pivoting.

use num_traits::Float;
use numerix_core::search::first_index_of;
use numerix_core::types::{DenseMatrix, LinAlgError};

use crate::substitution::back_substitution;

/// Solves the square dense system `A·X = B`.
///
/// Forms the augmented matrix `[A | B]`, reduces it to row-echelon form
/// with partial pivoting, then delegates to [`back_substitution`]. The
/// caller's `a` and `b` are never mutated.
///
/// # Pivot selection
///
/// Each pivot row is located in two steps: the remaining sub-column is
/// reduced to its **raw maximum** (algebraically largest entry, not
/// largest magnitude), and the first row holding that value is found by
/// exact-equality search. Kept limitation: on sub-columns dominated by
/// negative entries this picks a numerically weaker pivot than standard
/// partial pivoting, and a sub-column whose raw maximum is exactly zero
/// is reported singular even when a negative entry could have pivoted.
///
/// # Arguments
///
/// * `a` - Coefficient matrix, `n`x`n`, finite entries
/// * `b` - Right-hand side, length `n`
///
/// # Returns
///
/// * `Ok(x)` - Solution vector of length `n`
/// * `Err(LinAlgError::NotSquare)` - `a` is not square
/// * `Err(LinAlgError::DimensionMismatch)` - `b` length disagrees
/// * `Err(LinAlgError::SingularMatrix)` - A pivot reduced to exact zero
///
/// # Edge behavior
///
/// `n == 0` returns an empty solution. `n == 1` performs no elimination
/// and no pivot check: a zero single entry divides through to ±inf/NaN
/// in back substitution (documented permissive behavior).
///
/// # Panics
///
/// Panics if `a` contains NaN entries (the pivot lookup requires the
/// scanned maximum to be present in the sub-column).
///
/// # Example
///
/// ```
/// use numerix_core::types::DenseMatrix;
/// use numerix_linalg::solve;
///
/// let a: DenseMatrix<f64> = DenseMatrix::from_rows(vec![
///     vec![2.0, 1.0],
///     vec![1.0, 3.0],
/// ]).unwrap();
///
/// let x = solve(&a, &[5.0, 10.0]).unwrap();
/// assert!((x[0] - 1.0).abs() < 1e-12);
/// assert!((x[1] - 3.0).abs() < 1e-12);
/// ```
pub fn solve<T: Float>(a: &DenseMatrix<T>, b: &[T]) -> Result<Vec<T>, LinAlgError> {
    if !a.is_square() {
        return Err(LinAlgError::NotSquare {
            rows: a.num_rows(),
            cols: a.num_cols(),
        });
    }
    let n = a.num_rows();
    if b.len() != n {
        return Err(LinAlgError::DimensionMismatch {
            expected: n,
            got: b.len(),
        });
    }
    if n == 0 {
        return Ok(Vec::new());
    }

    // Working copy: callers never see the elimination
    let mut augmented = a.hconcat(&DenseMatrix::from_column(b))?;

    for q in 0..n - 1 {
        let sub_column = augmented.col_range(q, q..n);
        let pivot = sub_column.iter().copied().fold(T::neg_infinity(), T::max);
        let offset = first_index_of(&sub_column, pivot)
            .expect("pivot value is drawn from the scanned sub-column");
        augmented.swap_rows(q, q + offset);

        if augmented[(q, q)] == T::zero() {
            return Err(LinAlgError::SingularMatrix { column: q });
        }

        for k in (q + 1)..n {
            let m = augmented[(k, q)] / augmented[(q, q)];
            for j in q..=n {
                augmented[(k, j)] = augmented[(k, j)] - m * augmented[(q, j)];
            }
        }
    }

    let upper = augmented.submatrix(0..n, 0..n);
    let rhs = augmented.col(n);
    Ok(back_substitution(&upper, &rhs))
}
