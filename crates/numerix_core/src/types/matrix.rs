//! Dense matrix storage for small linear systems.
//!
//! Dense row-major storage is the right fit for the small systems the
//! workspace targets: better cache locality and simpler access patterns
//! than any sparse representation.

use std::ops::{Index, IndexMut, Range};

use num_traits::Float;

use crate::search::first_index_of;
use crate::types::error::MatrixError;

/// Dense matrix stored in row-major order.
///
/// Dimensions are fixed at construction. Column vectors are represented
/// as single-column matrices or plain slices depending on the call site;
/// the solver crates use slices for right-hand sides and solutions.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Example
///
/// ```
/// use numerix_core::types::DenseMatrix;
///
/// let m = DenseMatrix::from_rows(vec![
///     vec![4.0, -1.0],
///     vec![0.0, -2.0],
/// ]).unwrap();
///
/// assert!(m.is_square());
/// assert_eq!(m[(0, 1)], -1.0);
/// assert_eq!(m.row(1), &[0.0, -2.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DenseMatrix<T> {
    /// Matrix entries in row-major order.
    data: Vec<T>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl<T: Float> DenseMatrix<T> {
    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![T::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix from nested row literals.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::RaggedRows`] if the rows have inconsistent
    /// lengths.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        if rows.is_empty() {
            return Ok(Self::zeros(0, 0));
        }
        let num_rows = rows.len();
        let num_cols = rows[0].len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != num_cols {
                return Err(MatrixError::RaggedRows {
                    row: i,
                    expected: num_cols,
                    got: row.len(),
                });
            }
        }
        let data: Vec<T> = rows.into_iter().flatten().collect();
        Ok(Self {
            data,
            num_rows,
            num_cols,
        })
    }

    /// Creates a single-column matrix from a slice.
    #[must_use]
    pub fn from_column(column: &[T]) -> Self {
        Self {
            data: column.to_vec(),
            num_rows: column.len(),
            num_cols: 1,
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Returns the entry at (row, col), or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.num_rows && col < self.num_cols {
            Some(self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Returns a mutable reference to the entry at (row, col).
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.num_rows && col < self.num_cols {
            Some(&mut self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Returns a slice of the specified row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[must_use]
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Returns a mutable slice of the specified row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        let start = row * self.num_cols;
        &mut self.data[start..start + self.num_cols]
    }

    /// Returns a column as a vector.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    #[must_use]
    pub fn col(&self, col: usize) -> Vec<T> {
        (0..self.num_rows).map(|row| self[(row, col)]).collect()
    }

    /// Returns the sub-column `rows[start, end)` of the specified column.
    ///
    /// # Panics
    ///
    /// Panics if the range or the column index is out of bounds.
    #[must_use]
    pub fn col_range(&self, col: usize, rows: Range<usize>) -> Vec<T> {
        rows.map(|row| self[(row, col)]).collect()
    }

    /// Returns the sub-matrix covering `rows` x `cols`, both `[start, end)`.
    ///
    /// # Panics
    ///
    /// Panics if either range is out of bounds.
    #[must_use]
    pub fn submatrix(&self, rows: Range<usize>, cols: Range<usize>) -> Self {
        let num_rows = rows.len();
        let num_cols = cols.len();
        let mut data = Vec::with_capacity(num_rows * num_cols);
        for row in rows {
            for col in cols.clone() {
                data.push(self[(row, col)]);
            }
        }
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Concatenates `other` to the right of `self`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::RowCountMismatch`] if the operands have
    /// different row counts.
    pub fn hconcat(&self, other: &Self) -> Result<Self, MatrixError> {
        if self.num_rows != other.num_rows {
            return Err(MatrixError::RowCountMismatch {
                left: self.num_rows,
                right: other.num_rows,
            });
        }
        let num_cols = self.num_cols + other.num_cols;
        let mut data = Vec::with_capacity(self.num_rows * num_cols);
        for row in 0..self.num_rows {
            data.extend_from_slice(self.row(row));
            data.extend_from_slice(other.row(row));
        }
        Ok(Self {
            data,
            num_rows: self.num_rows,
            num_cols,
        })
    }

    /// Swaps two rows in place.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        for col in 0..self.num_cols {
            self.data
                .swap(i * self.num_cols + col, j * self.num_cols + col);
        }
    }

    /// Returns the first position in `row` holding exactly `target`.
    ///
    /// Exact `==` comparison, no tolerance. Returns `None` when absent.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[must_use]
    pub fn first_index_in_row(&self, row: usize, target: T) -> Option<usize> {
        first_index_of(self.row(row), target)
    }

    /// Returns the first position in `col` holding exactly `target`.
    ///
    /// Exact `==` comparison, no tolerance. Returns `None` when absent.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    #[must_use]
    pub fn first_index_in_col(&self, col: usize, target: T) -> Option<usize> {
        first_index_of(&self.col(col), target)
    }
}

impl<T> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.num_rows && col < self.num_cols, "index out of bounds");
        &self.data[row * self.num_cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for DenseMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(row < self.num_rows && col < self.num_cols, "index out of bounds");
        &mut self.data[row * self.num_cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DenseMatrix<f64> {
        DenseMatrix::from_rows(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_zeros() {
        let m: DenseMatrix<f64> = DenseMatrix::zeros(2, 3);
        assert_eq!(m.num_rows(), 2);
        assert_eq!(m.num_cols(), 3);
        assert!(m.row(1).iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = DenseMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::RaggedRows {
                row: 1,
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn test_from_rows_empty() {
        let m = DenseMatrix::<f64>::from_rows(vec![]).unwrap();
        assert_eq!(m.num_rows(), 0);
        assert_eq!(m.num_cols(), 0);
    }

    #[test]
    fn test_from_column() {
        let m = DenseMatrix::from_column(&[20.0, -7.0, 4.0]);
        assert_eq!(m.num_rows(), 3);
        assert_eq!(m.num_cols(), 1);
        assert_eq!(m[(1, 0)], -7.0);
    }

    #[test]
    fn test_indexing() {
        let mut m = sample();
        assert_eq!(m[(0, 2)], 3.0);
        m[(0, 2)] = 10.0;
        assert_eq!(m[(0, 2)], 10.0);
        assert_eq!(m.get(3, 0), None);
        assert_eq!(m.get(0, 0), Some(1.0));
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_index_out_of_bounds_panics() {
        let m = sample();
        let _ = m[(0, 3)];
    }

    #[test]
    fn test_row_and_col() {
        let m = sample();
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(m.col(2), vec![3.0, 6.0, 9.0]);
    }

    #[test]
    fn test_col_range() {
        let m = sample();
        assert_eq!(m.col_range(0, 1..3), vec![4.0, 7.0]);
        assert_eq!(m.col_range(1, 0..0), Vec::<f64>::new());
    }

    #[test]
    fn test_submatrix() {
        let m = sample();
        let sub = m.submatrix(0..2, 1..3);
        assert_eq!(sub.num_rows(), 2);
        assert_eq!(sub.num_cols(), 2);
        assert_eq!(sub.row(0), &[2.0, 3.0]);
        assert_eq!(sub.row(1), &[5.0, 6.0]);
    }

    #[test]
    fn test_hconcat() {
        let a = sample();
        let b = DenseMatrix::from_column(&[10.0, 11.0, 12.0]);
        let aug = a.hconcat(&b).unwrap();
        assert_eq!(aug.num_cols(), 4);
        assert_eq!(aug.row(1), &[4.0, 5.0, 6.0, 11.0]);
    }

    #[test]
    fn test_hconcat_mismatch() {
        let a = sample();
        let b = DenseMatrix::from_column(&[1.0, 2.0]);
        let err = a.hconcat(&b).unwrap_err();
        assert_eq!(err, MatrixError::RowCountMismatch { left: 3, right: 2 });
    }

    #[test]
    fn test_swap_rows() {
        let mut m = sample();
        m.swap_rows(0, 2);
        assert_eq!(m.row(0), &[7.0, 8.0, 9.0]);
        assert_eq!(m.row(2), &[1.0, 2.0, 3.0]);

        // Self-swap is a no-op
        let before = m.clone();
        m.swap_rows(1, 1);
        assert_eq!(m, before);
    }

    #[test]
    fn test_first_index_in_row_and_col() {
        let m = DenseMatrix::from_rows(vec![
            vec![1.0, 9.0, 9.0],
            vec![9.0, 5.0, 6.0],
        ])
        .unwrap();
        assert_eq!(m.first_index_in_row(0, 9.0), Some(1));
        assert_eq!(m.first_index_in_col(0, 9.0), Some(1));
        assert_eq!(m.first_index_in_col(1, 7.0), None);
    }

    #[test]
    fn test_callers_input_not_mutated_by_clone_based_ops() {
        let m = sample();
        let _ = m.submatrix(0..3, 0..3);
        let _ = m.col(0);
        assert_eq!(m, sample());
    }

    #[test]
    fn test_with_f32() {
        let m: DenseMatrix<f32> = DenseMatrix::zeros(2, 2);
        assert_eq!(m[(1, 1)], 0.0_f32);
    }
}
