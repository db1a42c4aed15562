//! First-occurrence search over scalar slices.
//!
//! The Gaussian elimination in `numerix_linalg` selects a pivot by
//! computing the maximum of a sub-column and then locating the row that
//! holds it. The lookup half of that handshake lives here.

use num_traits::Float;

/// Returns the first position where `values[i] == target`.
///
/// Comparison is exact (`==`), not tolerance-based: the intended use is
/// locating a value that was itself read out of `values`, such as the
/// maximum of the same slice. When `target` is not present — including
/// the case where it is NaN — the function returns `None`.
///
/// # Example
///
/// ```
/// use numerix_core::search::first_index_of;
///
/// let column = [3.0, 7.0, 7.0, 1.0];
/// assert_eq!(first_index_of(&column, 7.0), Some(1));
/// assert_eq!(first_index_of(&column, 2.0), None);
/// ```
#[must_use]
pub fn first_index_of<T: Float>(values: &[T], target: T) -> Option<usize> {
    values.iter().position(|&v| v == target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_first_of_duplicates() {
        assert_eq!(first_index_of(&[5.0, 9.0, 9.0, 9.0], 9.0), Some(1));
    }

    #[test]
    fn test_single_element() {
        assert_eq!(first_index_of(&[4.0], 4.0), Some(0));
    }

    #[test]
    fn test_absent_returns_none() {
        assert_eq!(first_index_of(&[1.0, 2.0], 3.0), None);
    }

    #[test]
    fn test_empty_slice() {
        assert_eq!(first_index_of::<f64>(&[], 0.0), None);
    }

    #[test]
    fn test_nan_never_matches() {
        assert_eq!(first_index_of(&[f64::NAN, 1.0], f64::NAN), None);
    }

    #[test]
    fn test_with_f32() {
        assert_eq!(first_index_of(&[1.5_f32, -2.5], -2.5), Some(1));
    }
}
