//! # numerix_linalg: Dense Linear-System Solving
//!
//! This crate solves square dense systems `A·X = B` by Gaussian
//! elimination with partial pivoting followed by back substitution:
//!
//! - [`solve`]: Full pipeline — augment, pivot, eliminate, substitute
//! - [`back_substitution`]: Upper-triangular solve, also usable on its
//!   own when the system is already triangular
//!
//! ## Pivoting Policy
//!
//! At each elimination step the pivot row is chosen as the one holding
//! the **algebraically largest** value in the remaining sub-column —
//! the raw maximum, not the maximum magnitude. On sub-columns whose
//! dominant entries are negative this selects a smaller pivot than
//! standard partial pivoting would, and a nonsingular system whose raw
//! sub-column maximum is exactly zero is reported as singular. This is
//! a known limitation of the selection rule, kept intentionally; see
//! the notes on [`solve`].
//!
//! ## Purity
//!
//! Callers never observe mutation of their inputs: `solve` clones `A`
//! and `B` into an internal augmented working matrix and all
//! elimination bookkeeping happens there.
//!
//! ## Example
//!
//! ```
//! use numerix_core::types::DenseMatrix;
//! use numerix_linalg::solve;
//!
//! let a: DenseMatrix<f64> = DenseMatrix::from_rows(vec![
//!     vec![24.14, -1.210],
//!     vec![1.133, 5.281],
//! ]).unwrap();
//! let b = [22.93, 6.414];
//!
//! let x = solve(&a, &b).unwrap();
//! assert!((x[0] - 1.0).abs() < 1e-6);
//! assert!((x[1] - 1.0).abs() < 1e-6);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

mod elimination;
mod substitution;

// Re-export public functions at crate level
pub use elimination::solve;
pub use substitution::back_substitution;

pub use numerix_core::types::LinAlgError;
