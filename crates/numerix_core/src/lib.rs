//! # numerix_core: Foundation Types for the Numerix Workspace
//!
//! ## Foundation Layer Role
//!
//! numerix_core is the bottom layer of the workspace, providing:
//! - Dense matrix/vector storage (`types::matrix`)
//! - First-occurrence search used for pivot-row lookup (`search`)
//! - Error types: `SolverError`, `LinAlgError`, `MatrixError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! The foundation layer has no dependencies on other numerix_* crates,
//! with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error types
//! - serde: Serialisation support (optional)
//!
//! ## Generic Scalar Convention
//!
//! Every type and algorithm in the workspace is generic over
//! `T: num_traits::Float`. Any `Float` implementor — `f64`, `f32`, or an
//! extended-precision type — runs the identical code path; the crates
//! never name a concrete scalar representation.
//!
//! ## Usage Examples
//!
//! ```rust
//! use numerix_core::types::DenseMatrix;
//! use numerix_core::search::first_index_of;
//!
//! let m = DenseMatrix::from_rows(vec![
//!     vec![1.0, 2.0],
//!     vec![3.0, 4.0],
//! ]).unwrap();
//! assert_eq!(m[(1, 0)], 3.0);
//! assert_eq!(m.col(1), vec![2.0, 4.0]);
//!
//! assert_eq!(first_index_of(&[5.0, 9.0, 9.0], 9.0), Some(1));
//! assert_eq!(first_index_of(&[5.0, 9.0], 7.0), None);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `DenseMatrix` and the error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod search;
pub mod types;
