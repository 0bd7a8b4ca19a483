//! # strainfield-math
//!
//! Small linear algebra primitives for the strainfield engine.
//!
//! Provides:
//! - `Vector<T, D>` — fixed-size vector over a [`Scalar`] value type
//! - `SquareMatrix<T, D>` — D×D matrix, used for Jacobians and
//!   direction-cosine matrices
//! - `SymmetricTensor<T, D>` — symmetric second-rank tensor whose symmetry
//!   holds by construction (every write mirrors both triangles)
//!
//! Everything is generic over the spatial dimension via const generics, so
//! 2-D and 3-D pipelines monomorphize to straight-line array code.
//!
//! [`Scalar`]: strainfield_types::Scalar

pub mod matrix;
pub mod symmetric;
pub mod vector;

pub use matrix::SquareMatrix;
pub use symmetric::SymmetricTensor;
pub use vector::Vector;
