//! # strainfield-core
//!
//! The strain tensor field engine.
//!
//! Computes a symmetric second-rank strain tensor at every point of a
//! regular grid, from either a sampled displacement field or an analytic
//! coordinate transform.
//!
//! ## Key Types
//!
//! - [`StrainFieldEvaluator`] — configures and runs one evaluation pass
//! - [`StrainForm`] — infinitesimal, Green-Lagrangian, or Eulerian-Almansi
//! - [`ScalarGradientEstimator`] / [`VectorGradientEstimator`] — pluggable
//!   gradient strategies for the displacement path
//! - [`SpatialTransform`] — analytic Jacobian source for the transform path
//! - [`ComponentMask`] — selects which displacement components are split
//!   out and processed
//!
//! ## Pipeline
//!
//! ```text
//! displacement field ─ split ─ gradient estimator ┐
//!                                                 ├─ Jacobian ─ strain formula ─ tensor field
//! transform ─ analytic derivative at grid points ─┘
//! ```
//!
//! The pass is embarrassingly parallel: the grid is split along its
//! slowest-varying axis and each sub-region is evaluated independently.

pub mod estimators;
pub mod evaluator;
pub mod form;
pub mod gradient;
pub mod splitter;
pub mod strain;
pub mod transform;

pub use estimators::CentralDifferenceGradient;
pub use evaluator::StrainFieldEvaluator;
pub use form::StrainForm;
pub use gradient::{JacobianSource, ScalarGradientEstimator, VectorGradientEstimator};
pub use splitter::{split_components, ComponentMask};
pub use strain::strain_from_jacobian;
pub use transform::{displacement_from_transform, rotation, AffineTransform, SpatialTransform};
