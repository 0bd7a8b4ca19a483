//! # strainfield-grid
//!
//! Grid domain bookkeeping for the strainfield engine.
//!
//! ## Key Types
//!
//! - [`GridGeometry`] — size, spacing, origin, and direction cosines of a
//!   regular lattice; maps grid indices to physical points
//! - [`GridRegion`] — a rectangular sub-block of a grid, iterable in flat
//!   storage order and splittable along the slowest-varying axis for
//!   parallel dispatch
//! - [`ScalarField`] / [`VectorField`] / [`TensorField`] — per-point sample
//!   containers over a geometry
//!
//! The core engine consumes these through narrow interfaces; it never owns
//! grid memory-layout policy itself.

pub mod field;
pub mod geometry;
pub mod region;

pub use field::{ScalarField, TensorField, VectorField};
pub use geometry::{GridGeometry, Point};
pub use region::GridRegion;
