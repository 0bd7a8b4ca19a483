//! # strainfield-types
//!
//! Shared types, error definitions, and numeric constants for the
//! strainfield engine.
//!
//! This crate has zero domain logic — it defines the vocabulary that all
//! other strainfield crates share.

pub mod constants;
pub mod error;
pub mod scalar;

pub use error::{StrainError, StrainResult};
pub use scalar::Scalar;
