//! Numeric constants shared across the engine.

/// Tolerance for floating-point comparisons in f32 pipelines.
pub const EPSILON_F32: f32 = 1.0e-6;

/// Tolerance for floating-point comparisons in f64 pipelines.
pub const EPSILON_F64: f64 = 1.0e-12;
