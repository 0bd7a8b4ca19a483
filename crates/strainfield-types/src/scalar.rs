//! Scalar precision abstraction.
//!
//! Field values are generic over `Scalar` so a pipeline can run in `f32`
//! (half the memory, GPU-friendly buffers downstream) or `f64` (validation,
//! reference runs) with zero-cost monomorphization. Grid coordinates stay
//! `f64` regardless; only sample values switch precision.

use std::fmt::{Debug, Display};

use num_traits::{Float, NumAssign};

mod private {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Floating-point type usable as a field value.
///
/// Sealed: only `f32` and `f64` implement this. Use it as a generic bound
/// (`<T: Scalar>`), never as a trait object.
pub trait Scalar:
    private::Sealed
    + Float
    + NumAssign
    + Default
    + Debug
    + Display
    + Send
    + Sync
    + 'static
{
    /// `0.0`
    const ZERO: Self;

    /// `1.0`
    const ONE: Self;

    /// `2.0`
    const TWO: Self;

    /// `0.5`
    const HALF: Self;

    /// Machine epsilon.
    const EPSILON: Self;

    /// Convert a configuration-layer `f64` to this type. Lossy for `f32`.
    fn from_f64(value: f64) -> Self;

    /// Widen to `f64` for reporting or cross-crate interfaces.
    fn to_f64(self) -> f64;
}

impl Scalar for f32 {
    const ZERO: f32 = 0.0;
    const ONE: f32 = 1.0;
    const TWO: f32 = 2.0;
    const HALF: f32 = 0.5;
    const EPSILON: f32 = f32::EPSILON;

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Scalar for f64 {
    const ZERO: f64 = 0.0;
    const ONE: f64 = 1.0;
    const TWO: f64 = 2.0;
    const HALF: f64 = 0.5;
    const EPSILON: f64 = f64::EPSILON;

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}
