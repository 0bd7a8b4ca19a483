//! Per-point sample containers.
//!
//! Each field owns a flat `Vec` of samples in the geometry's storage order
//! (axis 0 fastest). Constructors that accept caller data validate the
//! length against the geometry so shape mismatches surface as configuration
//! errors instead of panics deep in a pass.

use strainfield_math::{SymmetricTensor, Vector};
use strainfield_types::{Scalar, StrainError, StrainResult};

use crate::geometry::GridGeometry;

/// A scalar sample per grid point.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField<T, const D: usize> {
    geometry: GridGeometry<D>,
    data: Vec<T>,
}

impl<T: Scalar, const D: usize> ScalarField<T, D> {
    /// Zero-filled field over `geometry`.
    pub fn new(geometry: GridGeometry<D>) -> Self {
        Self {
            data: vec![T::ZERO; geometry.num_points()],
            geometry,
        }
    }

    /// Wraps existing samples; the length must match the geometry.
    pub fn from_vec(geometry: GridGeometry<D>, data: Vec<T>) -> StrainResult<Self> {
        if data.len() != geometry.num_points() {
            return Err(StrainError::InvalidConfiguration(format!(
                "field has {} samples but the grid has {} points",
                data.len(),
                geometry.num_points()
            )));
        }
        Ok(Self { geometry, data })
    }

    /// Builds a field by evaluating `f` at every index.
    pub fn from_fn(geometry: GridGeometry<D>, f: impl Fn([usize; D]) -> T) -> Self {
        let mut field = Self::new(geometry);
        for index in geometry.region().iter() {
            field.set(index, f(index));
        }
        field
    }

    /// The grid this field is sampled on.
    #[inline]
    pub fn geometry(&self) -> &GridGeometry<D> {
        &self.geometry
    }

    /// Sample at a grid index.
    #[inline]
    pub fn get(&self, index: [usize; D]) -> T {
        self.data[self.geometry.linear_index(index)]
    }

    /// Overwrites the sample at a grid index.
    #[inline]
    pub fn set(&mut self, index: [usize; D], value: T) {
        let flat = self.geometry.linear_index(index);
        self.data[flat] = value;
    }

    /// Flat sample storage.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }
}

/// A D-component vector sample per grid point (e.g. a displacement field).
#[derive(Debug, Clone, PartialEq)]
pub struct VectorField<T, const D: usize> {
    geometry: GridGeometry<D>,
    data: Vec<Vector<T, D>>,
}

impl<T: Scalar, const D: usize> VectorField<T, D> {
    /// Zero-filled field over `geometry`.
    pub fn new(geometry: GridGeometry<D>) -> Self {
        Self {
            data: vec![Vector::zeros(); geometry.num_points()],
            geometry,
        }
    }

    /// Wraps existing samples; the length must match the geometry.
    pub fn from_vec(geometry: GridGeometry<D>, data: Vec<Vector<T, D>>) -> StrainResult<Self> {
        if data.len() != geometry.num_points() {
            return Err(StrainError::InvalidConfiguration(format!(
                "field has {} samples but the grid has {} points",
                data.len(),
                geometry.num_points()
            )));
        }
        Ok(Self { geometry, data })
    }

    /// Builds a field by evaluating `f` at every index.
    pub fn from_fn(geometry: GridGeometry<D>, f: impl Fn([usize; D]) -> Vector<T, D>) -> Self {
        let mut field = Self::new(geometry);
        for index in geometry.region().iter() {
            field.set(index, f(index));
        }
        field
    }

    /// The grid this field is sampled on.
    #[inline]
    pub fn geometry(&self) -> &GridGeometry<D> {
        &self.geometry
    }

    /// Sample at a grid index.
    #[inline]
    pub fn get(&self, index: [usize; D]) -> Vector<T, D> {
        self.data[self.geometry.linear_index(index)]
    }

    /// Overwrites the sample at a grid index.
    #[inline]
    pub fn set(&mut self, index: [usize; D], value: Vector<T, D>) {
        let flat = self.geometry.linear_index(index);
        self.data[flat] = value;
    }

    /// Flat sample storage.
    #[inline]
    pub fn data(&self) -> &[Vector<T, D>] {
        &self.data
    }
}

/// A symmetric tensor sample per grid point: the engine's output.
#[derive(Debug, Clone, PartialEq)]
pub struct TensorField<T, const D: usize> {
    geometry: GridGeometry<D>,
    data: Vec<SymmetricTensor<T, D>>,
}

impl<T: Scalar, const D: usize> TensorField<T, D> {
    /// Zero-filled field over `geometry`. Uncomputed points therefore read
    /// as the zero tensor.
    pub fn new(geometry: GridGeometry<D>) -> Self {
        Self {
            data: vec![SymmetricTensor::zeros(); geometry.num_points()],
            geometry,
        }
    }

    /// The grid this field is sampled on.
    #[inline]
    pub fn geometry(&self) -> &GridGeometry<D> {
        &self.geometry
    }

    /// Sample at a grid index.
    #[inline]
    pub fn get(&self, index: [usize; D]) -> SymmetricTensor<T, D> {
        self.data[self.geometry.linear_index(index)]
    }

    /// Flat sample storage.
    #[inline]
    pub fn data(&self) -> &[SymmetricTensor<T, D>] {
        &self.data
    }

    /// Mutable flat sample storage.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [SymmetricTensor<T, D>] {
        &mut self.data
    }
}
