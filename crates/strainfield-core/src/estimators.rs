//! Built-in gradient estimator.
//!
//! Central differences is the default strategy for the displacement path,
//! matching the conventional choice for strain estimation from sampled
//! fields. Any other estimator can be substituted through the traits in
//! [`crate::gradient`]; nothing in the engine depends on this one.

use strainfield_grid::{GridGeometry, ScalarField, VectorField};
use strainfield_math::{SquareMatrix, Vector};
use strainfield_types::Scalar;

use crate::gradient::{ScalarGradientEstimator, VectorGradientEstimator};

/// Spacing-aware finite differences: central in the interior, one-sided at
/// boundaries, rotated into physical axes by the grid's direction-cosine
/// matrix.
///
/// Exact for fields that are linear in the coordinates, including at the
/// boundary (the one-sided stencil is first-order in general but exact for
/// linear fields).
#[derive(Debug, Clone, Copy, Default)]
pub struct CentralDifferenceGradient;

#[inline]
fn offset<const D: usize>(mut index: [usize; D], axis: usize, delta: isize) -> [usize; D] {
    index[axis] = (index[axis] as isize + delta) as usize;
    index
}

/// Derivative along one grid axis of an arbitrary per-index sample.
fn axis_derivative<T: Scalar, const D: usize>(
    geometry: &GridGeometry<D>,
    index: [usize; D],
    axis: usize,
    sample: impl Fn([usize; D]) -> T,
) -> T {
    let extent = geometry.size[axis];
    if extent < 2 {
        return T::ZERO;
    }
    let h = T::from_f64(geometry.spacing[axis]);
    let i = index[axis];
    if i == 0 {
        (sample(offset(index, axis, 1)) - sample(index)) / h
    } else if i == extent - 1 {
        (sample(index) - sample(offset(index, axis, -1))) / h
    } else {
        (sample(offset(index, axis, 1)) - sample(offset(index, axis, -1))) / (T::TWO * h)
    }
}

impl<T: Scalar, const D: usize> ScalarGradientEstimator<T, D> for CentralDifferenceGradient {
    fn gradient_at(&self, field: &ScalarField<T, D>, index: [usize; D]) -> Vector<T, D> {
        let geometry = field.geometry();
        let mut gradient = Vector::zeros();
        for axis in 0..D {
            gradient[axis] = axis_derivative(geometry, index, axis, |i| field.get(i));
        }
        // Index-space gradient → physical axes.
        let direction = geometry.direction.map(T::from_f64);
        direction.mul_vector(&gradient)
    }
}

impl<T: Scalar, const D: usize> VectorGradientEstimator<T, D> for CentralDifferenceGradient {
    fn jacobian_at(&self, field: &VectorField<T, D>, index: [usize; D]) -> SquareMatrix<T, D> {
        let geometry = field.geometry();
        let mut jacobian = SquareMatrix::zeros();
        for axis in 0..D {
            for c in 0..D {
                jacobian[(c, axis)] =
                    axis_derivative(geometry, index, axis, |i| field.get(i)[c]);
            }
        }
        // Columns are per-axis derivatives; rotate them into physical axes.
        let direction_t = geometry.direction.map(T::from_f64).transpose();
        jacobian.mul_matrix(&direction_t)
    }
}
