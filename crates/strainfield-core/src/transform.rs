//! Coordinate transforms as analytic Jacobian sources.
//!
//! The transform path needs no gradient estimation at all: the Jacobian of
//! the mapping is evaluated exactly at each grid point's physical location.

use strainfield_grid::{GridGeometry, Point, VectorField};
use strainfield_math::{SquareMatrix, Vector};
use strainfield_types::Scalar;

/// A continuous coordinate transform with an analytic derivative.
///
/// Coordinates are `f64`; the Jacobian is delivered in the pass's value
/// type. Implementations must be stateless with respect to evaluation so
/// they can be invoked concurrently for disjoint points.
pub trait SpatialTransform<T: Scalar, const D: usize>: Send + Sync {
    /// Maps a physical point through the transform.
    fn transform_point(&self, point: &Point<D>) -> Point<D>;

    /// Jacobian of the mapping with respect to position at `point`.
    fn jacobian_at(&self, point: &Point<D>) -> SquareMatrix<T, D>;
}

/// An affine map `x ↦ A·x + b` with constant Jacobian `A`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform<const D: usize> {
    /// Linear part.
    pub matrix: SquareMatrix<f64, D>,
    /// Translation part.
    pub translation: Vector<f64, D>,
}

impl<const D: usize> AffineTransform<D> {
    /// The identity map.
    pub fn identity() -> Self {
        Self {
            matrix: SquareMatrix::identity(),
            translation: Vector::zeros(),
        }
    }

    /// Affine map from its linear and translation parts.
    pub fn new(matrix: SquareMatrix<f64, D>, translation: Vector<f64, D>) -> Self {
        Self {
            matrix,
            translation,
        }
    }

    /// Pure linear map (zero translation).
    pub fn from_matrix(matrix: SquareMatrix<f64, D>) -> Self {
        Self::new(matrix, Vector::zeros())
    }

    /// Maps a point: `A·x + b`.
    pub fn transform_point(&self, point: &Point<D>) -> Point<D> {
        self.matrix.mul_vector(point) + self.translation
    }
}

impl<T: Scalar, const D: usize> SpatialTransform<T, D> for AffineTransform<D> {
    fn transform_point(&self, point: &Point<D>) -> Point<D> {
        AffineTransform::transform_point(self, point)
    }

    fn jacobian_at(&self, _point: &Point<D>) -> SquareMatrix<T, D> {
        self.matrix.map(T::from_f64)
    }
}

/// A planar rotation by `angle` radians in the first two axes, as a linear
/// map. Its Jacobian is orthogonal: a pure rigid rotation with no strain.
pub fn rotation<const D: usize>(angle: f64) -> AffineTransform<D> {
    let mut matrix = SquareMatrix::identity();
    if D >= 2 {
        let (sin, cos) = angle.sin_cos();
        matrix[(0, 0)] = cos;
        matrix[(0, 1)] = -sin;
        matrix[(1, 0)] = sin;
        matrix[(1, 1)] = cos;
    }
    AffineTransform::from_matrix(matrix)
}

/// Samples the displacement field `u(x) = T(x) − x` of a transform onto a
/// grid, for feeding the displacement path with a known deformation.
pub fn displacement_from_transform<T: Scalar, const D: usize>(
    transform: &dyn SpatialTransform<T, D>,
    geometry: GridGeometry<D>,
) -> VectorField<T, D> {
    VectorField::from_fn(geometry, |index| {
        let point = geometry.index_to_physical(index);
        let mapped = transform.transform_point(&point);
        (mapped - point).map(T::from_f64)
    })
}
