//! Jacobian acquisition strategies.
//!
//! Three interchangeable ways to obtain the deformation-mapping Jacobian at
//! a grid point, resolved once per pass into a [`JacobianSource`]:
//!
//! 1. per-component scalar gradients of a split displacement field,
//! 2. a joint vector gradient of the whole displacement field,
//! 3. the analytic derivative of a coordinate transform.
//!
//! Estimators return *displacement* gradients (row `i` = gradient of
//! displacement component `i`); the source adds the identity so every
//! strategy hands the strain formulas the same quantity, the Jacobian of
//! the deformation mapping `x ↦ x + u(x)`.
//!
//! All strategies are invoked concurrently for disjoint points; none may
//! hold mutable state across invocations.

use strainfield_grid::{GridGeometry, ScalarField, VectorField};
use strainfield_math::{SquareMatrix, Vector};
use strainfield_types::Scalar;

use crate::transform::SpatialTransform;

/// Estimates the covariant gradient of a scalar field at a grid index,
/// with respect to physical coordinates.
pub trait ScalarGradientEstimator<T: Scalar, const D: usize>: Send + Sync {
    fn gradient_at(&self, field: &ScalarField<T, D>, index: [usize; D]) -> Vector<T, D>;
}

/// Estimates the full displacement gradient of a vector field at a grid
/// index in one call, for strategies that must see all components jointly
/// (e.g. smoothing across components).
///
/// Row `i` of the result is the gradient of component `i` with respect to
/// physical coordinates.
pub trait VectorGradientEstimator<T: Scalar, const D: usize>: Send + Sync {
    fn jacobian_at(&self, field: &VectorField<T, D>, index: [usize; D]) -> SquareMatrix<T, D>;
}

/// The resolved per-pass Jacobian strategy.
///
/// Exactly one variant is active per pass. Resolution applies two
/// documented tie-breaks: a configured vector estimator wins over a scalar
/// estimator, and a configured displacement field wins over a transform.
pub enum JacobianSource<'a, T: Scalar, const D: usize> {
    /// Per-component scalar gradients of the split displacement field.
    /// Masked-out components hold no field and contribute a zero
    /// displacement-gradient row.
    SplitScalar {
        components: Vec<Option<ScalarField<T, D>>>,
        estimator: &'a dyn ScalarGradientEstimator<T, D>,
    },
    /// Joint vector gradient of the displacement field.
    VectorJoint {
        field: &'a VectorField<T, D>,
        estimator: &'a dyn VectorGradientEstimator<T, D>,
    },
    /// Analytic transform derivative evaluated at the point's physical
    /// location.
    TransformAnalytic {
        transform: &'a dyn SpatialTransform<T, D>,
    },
}

impl<T: Scalar, const D: usize> JacobianSource<'_, T, D> {
    /// The deformation-mapping Jacobian at one grid point.
    ///
    /// Safe to call concurrently for disjoint points: `&self` only.
    pub fn jacobian(&self, geometry: &GridGeometry<D>, index: [usize; D]) -> SquareMatrix<T, D> {
        match self {
            JacobianSource::SplitScalar {
                components,
                estimator,
            } => {
                let mut jacobian = SquareMatrix::identity();
                for (c, component) in components.iter().enumerate() {
                    if let Some(component) = component {
                        let gradient = estimator.gradient_at(component, index);
                        for j in 0..D {
                            jacobian[(c, j)] += gradient[j];
                        }
                    }
                }
                jacobian
            }
            JacobianSource::VectorJoint { field, estimator } => {
                estimator.jacobian_at(field, index) + SquareMatrix::identity()
            }
            JacobianSource::TransformAnalytic { transform } => {
                let point = geometry.index_to_physical(index);
                transform.jacobian_at(&point)
            }
        }
    }
}
