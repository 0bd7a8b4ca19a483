//! The parallel evaluation pass.
//!
//! `StrainFieldEvaluator` is plain value configuration — references to the
//! input, the strategies, the mask, and the form — plus a stateless
//! [`run`](StrainFieldEvaluator::run). All validation happens once, before
//! any region is dispatched: a failed run raises deterministically and
//! writes nothing.

use rayon::prelude::*;
use strainfield_grid::{GridGeometry, TensorField, VectorField};
use strainfield_types::{Scalar, StrainError, StrainResult};

use crate::estimators::CentralDifferenceGradient;
use crate::form::StrainForm;
use crate::gradient::{JacobianSource, ScalarGradientEstimator, VectorGradientEstimator};
use crate::splitter::{split_components, ComponentMask};
use crate::strain::strain_from_jacobian;
use crate::transform::SpatialTransform;

/// Configuration for one strain evaluation pass.
///
/// Two input modes:
/// - displacement mode — a [`VectorField`] plus a gradient estimator
///   (vector estimator wins over scalar if both are configured);
/// - transform mode — a [`SpatialTransform`] plus an output domain.
///
/// A configured displacement field takes precedence over a configured
/// transform. The configuration is read-only during the pass; running the
/// same evaluator twice produces bit-identical output.
pub struct StrainFieldEvaluator<'a, T: Scalar, const D: usize> {
    displacement: Option<&'a VectorField<T, D>>,
    transform: Option<&'a dyn SpatialTransform<T, D>>,
    output_geometry: Option<GridGeometry<D>>,
    scalar_estimator: Option<&'a dyn ScalarGradientEstimator<T, D>>,
    vector_estimator: Option<&'a dyn VectorGradientEstimator<T, D>>,
    mask: Option<ComponentMask>,
    form: StrainForm,
}

impl<'a, T: Scalar, const D: usize> StrainFieldEvaluator<'a, T, D> {
    /// Empty configuration: no input, no strategies, default form.
    pub fn new() -> Self {
        Self {
            displacement: None,
            transform: None,
            output_geometry: None,
            scalar_estimator: None,
            vector_estimator: None,
            mask: None,
            form: StrainForm::default(),
        }
    }

    /// Displacement mode with the default central-difference estimator.
    pub fn from_displacement(displacement: &'a VectorField<T, D>) -> Self {
        Self::new()
            .with_displacement(displacement)
            .with_scalar_estimator(&CentralDifferenceGradient)
    }

    /// Transform mode over an explicit output domain.
    pub fn from_transform(
        transform: &'a dyn SpatialTransform<T, D>,
        geometry: GridGeometry<D>,
    ) -> Self {
        Self::new().with_transform(transform).with_domain(geometry)
    }

    /// Transform mode with the transform to be supplied later.
    pub fn for_domain(geometry: GridGeometry<D>) -> Self {
        Self::new().with_domain(geometry)
    }

    /// Sets the displacement input.
    pub fn with_displacement(mut self, displacement: &'a VectorField<T, D>) -> Self {
        self.displacement = Some(displacement);
        self
    }

    /// Sets the transform input.
    pub fn with_transform(mut self, transform: &'a dyn SpatialTransform<T, D>) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Sets the output domain for transform mode.
    pub fn with_domain(mut self, geometry: GridGeometry<D>) -> Self {
        self.output_geometry = Some(geometry);
        self
    }

    /// Sets the per-component scalar gradient estimator.
    pub fn with_scalar_estimator(
        mut self,
        estimator: &'a dyn ScalarGradientEstimator<T, D>,
    ) -> Self {
        self.scalar_estimator = Some(estimator);
        self
    }

    /// Sets the joint vector gradient estimator. Wins over the scalar
    /// estimator when both are configured.
    pub fn with_vector_estimator(
        mut self,
        estimator: &'a dyn VectorGradientEstimator<T, D>,
    ) -> Self {
        self.vector_estimator = Some(estimator);
        self
    }

    /// Sets the component mask. Only the per-component scalar path consults
    /// it; the default is all components active.
    pub fn with_mask(mut self, mask: ComponentMask) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Sets the strain form.
    pub fn with_form(mut self, form: StrainForm) -> Self {
        self.form = form;
        self
    }

    /// Runs the pass: validate once, zero-initialize, split the domain
    /// along its slowest axis, and evaluate every sub-region in parallel.
    pub fn run(&self) -> StrainResult<TensorField<T, D>> {
        let geometry = match self.displacement {
            Some(displacement) => *displacement.geometry(),
            None => self.output_geometry.ok_or_else(|| {
                StrainError::MissingInput(
                    "no displacement field or output domain configured".into(),
                )
            })?,
        };
        geometry.validate()?;
        let source = self.resolve_source()?;

        let regions = geometry
            .region()
            .split_along_slowest(rayon::current_num_threads());
        tracing::debug!(
            points = geometry.num_points(),
            regions = regions.len(),
            form = ?self.form,
            "starting strain pass"
        );

        let mut output = TensorField::new(geometry);
        let form = self.form;

        // Pair each region with its disjoint slice of the flat output.
        // Regions split along the slowest axis are contiguous and emitted
        // in ascending storage order, so successive splits line up exactly.
        let mut pairs = Vec::with_capacity(regions.len());
        let mut rest = output.data_mut();
        for region in &regions {
            let (chunk, tail) = std::mem::take(&mut rest).split_at_mut(region.num_points());
            pairs.push((region, chunk));
            rest = tail;
        }

        pairs.into_par_iter().for_each(|(region, chunk)| {
            for (slot, index) in chunk.iter_mut().zip(region.iter()) {
                let jacobian = source.jacobian(&geometry, index);
                *slot = strain_from_jacobian(&jacobian, form);
            }
        });

        tracing::debug!("strain pass complete");
        Ok(output)
    }

    /// Resolves which Jacobian strategy is active for this pass, applying
    /// the documented tie-breaks, and performs all configuration checks.
    fn resolve_source(&self) -> StrainResult<JacobianSource<'a, T, D>> {
        if let Some(displacement) = self.displacement {
            if let Some(estimator) = self.vector_estimator {
                return Ok(JacobianSource::VectorJoint {
                    field: displacement,
                    estimator,
                });
            }
            let estimator = self.scalar_estimator.ok_or_else(|| {
                StrainError::MissingInput(
                    "displacement mode requires a gradient estimator".into(),
                )
            })?;
            let mask = match &self.mask {
                Some(mask) => mask.clone(),
                None => ComponentMask::all(D),
            };
            let components = split_components(displacement, &mask)?;
            return Ok(JacobianSource::SplitScalar {
                components,
                estimator,
            });
        }

        let transform = self.transform.ok_or_else(|| {
            StrainError::MissingInput("transform mode requires a transform".into())
        })?;
        Ok(JacobianSource::TransformAnalytic { transform })
    }
}

impl<T: Scalar, const D: usize> Default for StrainFieldEvaluator<'_, T, D> {
    fn default() -> Self {
        Self::new()
    }
}
