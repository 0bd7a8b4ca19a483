//! Grid geometry: the physical description of a regular lattice.
//!
//! A grid is fully described by per-axis point counts, spacing, an origin,
//! and a direction-cosine matrix. Together these determine the physical
//! coordinate of every grid index:
//!
//! ```text
//! p = origin + direction · (spacing ⊙ index)
//! ```
//!
//! Coordinates are always `f64`; only sample values are precision-generic.

use strainfield_math::{SquareMatrix, Vector};
use strainfield_types::{StrainError, StrainResult};

use crate::region::GridRegion;

/// A physical coordinate.
pub type Point<const D: usize> = Vector<f64, D>;

/// Geometry of a regular D-dimensional grid.
///
/// Flat storage order has axis 0 varying fastest, axis `D - 1` slowest;
/// [`GridGeometry::linear_index`] defines the mapping and region splitting
/// relies on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry<const D: usize> {
    /// Point counts per axis.
    pub size: [usize; D],
    /// Physical distance between neighboring points along each axis.
    pub spacing: [f64; D],
    /// Physical coordinate of index `[0; D]`.
    pub origin: [f64; D],
    /// Orientation of the grid axes in physical space.
    pub direction: SquareMatrix<f64, D>,
}

impl<const D: usize> GridGeometry<D> {
    /// Axis-aligned geometry (identity direction).
    pub fn axis_aligned(size: [usize; D], spacing: [f64; D], origin: [f64; D]) -> Self {
        Self {
            size,
            spacing,
            origin,
            direction: SquareMatrix::identity(),
        }
    }

    /// Unit geometry: spacing 1, origin 0, identity direction.
    pub fn unit(size: [usize; D]) -> Self {
        Self::axis_aligned(size, [1.0; D], [0.0; D])
    }

    /// Replaces the direction-cosine matrix.
    pub fn with_direction(mut self, direction: SquareMatrix<f64, D>) -> Self {
        self.direction = direction;
        self
    }

    /// Total number of grid points.
    pub fn num_points(&self) -> usize {
        self.size.iter().product()
    }

    /// The full-grid region.
    pub fn region(&self) -> GridRegion<D> {
        GridRegion {
            index: [0; D],
            size: self.size,
        }
    }

    /// Flat storage offset of a grid index (axis 0 fastest).
    #[inline]
    pub fn linear_index(&self, index: [usize; D]) -> usize {
        let mut flat = 0;
        let mut stride = 1;
        for axis in 0..D {
            flat += index[axis] * stride;
            stride *= self.size[axis];
        }
        flat
    }

    /// Physical coordinate of a grid index.
    #[inline]
    pub fn index_to_physical(&self, index: [usize; D]) -> Point<D> {
        let mut scaled = Vector::<f64, D>::zeros();
        for axis in 0..D {
            scaled[axis] = index[axis] as f64 * self.spacing[axis];
        }
        let rotated = self.direction.mul_vector(&scaled);
        let mut point = rotated;
        for axis in 0..D {
            point[axis] += self.origin[axis];
        }
        point
    }

    /// Checks that the geometry describes a usable, non-degenerate grid.
    pub fn validate(&self) -> StrainResult<()> {
        if D == 0 {
            return Err(StrainError::InvalidConfiguration(
                "grid dimension must be at least 1".into(),
            ));
        }
        for axis in 0..D {
            if self.size[axis] == 0 {
                return Err(StrainError::InvalidConfiguration(format!(
                    "grid size along axis {axis} is zero"
                )));
            }
            if !(self.spacing[axis].is_finite() && self.spacing[axis] > 0.0) {
                return Err(StrainError::InvalidConfiguration(format!(
                    "grid spacing along axis {axis} must be finite and positive, got {}",
                    self.spacing[axis]
                )));
            }
        }
        Ok(())
    }
}
