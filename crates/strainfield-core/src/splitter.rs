//! Component splitting for multi-component fields.
//!
//! A per-component scalar gradient estimator cannot see a vector field
//! directly; the splitter extracts one scalar field per requested component
//! so the estimator can run on each independently. Components excluded by
//! the mask are never materialized.

use serde::{Deserialize, Serialize};
use strainfield_grid::{ScalarField, VectorField};
use strainfield_types::{Scalar, StrainError, StrainResult};

/// Selects which components of a multi-component input participate in a
/// pass. One entry per component; the default is all true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentMask {
    entries: Vec<bool>,
}

impl ComponentMask {
    /// All `components` entries active.
    pub fn all(components: usize) -> Self {
        Self {
            entries: vec![true; components],
        }
    }

    /// All `components` entries inactive.
    pub fn none(components: usize) -> Self {
        Self {
            entries: vec![false; components],
        }
    }

    /// Mask from explicit entries.
    pub fn from_slice(entries: &[bool]) -> Self {
        Self {
            entries: entries.to_vec(),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the mask has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether component `c` is active. Out-of-range reads are inactive.
    pub fn is_active(&self, c: usize) -> bool {
        self.entries.get(c).copied().unwrap_or(false)
    }

    /// Number of active components.
    pub fn active_count(&self) -> usize {
        self.entries.iter().filter(|&&a| a).count()
    }

    /// Checks the mask length against a field's component count.
    pub fn validate_for(&self, components: usize) -> StrainResult<()> {
        if self.entries.len() != components {
            return Err(StrainError::InvalidConfiguration(format!(
                "component mask has {} entries for a {}-component field",
                self.entries.len(),
                components
            )));
        }
        Ok(())
    }
}

/// Splits a vector field into per-component scalar fields.
///
/// Returns one slot per component: `Some` holding an independently
/// addressable scalar field for each active component, `None` (nothing
/// allocated) for each masked-out component. An all-false mask is legal and
/// allocates nothing.
pub fn split_components<T: Scalar, const D: usize>(
    field: &VectorField<T, D>,
    mask: &ComponentMask,
) -> StrainResult<Vec<Option<ScalarField<T, D>>>> {
    mask.validate_for(D)?;

    let geometry = *field.geometry();
    let mut outputs = Vec::with_capacity(D);
    for c in 0..D {
        if mask.is_active(c) {
            let data = field.data().iter().map(|v| v[c]).collect();
            // Length matches by construction; from_vec re-checks anyway.
            outputs.push(Some(ScalarField::from_vec(geometry, data)?));
        } else {
            outputs.push(None);
        }
    }
    Ok(outputs)
}
