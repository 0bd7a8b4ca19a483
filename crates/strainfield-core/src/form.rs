//! Strain form selection.

use serde::{Deserialize, Serialize};
use strainfield_types::StrainError;

/// Which formula maps a Jacobian to a strain tensor.
///
/// Set once before a pass and immutable for its duration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrainForm {
    /// Linearized (engineering) strain, accurate for small deformations.
    #[default]
    Infinitesimal,
    /// Finite-strain measure in the reference (material) configuration.
    GreenLagrangian,
    /// Finite-strain measure in the deformed (spatial) configuration.
    EulerianAlmansi,
}

impl StrainForm {
    /// Integer code, matching the conventional 0/1/2 encoding.
    pub fn code(self) -> i32 {
        match self {
            StrainForm::Infinitesimal => 0,
            StrainForm::GreenLagrangian => 1,
            StrainForm::EulerianAlmansi => 2,
        }
    }
}

impl TryFrom<i32> for StrainForm {
    type Error = StrainError;

    /// Converts a raw integer code, rejecting anything outside the three
    /// defined forms. This is the fail-fast boundary: an invalid raw value
    /// can never reach a configured pass.
    fn try_from(code: i32) -> Result<Self, StrainError> {
        match code {
            0 => Ok(StrainForm::Infinitesimal),
            1 => Ok(StrainForm::GreenLagrangian),
            2 => Ok(StrainForm::EulerianAlmansi),
            other => Err(StrainError::InvalidStrainForm(other)),
        }
    }
}
