//! Jacobian → strain tensor formulas.
//!
//! Pure per-point arithmetic, shared by every Jacobian strategy. The input
//! is always the Jacobian of the deformation mapping `x ↦ x + u(x)`, so a
//! null deformation is `J = I` and yields the zero tensor under every form.

use strainfield_math::{SquareMatrix, SymmetricTensor};
use strainfield_types::Scalar;

use crate::form::StrainForm;

/// Maps a deformation-mapping Jacobian to a strain tensor.
///
/// - `Infinitesimal`: `(J + Jᵀ)/2 − I`.
/// - `GreenLagrangian`: the infinitesimal base plus the quadratic
///   correction `+1/2 Σᵢ D[i][j]·D[i][k]` with `D = J − I`.
/// - `EulerianAlmansi`: the same correction subtracted.
///
/// The result is symmetric by construction: mirrored writes, no post-hoc
/// symmetrization.
pub fn strain_from_jacobian<T: Scalar, const D: usize>(
    jacobian: &SquareMatrix<T, D>,
    form: StrainForm,
) -> SymmetricTensor<T, D> {
    let mut tensor = SymmetricTensor::zeros();

    // Symmetrized half-sum; the diagonal subtracts the unit Jacobian of a
    // null deformation.
    for i in 0..D {
        tensor.set(i, i, jacobian[(i, i)] - T::ONE);
        for j in (i + 1)..D {
            tensor.set(i, j, (jacobian[(i, j)] + jacobian[(j, i)]) * T::HALF);
        }
    }

    match form {
        StrainForm::Infinitesimal => {}
        StrainForm::GreenLagrangian => accumulate_quadratic(jacobian, &mut tensor, T::ONE),
        StrainForm::EulerianAlmansi => accumulate_quadratic(jacobian, &mut tensor, -T::ONE),
    }

    tensor
}

/// Accumulates `sign · 1/2 Σᵢ D[i][j]·D[i][k]` onto the tensor.
///
/// The correction must come from the displacement part `D = J − I`, never
/// the raw Jacobian: squaring `J` itself would register a pure rigid
/// rotation as strain.
fn accumulate_quadratic<T: Scalar, const D: usize>(
    jacobian: &SquareMatrix<T, D>,
    tensor: &mut SymmetricTensor<T, D>,
    sign: T,
) {
    let displacement = *jacobian - SquareMatrix::identity();
    for j in 0..D {
        for k in 0..=j {
            let mut acc = T::ZERO;
            for i in 0..D {
                acc += displacement[(i, j)] * displacement[(i, k)];
            }
            tensor.add(j, k, sign * T::HALF * acc);
        }
    }
}
