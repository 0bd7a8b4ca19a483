//! Integration tests for strainfield-grid.

use strainfield_grid::{GridGeometry, GridRegion, ScalarField, TensorField, VectorField};
use strainfield_math::{SquareMatrix, Vector};
use strainfield_types::StrainError;

// ─── Geometry Tests ───────────────────────────────────────────

#[test]
fn num_points_is_product_of_sizes() {
    let g = GridGeometry::unit([4, 5, 6]);
    assert_eq!(g.num_points(), 120);
}

#[test]
fn linear_index_has_axis_zero_fastest() {
    let g = GridGeometry::unit([3, 4]);
    assert_eq!(g.linear_index([0, 0]), 0);
    assert_eq!(g.linear_index([1, 0]), 1);
    assert_eq!(g.linear_index([2, 0]), 2);
    assert_eq!(g.linear_index([0, 1]), 3);
    assert_eq!(g.linear_index([2, 3]), 11);
}

#[test]
fn index_to_physical_applies_spacing_and_origin() {
    let g = GridGeometry::axis_aligned([20, 20], [0.7, 0.7], [-10.0, -10.0]);
    let p = g.index_to_physical([0, 0]);
    assert_eq!(p.as_array(), &[-10.0, -10.0]);
    let p = g.index_to_physical([3, 1]);
    assert!((p[0] - (-10.0 + 2.1)).abs() < 1e-12);
    assert!((p[1] - (-10.0 + 0.7)).abs() < 1e-12);
}

#[test]
fn index_to_physical_applies_direction_cosines() {
    // 90° rotation: grid axis 0 points along physical +y.
    let direction = SquareMatrix::from_rows([[0.0, -1.0], [1.0, 0.0]]);
    let g = GridGeometry::axis_aligned([4, 4], [2.0, 1.0], [1.0, 1.0]).with_direction(direction);
    let p = g.index_to_physical([1, 0]);
    assert!((p[0] - 1.0).abs() < 1e-12);
    assert!((p[1] - 3.0).abs() < 1e-12);
}

#[test]
fn validate_rejects_degenerate_grids() {
    let g = GridGeometry::unit([0, 4]);
    assert!(matches!(
        g.validate(),
        Err(StrainError::InvalidConfiguration(_))
    ));

    let g = GridGeometry::axis_aligned([4, 4], [1.0, -0.5], [0.0, 0.0]);
    assert!(matches!(
        g.validate(),
        Err(StrainError::InvalidConfiguration(_))
    ));

    assert!(GridGeometry::unit([4, 4]).validate().is_ok());
}

// ─── Region Tests ─────────────────────────────────────────────

#[test]
fn region_iteration_matches_storage_order() {
    let g = GridGeometry::unit([2, 3]);
    let indices: Vec<_> = g.region().iter().collect();
    assert_eq!(
        indices,
        vec![[0, 0], [1, 0], [0, 1], [1, 1], [0, 2], [1, 2]]
    );
    for (flat, index) in indices.into_iter().enumerate() {
        assert_eq!(g.linear_index(index), flat);
    }
}

#[test]
fn empty_region_yields_no_indices() {
    let r = GridRegion::<2> {
        index: [0, 0],
        size: [3, 0],
    };
    assert_eq!(r.num_points(), 0);
    assert_eq!(r.iter().count(), 0);
}

#[test]
fn split_covers_the_region_disjointly() {
    let r = GridRegion::<2> {
        index: [0, 0],
        size: [5, 7],
    };
    let parts = r.split_along_slowest(3);
    assert_eq!(parts.len(), 3);

    // Thickness 3 + 2 + 2 along the slow axis, contiguous and in order.
    assert_eq!(parts[0].size[1], 3);
    assert_eq!(parts[1].size[1], 2);
    assert_eq!(parts[2].size[1], 2);
    assert_eq!(parts[0].index[1], 0);
    assert_eq!(parts[1].index[1], 3);
    assert_eq!(parts[2].index[1], 5);

    let total: usize = parts.iter().map(|p| p.num_points()).sum();
    assert_eq!(total, r.num_points());

    // Fast axes untouched.
    for p in &parts {
        assert_eq!(p.index[0], 0);
        assert_eq!(p.size[0], 5);
    }
}

#[test]
fn split_never_returns_empty_pieces() {
    let r = GridRegion::<2> {
        index: [0, 0],
        size: [4, 2],
    };
    let parts = r.split_along_slowest(8);
    assert_eq!(parts.len(), 2);
    assert!(parts.iter().all(|p| p.num_points() > 0));

    let parts = r.split_along_slowest(1);
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0], r);
}

// ─── Field Tests ──────────────────────────────────────────────

#[test]
fn scalar_field_get_set_round_trip() {
    let g = GridGeometry::unit([3, 3]);
    let mut f = ScalarField::new(g);
    f.set([1, 2], 4.5);
    assert_eq!(f.get([1, 2]), 4.5);
    assert_eq!(f.get([0, 0]), 0.0);
}

#[test]
fn field_from_vec_checks_length() {
    let g = GridGeometry::unit([2, 2]);
    assert!(ScalarField::from_vec(g, vec![1.0f64; 4]).is_ok());
    assert!(matches!(
        ScalarField::from_vec(g, vec![1.0f64; 3]),
        Err(StrainError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        VectorField::from_vec(g, vec![Vector::<f64, 2>::zeros(); 5]),
        Err(StrainError::InvalidConfiguration(_))
    ));
}

#[test]
fn field_from_fn_evaluates_every_index() {
    let g = GridGeometry::unit([3, 2]);
    let f = ScalarField::from_fn(g, |[i, j]| (i + 10 * j) as f64);
    assert_eq!(f.get([2, 1]), 12.0);
    assert_eq!(f.data().len(), 6);
}

#[test]
fn tensor_field_starts_at_zero() {
    let g = GridGeometry::unit([4, 4]);
    let t = TensorField::<f64, 2>::new(g);
    assert_eq!(t.data().len(), 16);
    assert!(t.data().iter().all(|s| s.max_abs() == 0.0));
}
