use super::*;
use crate::foundation::core::Point2D;

fn approx_eq(a: &Matrix2D, b: &Matrix2D) -> bool {
    let (x, y) = (a.to_affine().as_coeffs(), b.to_affine().as_coeffs());
    x.iter().zip(y.iter()).all(|(p, q)| (p - q).abs() < 1e-9)
}

fn sample_base() -> Matrix2D {
    Matrix2D::new(0.8, 0.6, -0.6, 0.8, 12.0, -7.5)
}

#[test]
fn identity_delta_leaves_base_unchanged() {
    let base = sample_base();
    assert_eq!(compose_tween_matrix(&base, &Matrix2D::IDENTITY), base);
}

#[test]
fn composition_matches_affine_product() {
    let base = sample_base();
    let delta = Matrix2D::new(2.0, 0.25, -0.5, 1.5, 3.0, 4.0);
    let expected = Matrix2D::from_affine(delta.to_affine() * base.to_affine());
    assert!(approx_eq(&compose_tween_matrix(&base, &delta), &expected));

    let p = Point2D::new(3.0, -2.0);
    let via_compose = compose_tween_matrix(&base, &delta).transform_point(p);
    let stepwise = delta.transform_point(base.transform_point(p));
    assert!((via_compose - stepwise).hypot() < 1e-9);
}

#[test]
fn successive_composition_is_associative() {
    let base = sample_base();
    let t1 = Matrix2D::new(1.0, 0.0, 0.0, 1.0, 5.0, 5.0);
    let t2 = Matrix2D::new(0.0, 1.0, -1.0, 0.0, 0.0, 2.0);
    let stepwise = compose_tween_matrix(&compose_tween_matrix(&base, &t1), &t2);
    let combined = compose_tween_matrix(&base, &compose_tween_matrix(&t1, &t2));
    assert!(approx_eq(&stepwise, &combined));
}

#[test]
fn missing_parts_fall_back() {
    let base = sample_base();
    let delta = Matrix2D::translate(1.0, 2.0);
    assert_eq!(resolve_matrix(Some(&base), None), Some(base));
    assert_eq!(resolve_matrix(None, Some(&delta)), Some(delta));
    assert_eq!(resolve_matrix(None, None), None);
}

#[test]
fn color_tween_overrides_static_color() {
    let stat = ColorMatrix {
        mul: [0.5; 4],
        add: [0.0; 4],
    };
    let tween = ColorMatrix {
        mul: [1.0; 4],
        add: [10.0; 4],
    };
    assert_eq!(resolve_color(Some(&stat), Some(tween)), Some(tween));
    assert_eq!(resolve_color(Some(&stat), None), Some(stat));
    assert_eq!(resolve_color(None, None), None);
}
