use super::*;
use crate::foundation::core::Rgba8;
use serde_json::json;

fn key<T>(frame: u32, value: T) -> Keyframe<T> {
    Keyframe {
        frame,
        value,
        ease: Ease::Linear,
    }
}

#[test]
fn ease_endpoints_are_stable() {
    for ease in [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
    ] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert!(ease.apply(0.25) < ease.apply(0.75));
    }
}

#[test]
fn ease_curves_match_their_power() {
    assert_eq!(Ease::InQuad.apply(0.5), 0.25);
    assert_eq!(Ease::OutQuad.apply(0.5), 0.75);
    assert_eq!(Ease::InCubic.apply(0.5), 0.125);
    assert_eq!(Ease::OutCubic.apply(0.5), 0.875);
    assert_eq!(Ease::InOutQuad.apply(0.25), 0.125);
    assert_eq!(Ease::InOutCubic.apply(0.75), 0.9375);
    for ease in [Ease::InOutQuad, Ease::InOutCubic] {
        assert_eq!(ease.apply(0.5), 0.5);
    }
    assert_eq!(Ease::InQuad.apply(-1.0), 0.0);
    assert_eq!(Ease::OutCubic.apply(2.0), 1.0);
}

#[test]
fn keyframes_linear_interpolates_and_clamps() {
    let kf = Keyframes {
        keys: vec![key(0, 0.0), key(10, 10.0)],
        mode: InterpMode::Linear,
    };
    assert_eq!(kf.sample(0).unwrap(), 0.0);
    assert_eq!(kf.sample(5).unwrap(), 5.0);
    assert_eq!(kf.sample(25).unwrap(), 10.0);
}

#[test]
fn keyframes_hold_is_constant_between_keys() {
    let kf = Keyframes {
        keys: vec![key(0, 1.0), key(10, 3.0)],
        mode: InterpMode::Hold,
    };
    assert_eq!(kf.sample(9).unwrap(), 1.0);
    assert_eq!(kf.sample(10).unwrap(), 3.0);
}

#[test]
fn keyframes_validation() {
    let empty: Keyframes<f64> = Keyframes {
        keys: vec![],
        mode: InterpMode::Linear,
    };
    assert!(empty.validate().is_err());
    assert!(empty.sample(0).is_err());

    let unsorted = Keyframes {
        keys: vec![key(5, 0.0), key(1, 1.0)],
        mode: InterpMode::Linear,
    };
    assert!(unsorted.validate().is_err());
}

#[test]
fn matrix_track_interpolates_componentwise() {
    let kf = Keyframes {
        keys: vec![
            key(0, Matrix2D::IDENTITY),
            key(4, Matrix2D::new(3.0, 0.0, 0.0, 3.0, 40.0, -8.0)),
        ],
        mode: InterpMode::Linear,
    };
    assert_eq!(
        kf.sample(2).unwrap(),
        Matrix2D::new(2.0, 0.0, 0.0, 2.0, 20.0, -4.0)
    );
}

fn square(size: f64) -> FilledShape {
    let contour = Path::from_points(vec![
        Point2D::new(0.0, 0.0),
        Point2D::new(size, 0.0),
        Point2D::new(size, size),
        Point2D::new(0.0, size),
    ]);
    FilledShape {
        fill: vec![Region::solid(contour, vec![], Rgba8::opaque(1, 2, 3))],
        stroke: vec![],
    }
}

#[test]
fn shape_lerp_is_pointwise_when_topology_matches() {
    let mid = FilledShape::lerp(&square(2.0), &square(4.0), 0.5);
    assert_eq!(mid, square(3.0));
}

#[test]
fn shape_lerp_holds_on_topology_mismatch() {
    let a = square(2.0);
    let mut b = square(4.0);
    b.stroke.push(b.fill[0].clone());
    assert_eq!(FilledShape::lerp(&a, &b, 0.5), a);

    let triangle = FilledShape {
        fill: vec![Region::solid(
            Path::from_points(vec![
                Point2D::new(0.0, 0.0),
                Point2D::new(1.0, 0.0),
                Point2D::new(0.0, 1.0),
            ]),
            vec![],
            Rgba8::opaque(1, 2, 3),
        )],
        stroke: vec![],
    };
    assert_eq!(FilledShape::lerp(&a, &triangle, 0.5), a);
}

#[test]
fn registry_resolves_known_guids_and_ignores_unknown() {
    let defs: BTreeMap<Guid, TweenerDef> = serde_json::from_value(json!({
        "m1": {"kind": "matrix", "keyframes": {"keys": [
            {"frame": 0, "value": {"a": 1.0, "b": 0.0, "c": 0.0, "d": 1.0, "tx": 0.0, "ty": 0.0}},
            {"frame": 2, "value": {"a": 1.0, "b": 0.0, "c": 0.0, "d": 1.0, "tx": 10.0, "ty": 0.0}}
        ]}},
        "c1": {"kind": "color", "keyframes": {"mode": "hold", "keys": [
            {"frame": 0, "value": {"mul": [1.0, 1.0, 1.0, 0.5], "add": [0.0, 0.0, 0.0, 0.0]}}
        ]}}
    }))
    .unwrap();
    let registry = TweenRegistry::from_defs(&defs, CurveMode::Full).unwrap();

    let active = registry.resolve(&TweenDescriptor {
        matrix: Some("m1".into()),
        color: Some("missing".into()),
        shape: None,
    });
    assert!(!active.is_empty());
    assert_eq!(
        active.matrix_at(1).unwrap(),
        Some(Matrix2D::translate(5.0, 0.0))
    );
    assert_eq!(active.color_at(1).unwrap(), None);
    assert_eq!(active.shape_at(1).unwrap(), None);

    // A GUID of the wrong kind does not resolve.
    let wrong = registry.resolve(&TweenDescriptor {
        matrix: Some("c1".into()),
        ..TweenDescriptor::default()
    });
    assert!(wrong.is_empty());
}

#[test]
fn invalid_tweener_is_rejected() {
    let mut defs = BTreeMap::new();
    defs.insert(
        "bad".to_owned(),
        TweenerDef::Color {
            keyframes: Keyframes {
                keys: vec![],
                mode: InterpMode::Linear,
            },
        },
    );
    assert!(TweenRegistry::from_defs(&defs, CurveMode::Full).is_err());
}
