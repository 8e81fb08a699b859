use super::*;
use crate::foundation::core::Point2D;

fn p(x: f64, y: f64) -> Point2D {
    Point2D::new(x, y)
}

fn tri(offset: f64) -> Path {
    Path::from_points(vec![
        p(offset, 0.0),
        p(offset + 4.0, 0.0),
        p(offset + 4.0, 4.0),
    ])
}

fn red() -> Rgba8 {
    Rgba8::opaque(255, 0, 0)
}

#[test]
fn region_equality_covers_color_contour_and_holes() {
    let a = Region::solid(tri(0.0), vec![tri(1.0)], red());
    assert_eq!(a, Region::solid(tri(0.0), vec![tri(1.0)], red()));
    assert_ne!(a, Region::solid(tri(0.0), vec![tri(1.0)], Rgba8::new(255, 0, 0, 254)));
    assert_ne!(a, Region::solid(tri(0.0), vec![], red()));
    assert_ne!(a, Region::solid(tri(0.0), vec![tri(2.0)], red()));
    assert_ne!(a, Region::solid(tri(3.0), vec![tri(1.0)], red()));
}

#[test]
fn filled_shape_equality_is_ordered_per_list() {
    let r0 = Region::solid(tri(0.0), vec![], red());
    let r1 = Region::solid(tri(10.0), vec![], red());
    let a = FilledShape {
        fill: vec![r0.clone(), r1.clone()],
        stroke: vec![],
    };
    let swapped = FilledShape {
        fill: vec![r1.clone(), r0.clone()],
        stroke: vec![],
    };
    let moved_to_stroke = FilledShape {
        fill: vec![r0.clone()],
        stroke: vec![r1.clone()],
    };
    assert_eq!(a, a.clone());
    assert_ne!(a, swapped);
    assert_ne!(a, moved_to_stroke);
    assert_eq!(moved_to_stroke.regions().count(), 2);
}

#[test]
fn shape_bound_unions_fill_and_stroke() {
    let shape = FilledShape {
        fill: vec![Region::solid(tri(0.0), vec![], red())],
        stroke: vec![Region::solid(tri(10.0), vec![], red())],
    };
    let b = shape.bound().unwrap();
    assert_eq!(b.top_left, p(0.0, 0.0));
    assert_eq!(b.bottom_right, p(14.0, 4.0));
    assert!(FilledShape::default().bound().is_none());
    assert!(FilledShape::default().is_empty());
}

#[test]
fn transformed_shape_keeps_fill_style() {
    let shape = FilledShape {
        fill: vec![Region::solid(tri(0.0), vec![tri(1.0)], red())],
        stroke: vec![],
    };
    let moved = shape.transformed(&Matrix2D::translate(5.0, 5.0));
    assert_eq!(moved.fill[0].fill.solid_color(), red());
    assert_eq!(moved.fill[0].contour.points()[0], p(5.0, 5.0));
    assert_eq!(moved.fill[0].holes[0].points()[0], p(6.0, 5.0));
}
